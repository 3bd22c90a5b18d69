//! Fixed game parameters shared by every session.

/// Default listening port for player 1.
pub const DEFAULT_PORT1: u16 = 2201;
/// Default listening port for player 2.
pub const DEFAULT_PORT2: u16 = 2202;

/// Largest board dimension the fixed-capacity grid supports.
pub const MAX_BOARD: usize = 24;
/// Smallest board dimension a client may declare.
pub const MIN_BOARD: u32 = 10;

/// Ships each player places.
pub const PIECE_COUNT: usize = 5;
/// Distinct base shapes in the catalog.
pub const NUM_SHAPES: usize = 7;
/// Clockwise orientations per shape.
pub const ROTATIONS: usize = 4;
/// Side length of the square shape mask.
pub const SHAPE_SIZE: usize = 4;
