//! Ship shape catalog: 7 tetromino-like base masks and their rotations.
//!
//! All 28 orientations are derived at compile time by rotating each base
//! mask clockwise three times; nothing here is ever recomputed per
//! placement.

use crate::config::{NUM_SHAPES, ROTATIONS, SHAPE_SIZE};

/// A 4x4 occupancy mask, indexed `[row][col]`.
pub type ShapeMask = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

const O: bool = false;
const X: bool = true;

/// The seven base shapes at 0 degrees, as the clients number them (1..=7).
const BASE_SHAPES: [ShapeMask; NUM_SHAPES] = [
    // 1: square
    [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // 2: bar
    [[X, O, O, O], [X, O, O, O], [X, O, O, O], [X, O, O, O]],
    // 3: S
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // 4: L
    [[X, O, O, O], [X, O, O, O], [X, X, O, O], [O, O, O, O]],
    // 5: Z
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // 6: J
    [[O, X, O, O], [O, X, O, O], [X, X, O, O], [O, O, O, O]],
    // 7: T
    [[X, X, X, O], [O, X, O, O], [O, O, O, O], [O, O, O, O]],
];

/// Rotate a mask 90 degrees clockwise: `mask[i][j]` maps to
/// `rotated[j][N-1-i]`.
pub const fn rotate_clockwise(mask: &ShapeMask) -> ShapeMask {
    let mut rotated = [[false; SHAPE_SIZE]; SHAPE_SIZE];
    let mut i = 0;
    while i < SHAPE_SIZE {
        let mut j = 0;
        while j < SHAPE_SIZE {
            rotated[j][SHAPE_SIZE - 1 - i] = mask[i][j];
            j += 1;
        }
        i += 1;
    }
    rotated
}

/// The anchor cell of a mask: first occupied cell in a row-major scan.
/// The client's placement coordinate names where this cell lands.
pub fn anchor(mask: &ShapeMask) -> (usize, usize) {
    for row in 0..SHAPE_SIZE {
        for col in 0..SHAPE_SIZE {
            if mask[row][col] {
                return (row, col);
            }
        }
    }
    // every catalog mask has at least one occupied cell
    (0, 0)
}

/// Process-wide immutable table of every shape in every orientation.
pub struct ShipCatalog {
    masks: [[ShapeMask; ROTATIONS]; NUM_SHAPES],
}

impl ShipCatalog {
    const fn precompute() -> Self {
        let mut masks = [[[[false; SHAPE_SIZE]; SHAPE_SIZE]; ROTATIONS]; NUM_SHAPES];
        let mut shape = 0;
        while shape < NUM_SHAPES {
            masks[shape][0] = BASE_SHAPES[shape];
            let mut rotation = 1;
            while rotation < ROTATIONS {
                masks[shape][rotation] = rotate_clockwise(&masks[shape][rotation - 1]);
                rotation += 1;
            }
            shape += 1;
        }
        Self { masks }
    }

    /// Look up a mask by the 1-based shape and rotation numbers the wire
    /// protocol uses. Callers validate the ranges first.
    pub fn mask(&self, shape: u32, rotation: u32) -> &ShapeMask {
        &self.masks[shape as usize - 1][rotation as usize - 1]
    }
}

/// The catalog, built once at compile time.
pub static CATALOG: ShipCatalog = ShipCatalog::precompute();
