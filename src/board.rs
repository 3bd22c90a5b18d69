//! Per-player board state.

use crate::config::{MAX_BOARD, PIECE_COUNT};

/// Identifier of a placed ship, 1..=PIECE_COUNT in placement order.
pub type ShipId = u8;

/// One grid cell. A cell becomes `Hit` only from `Occupied` and `Miss`
/// only from `Empty`; ship identity survives the hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Miss,
    Hit(ShipId),
}

/// A fixed-capacity grid owned by one player, indexed `[row][col]`.
/// Only the placement validator (setup) and the shot resolver (battle)
/// mutate it.
pub struct Board {
    width: usize,
    height: usize,
    cells: [[Cell; MAX_BOARD]; MAX_BOARD],
    ships_remaining: u32,
}

impl Board {
    /// Create an empty board. Dimensions must already be validated
    /// against [`MAX_BOARD`].
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width <= MAX_BOARD && height <= MAX_BOARD);
        Self {
            width,
            height,
            cells: [[Cell::Empty; MAX_BOARD]; MAX_BOARD],
            ships_remaining: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Ships of this board's owner with at least one unhit cell.
    pub fn ships_remaining(&self) -> u32 {
        self.ships_remaining
    }

    pub(crate) fn set_ships_remaining(&mut self, count: u32) {
        self.ships_remaining = count;
    }

    pub(crate) fn sink_one(&mut self) {
        self.ships_remaining = self.ships_remaining.saturating_sub(1);
    }

    /// Whether signed coordinates address a real grid cell.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Reset every cell to `Empty`, discarding all placed ships.
    pub(crate) fn clear(&mut self) {
        self.cells = [[Cell::Empty; MAX_BOARD]; MAX_BOARD];
        self.ships_remaining = 0;
    }

    /// Whether any unhit cell of the given ship is left on the board.
    pub fn ship_afloat(&self, id: ShipId) -> bool {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row][col] == Cell::Occupied(id) {
                    return true;
                }
            }
        }
        false
    }

    /// Cells already fired at, row-major, as `(mark, col, row)` with the
    /// column first to match the wire format.
    pub fn fired_cells(&self) -> Vec<(crate::codec::ShotMark, u32, u32)> {
        let mut out = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                match self.cells[row][col] {
                    Cell::Hit(_) => {
                        out.push((crate::codec::ShotMark::Hit, col as u32, row as u32))
                    }
                    Cell::Miss => {
                        out.push((crate::codec::ShotMark::Miss, col as u32, row as u32))
                    }
                    _ => {}
                }
            }
        }
        out
    }

    /// Count of cells still `Occupied`, across all ships.
    pub fn occupied_cells(&self) -> usize {
        let mut count = 0;
        for row in 0..self.height {
            for col in 0..self.width {
                if matches!(self.cells[row][col], Cell::Occupied(_)) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// A freshly placed fleet always starts with every ship afloat.
pub const FLEET_SIZE: u32 = PIECE_COUNT as u32;
