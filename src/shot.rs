//! Shot resolver: applies a fired coordinate to the opponent's board.

use core::fmt;

use crate::board::{Board, Cell};
use crate::codec::ShotMark;

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    pub mark: ShotMark,
    /// The target board owner's ships still afloat after this shot.
    pub remaining: u32,
    /// Set when this shot turned the last cell of a ship.
    pub sunk: bool,
}

/// Why a shot was rejected. Neither case changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    OutOfBounds,
    AlreadyFired,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "shot outside the board"),
            ShotError::AlreadyFired => write!(f, "cell was already fired at"),
        }
    }
}

/// Fire at `(col, row)` on the opponent's board.
///
/// An empty cell becomes a miss; an occupied cell becomes a hit and, when
/// it was the ship's last unhit cell, sinks the ship and decrements the
/// owner's ships-remaining count. A count of zero in the returned outcome
/// means the firer has won.
pub fn resolve_shot(board: &mut Board, col: u32, row: u32) -> Result<ShotOutcome, ShotError> {
    if !board.contains(row as i32, col as i32) {
        return Err(ShotError::OutOfBounds);
    }
    let (row, col) = (row as usize, col as usize);

    match board.cell(row, col) {
        Cell::Hit(_) | Cell::Miss => Err(ShotError::AlreadyFired),
        Cell::Empty => {
            board.set_cell(row, col, Cell::Miss);
            Ok(ShotOutcome {
                mark: ShotMark::Miss,
                remaining: board.ships_remaining(),
                sunk: false,
            })
        }
        Cell::Occupied(id) => {
            board.set_cell(row, col, Cell::Hit(id));
            let sunk = !board.ship_afloat(id);
            if sunk {
                board.sink_one();
            }
            Ok(ShotOutcome {
                mark: ShotMark::Hit,
                remaining: board.ships_remaining(),
                sunk,
            })
        }
    }
}
