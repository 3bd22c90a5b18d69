//! Placement validator: commits a full fleet onto a board or rejects it.

use core::fmt;

use crate::board::{Board, Cell, FLEET_SIZE};
use crate::catalog::{anchor, ShipCatalog};
use crate::config::{NUM_SHAPES, PIECE_COUNT, ROTATIONS, SHAPE_SIZE};

/// One `(type, rotation, col, row)` tuple from the placement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePlacement {
    pub shape: u32,
    pub rotation: u32,
    pub col: u32,
    pub row: u32,
}

impl PiecePlacement {
    /// Split a flat argument list (4 integers per piece) into tuples.
    /// Callers check the count first.
    pub fn from_args(args: &[u32]) -> Vec<PiecePlacement> {
        args.chunks_exact(4)
            .map(|c| PiecePlacement {
                shape: c[0],
                rotation: c[1],
                col: c[2],
                row: c[3],
            })
            .collect()
    }
}

/// Why a placement batch was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Shape number outside 1..=7.
    ShapeOutOfRange,
    /// Rotation number outside 1..=4.
    RotationOutOfRange,
    /// Anchor coordinate outside the declared board.
    PositionOutOfBoard,
    /// Some occupied cell of the rotated shape falls off the grid.
    DoesNotFit,
    /// Some occupied cell lands on an already-occupied cell.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ShapeOutOfRange => write!(f, "shape number out of range"),
            PlacementError::RotationOutOfRange => write!(f, "rotation number out of range"),
            PlacementError::PositionOutOfBoard => write!(f, "position outside the board"),
            PlacementError::DoesNotFit => write!(f, "shape does not fit on the board"),
            PlacementError::Overlap => write!(f, "shape overlaps a placed ship"),
        }
    }
}

/// Validate and commit exactly [`PIECE_COUNT`] pieces.
///
/// Range errors (shape, rotation, anchor coordinate) are detected in a
/// pre-pass and leave the board untouched. Fit and overlap errors are only
/// found while writing cells, so they reset the whole board to empty: a
/// single bad piece invalidates the entire attempt and the client must
/// resubmit all five ships. On success ships get ids 1..=PIECE_COUNT in
/// submission order and the fleet count is armed.
pub fn place_fleet(
    board: &mut Board,
    catalog: &ShipCatalog,
    pieces: &[PiecePlacement],
) -> Result<(), PlacementError> {
    debug_assert_eq!(pieces.len(), PIECE_COUNT);

    for piece in pieces {
        if piece.shape < 1 || piece.shape > NUM_SHAPES as u32 {
            return Err(PlacementError::ShapeOutOfRange);
        }
        if piece.rotation < 1 || piece.rotation > ROTATIONS as u32 {
            return Err(PlacementError::RotationOutOfRange);
        }
        // The declared coordinate range is inclusive of the far edge; an
        // edge anchor still fails the commit pass below.
        if piece.row > board.height() as u32 || piece.col > board.width() as u32 {
            return Err(PlacementError::PositionOutOfBoard);
        }
    }

    for (index, piece) in pieces.iter().enumerate() {
        let id = (index + 1) as u8;
        let mask = catalog.mask(piece.shape, piece.rotation);
        let (anchor_row, anchor_col) = anchor(mask);

        for mask_row in 0..SHAPE_SIZE {
            for mask_col in 0..SHAPE_SIZE {
                if !mask[mask_row][mask_col] {
                    continue;
                }
                let row = piece.row as i32 + mask_row as i32 - anchor_row as i32;
                let col = piece.col as i32 + mask_col as i32 - anchor_col as i32;
                if !board.contains(row, col) {
                    board.clear();
                    return Err(PlacementError::DoesNotFit);
                }
                let (row, col) = (row as usize, col as usize);
                if board.cell(row, col) != Cell::Empty {
                    board.clear();
                    return Err(PlacementError::Overlap);
                }
                board.set_cell(row, col, Cell::Occupied(id));
            }
        }
    }

    board.set_ships_remaining(FLEET_SIZE);
    Ok(())
}
