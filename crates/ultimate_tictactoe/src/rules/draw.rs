//! Draw detection over two-player fields.

use crate::encoding::{FULL_MASK, Field, bit_of, grayscale};
use crate::types::Position;

/// Checks if every position is marked, regardless of who marked it.
pub fn is_fully_occupied(field: Field) -> bool {
    grayscale(field) == FULL_MASK
}

/// Checks if every sub-board is either owned on the meta-board or has no
/// free cell left, so no further move exists anywhere.
pub fn all_boards_settled(meta: Field, boards: &[Field; 9]) -> bool {
    let full_boards = Position::ALL
        .iter()
        .filter(|pos| is_fully_occupied(boards[pos.index()]))
        .fold(0, |acc, pos| acc | bit_of(*pos));
    grayscale(meta) | full_boards == FULL_MASK
}
