//! Which sub-boards accept the next move.
//!
//! The cell index of the last move names the sub-board the opponent must
//! play in next. That constraint is void when the named sub-board is
//! already captured or has no free cell, in which case every sub-board
//! not yet captured is open.

use crate::encoding::{Field, bit_of, grayscale, owner_at, position_of};
use crate::rules::is_fully_occupied;
use crate::state::GameState;
use crate::types::Position;
use tracing::instrument;

/// Checks whether `sub_board` currently accepts a move.
#[instrument(level = "debug", skip(state), fields(sub_board = %sub_board))]
pub fn is_playable(state: &GameState, sub_board: Position) -> bool {
    // First move
    let Some(last_move) = state.last_move() else {
        return true;
    };

    if state.winner().is_some() {
        return false;
    }

    // Captured sub-boards are closed for good
    if owner_at(state.meta_board(), bit_of(sub_board)).is_some() {
        return false;
    }

    let Some(target) = position_of(grayscale(Field::from(last_move))) else {
        return false;
    };

    if target == sub_board {
        return !is_fully_occupied(state.board(target));
    }

    constraint_voided(state, target)
}

/// True when `target` can no longer be forced: captured or full.
fn constraint_voided(state: &GameState, target: Position) -> bool {
    owner_at(state.meta_board(), bit_of(target)).is_some()
        || is_fully_occupied(state.board(target))
}

/// The sub-board the next move is forced into.
///
/// `None` before the first move, after the game ends, and whenever the
/// constraint is void and the next player may choose freely.
pub fn forced_target(state: &GameState) -> Option<Position> {
    if state.is_over() {
        return None;
    }
    let target = state.last_move()?.position();
    (!constraint_voided(state, target)).then_some(target)
}

/// Every sub-board [`is_playable`] accepts, in position order.
pub fn playable_boards(state: &GameState) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| is_playable(state, *pos))
        .collect()
}

/// Every `(sub_board, cell)` pair that is both playable and unmarked.
pub fn open_cells(state: &GameState) -> Vec<(Position, Position)> {
    playable_boards(state)
        .into_iter()
        .flat_map(|sub_board| {
            Position::ALL
                .iter()
                .copied()
                .filter(move |cell| state.cell_owner(sub_board, *cell).is_none())
                .map(move |cell| (sub_board, cell))
        })
        .collect()
}
