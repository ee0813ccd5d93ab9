//! Applying one move to produce the next state.

use crate::encoding::{EncodedMove, bit_of, encode_move};
use crate::rules::{all_boards_settled, has_won, is_fully_occupied};
use crate::state::GameState;
use crate::types::{Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move as submitted to the engine: the sub-board and the encoded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    /// Sub-board being played in.
    pub sub_board: Position,
    /// Cell bit in the half of the acting player.
    pub encoded: EncodedMove,
}

impl Play {
    /// Creates a new play.
    pub fn new(sub_board: Position, encoded: EncodedMove) -> Self {
        Self { sub_board, encoded }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}", self.encoded, self.sub_board)
    }
}

/// Applies a play and returns the resulting state.
///
/// Legality is not checked: the caller must only submit unmarked cells on
/// playable sub-boards (see [`crate::is_playable`] and
/// [`crate::Referee`]). A finished state is returned unchanged.
#[instrument(skip(state, play), fields(play = %play))]
pub fn apply_move(state: &GameState, play: Play) -> GameState {
    if state.winner.is_some() {
        warn!("Move submitted after game end, ignoring");
        return state.clone();
    }

    let index = play.sub_board.index();
    let updated = state.boards[index].with(play.encoded);
    let player = play.encoded.player();

    let mut next = state.clone();
    next.boards[index] = updated;
    next.last_move = Some(play.encoded);

    if has_won(updated, player, play.encoded.position_bit()) {
        let board_bit = bit_of(play.sub_board);
        let meta = state.meta_board.with(encode_move(board_bit, player));
        next.meta_board = meta;
        debug!(%player, sub_board = %play.sub_board, "Sub-board captured");

        if has_won(meta, player, board_bit) {
            info!(%player, "Meta-board won");
            next.winner = Some(Outcome::Winner(player));
            return next;
        }
        if is_fully_occupied(meta) {
            info!("Every sub-board captured without a line, draw");
            next.winner = Some(Outcome::Draw);
            return next;
        }
    } else if is_fully_occupied(updated) && is_fully_occupied(state.meta_board) {
        info!("Last open sub-board filled, draw");
        next.winner = Some(Outcome::Draw);
        return next;
    }

    if all_boards_settled(next.meta_board, &next.boards) {
        info!("No sub-board left to play, draw");
        next.winner = Some(Outcome::Draw);
    }

    next
}
