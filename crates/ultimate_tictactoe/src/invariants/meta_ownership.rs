//! Meta ownership invariant: the meta-board agrees with the sub-boards.

use super::Invariant;
use crate::encoding::{bit_of, owner_at};
use crate::rules::completes_any_line;
use crate::state::GameState;
use crate::types::{Player, Position};
use tracing::warn;

/// Invariant: a sub-board is owned on the meta-board exactly when some
/// player has a completed line in it, and the owner is one such player.
pub struct MetaOwnershipInvariant;

impl Invariant<GameState> for MetaOwnershipInvariant {
    fn holds(state: &GameState) -> bool {
        Position::ALL.iter().all(|&pos| {
            let board = state.board(pos);
            let valid = match owner_at(state.meta_board(), bit_of(pos)) {
                Some(owner) => completes_any_line(board, owner),
                None => {
                    !completes_any_line(board, Player::Green)
                        && !completes_any_line(board, Player::Purple)
                }
            };
            if !valid {
                warn!(sub_board = %pos, "Meta-board ownership disagrees with sub-board");
            }
            valid
        })
    }

    fn description() -> &'static str {
        "Meta-board ownership matches completed sub-board lines"
    }
}
