//! Disjoint ownership invariant: no position belongs to both players.

use super::Invariant;
use crate::encoding::{Field, player_position_mask};
use crate::state::GameState;
use crate::types::Player;

/// Invariant: within every field, Green's and Purple's halves never overlap.
///
/// Applies to all nine sub-boards and to the meta-board.
pub struct DisjointOwnershipInvariant;

fn disjoint(field: Field) -> bool {
    player_position_mask(field, Player::Green) & player_position_mask(field, Player::Purple) == 0
}

impl Invariant<GameState> for DisjointOwnershipInvariant {
    fn holds(state: &GameState) -> bool {
        disjoint(state.meta_board()) && state.boards().iter().copied().all(disjoint)
    }

    fn description() -> &'static str {
        "No position is marked for both players"
    }
}
