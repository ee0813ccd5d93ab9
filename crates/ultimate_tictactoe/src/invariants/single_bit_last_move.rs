//! Last move invariant: the recorded move carries exactly one bit.

use super::Invariant;
use crate::state::GameState;

/// Invariant: `last_move` is absent or has exactly one bit set, and that
/// bit is marked on some sub-board.
pub struct SingleBitLastMoveInvariant;

impl Invariant<GameState> for SingleBitLastMoveInvariant {
    fn holds(state: &GameState) -> bool {
        match state.last_move() {
            None => state.boards().iter().all(|b| b.bits() == 0),
            Some(mv) => {
                mv.bits().count_ones() == 1
                    && state.boards().iter().any(|b| b.bits() & mv.bits() != 0)
            }
        }
    }

    fn description() -> &'static str {
        "Last move is a single bit present on the board"
    }
}
