//! Contract-based validation layered on top of the unchecked engine.
//!
//! [`apply_move`] trusts its input. The [`Referee`] checks preconditions
//! before handing a move to it and, in debug builds, verifies the
//! resulting state against [`GameInvariants`].

use crate::action::{Move, MoveError};
use crate::config::RulesConfig;
use crate::encoding::player_of;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::playability::{is_playable, open_cells};
use crate::state::{GameState, initial_state};
use crate::transition::apply_move;
use crate::types::Player;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(&self, state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(&self, before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No outcome has been recorded yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a finished game.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Compares the mover against the expected player.
    pub fn check(mv: &Move, expected: Player) -> Result<(), MoveError> {
        if mv.player != expected {
            Err(MoveError::WrongPlayer(mv.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The sub-board must currently accept moves.
pub struct BoardIsPlayable;

impl BoardIsPlayable {
    /// Applies the forced-target rules to the move's sub-board.
    pub fn check(mv: &Move, state: &GameState) -> Result<(), MoveError> {
        if is_playable(state, mv.sub_board) {
            Ok(())
        } else {
            Err(MoveError::BoardNotPlayable(mv.sub_board))
        }
    }
}

/// Precondition: The cell must be unmarked.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Looks the cell up in its sub-board.
    pub fn check(mv: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.cell_owner(mv.sub_board, mv.cell).is_some() {
            Err(MoveError::CellOccupied {
                sub_board: mv.sub_board,
                cell: mv.cell,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game running, right player,
/// playable sub-board, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mv: &Move, state: &GameState, expected: Player) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        PlayersTurn::check(mv, expected)?;
        BoardIsPlayable::check(mv, state)?;
        CellIsEmpty::check(mv, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Referee
// ─────────────────────────────────────────────────────────────

/// Legality-checking front end to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referee {
    config: RulesConfig,
}

impl Referee {
    /// Creates a referee for the given rules.
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Returns the rules in force.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Player due to move: the opponent of whoever moved last, or the
    /// configured opening player.
    pub fn next_player(&self, state: &GameState) -> Player {
        state
            .last_move()
            .and_then(|mv| player_of(mv.bits()))
            .map(Player::opponent)
            .unwrap_or(*self.config.first_player())
    }

    /// Every legal move for the player due to move.
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.is_over() {
            return Vec::new();
        }
        let player = self.next_player(state);
        open_cells(state)
            .into_iter()
            .map(|(sub_board, cell)| Move::new(player, sub_board, cell))
            .collect()
    }

    /// Validates a move, applies it and checks the result.
    #[instrument(skip(self, state, mv), fields(mv = %mv))]
    pub fn play(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError> {
        self.pre(state, &mv)?;

        let next = apply_move(state, mv.to_play());

        #[cfg(debug_assertions)]
        self.post(state, &next)?;

        Ok(next)
    }

    /// Replays moves from the initial state, stopping at the first illegal one.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub fn replay(&self, moves: &[Move]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(initial_state(), |state, mv| self.play(&state, *mv))
    }
}

impl Contract<GameState, Move> for Referee {
    fn pre(&self, state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state, self.next_player(state)).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })
    }

    fn post(&self, _before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
