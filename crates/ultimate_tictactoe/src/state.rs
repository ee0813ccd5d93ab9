//! Immutable game state snapshots.

use crate::encoding::{EncodedMove, Field, MetaBoardField, SubBoardField, bit_of, owner_at};
use crate::types::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// States are never mutated by the engine; every move produces a new
/// snapshot through [`apply_move`](crate::apply_move).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// One field per sub-board, row-major.
    pub(crate) boards: [SubBoardField; 9],
    /// Sub-board ownership.
    pub(crate) meta_board: MetaBoardField,
    /// Most recent move; absent before the first move.
    pub(crate) last_move: Option<EncodedMove>,
    /// Set once the game is over and never cleared afterwards.
    pub(crate) winner: Option<Outcome>,
}

impl GameState {
    /// Creates the empty starting state.
    pub fn new() -> Self {
        Self {
            boards: [Field::EMPTY; 9],
            meta_board: Field::EMPTY,
            last_move: None,
            winner: None,
        }
    }

    /// Returns all nine sub-board fields.
    pub fn boards(&self) -> &[SubBoardField; 9] {
        &self.boards
    }

    /// Returns the field of one sub-board.
    pub fn board(&self, sub_board: Position) -> SubBoardField {
        self.boards[sub_board.index()]
    }

    /// Returns the meta-board field.
    pub fn meta_board(&self) -> MetaBoardField {
        self.meta_board
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<EncodedMove> {
        self.last_move
    }

    /// Returns the outcome, once the game has ended.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// True once a winner or draw has been recorded.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Who marked `cell` inside `sub_board`.
    pub fn cell_owner(&self, sub_board: Position, cell: Position) -> Option<Player> {
        owner_at(self.board(sub_board), bit_of(cell))
    }

    /// Who captured `sub_board` on the meta-board.
    pub fn board_owner(&self, sub_board: Position) -> Option<Player> {
        owner_at(self.meta_board, bit_of(sub_board))
    }
}

/// The empty starting state.
pub fn initial_state() -> GameState {
    GameState::new()
}
