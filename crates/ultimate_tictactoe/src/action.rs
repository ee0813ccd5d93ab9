//! First-class move actions for ultimate tic-tac-toe.
//!
//! A [`Move`] is the player's intent in domain terms. It is validated by
//! [`crate::Referee`] and lowered to an encoded [`Play`] for the engine.

use crate::encoding::{bit_of, encode_move};
use crate::transition::Play;
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player marking one cell of one sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board played in.
    pub sub_board: Position,
    /// The cell marked inside that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, sub_board: Position, cell: Position) -> Self {
        Self {
            player,
            sub_board,
            cell,
        }
    }

    /// Encodes this move for [`crate::apply_move`].
    pub fn to_play(self) -> Play {
        Play::new(self.sub_board, encode_move(bit_of(self.cell), self.player))
    }
}

impl From<Play> for Move {
    fn from(play: Play) -> Self {
        Self::new(play.encoded.player(), play.sub_board, play.encoded.position())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} / {}", self.player, self.sub_board, self.cell)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The sub-board does not accept moves right now.
    #[display("Sub-board {} is not playable", _0)]
    BoardNotPlayable(Position),

    /// The cell is already marked.
    #[display("Cell {} of sub-board {} is already occupied", cell, sub_board)]
    CellOccupied {
        /// Sub-board of the rejected move.
        sub_board: Position,
        /// Cell of the rejected move.
        cell: Position,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_encodes_player_and_cell() {
        let mv = Move::new(Player::Purple, Position::TopRight, Position::Center);
        let play = mv.to_play();
        assert_eq!(play.sub_board, Position::TopRight);
        assert_eq!(play.encoded.player(), Player::Purple);
        assert_eq!(play.encoded.position(), Position::Center);
        assert_eq!(Move::from(play), mv);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::WrongPlayer(Player::Green).to_string(),
            "It's not green's turn"
        );
        assert_eq!(
            MoveError::CellOccupied {
                sub_board: Position::Center,
                cell: Position::TopLeft,
            }
            .to_string(),
            "Cell Top-left of sub-board Center is already occupied"
        );
    }
}
