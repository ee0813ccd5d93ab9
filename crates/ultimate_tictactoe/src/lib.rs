//! Ultimate tic-tac-toe rules engine.
//!
//! The game is played on a 3x3 meta-board whose nine cells are themselves
//! tic-tac-toe boards. Winning a sub-board captures that cell of the
//! meta-board; three captured sub-boards in a line win the game. The cell
//! a player marks names the sub-board the opponent must play in next.
//!
//! # Architecture
//!
//! - **Encoding**: every board is an 18-bit two-player [`Field`]; a move is
//!   a single bit in the mover's half ([`EncodedMove`]).
//! - **Rules**: one win/draw evaluator ([`has_won`], [`is_fully_occupied`])
//!   serves sub-boards and the meta-board alike.
//! - **Playability**: [`is_playable`] resolves the forced-target rule.
//! - **Transition**: [`apply_move`] is a pure, unchecked `state -> state`
//!   function.
//! - **Referee**: [`Referee`] layers turn order and legality checks over
//!   the transition, with [`invariants`] verified in debug builds.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{Move, Player, Position, Referee, initial_state, playable_boards};
//!
//! let referee = Referee::default();
//! let state = referee
//!     .play(&initial_state(), Move::new(Player::Green, Position::Center, Position::TopLeft))
//!     .unwrap();
//!
//! // Purple is sent to the top-left sub-board.
//! assert_eq!(playable_boards(&state), vec![Position::TopLeft]);
//! assert_eq!(referee.next_player(&state), Player::Purple);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod encoding;
pub mod invariants;
mod playability;
pub mod rules;
mod state;
mod transition;
mod types;

// Crate-level exports - Core types
pub use types::{Outcome, POSITIONS, Player, Position};

// Crate-level exports - Encoding
pub use encoding::{
    EncodedMove, FULL_MASK, Field, HALF_WIDTH, MetaBoardField, SubBoardField, bit_of, encode_move,
    grayscale, owner_at, player_of, player_position_mask, position_of,
};

// Crate-level exports - Rules
pub use rules::{LINES, has_won, is_fully_occupied};

// Crate-level exports - State and transition
pub use playability::{forced_target, is_playable, open_cells, playable_boards};
pub use state::{GameState, initial_state};
pub use transition::{Play, apply_move};

// Crate-level exports - Validation layer
pub use action::{Move, MoveError};
pub use config::{ConfigError, RulesConfig};
pub use contracts::{
    BoardIsPlayable, CellIsEmpty, Contract, GameNotOver, LegalMove, PlayersTurn, Referee,
};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
