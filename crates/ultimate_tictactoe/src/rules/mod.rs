//! Win and draw evaluation for any two-player 9-position field.
//!
//! These are pure functions over [`Field`](crate::Field) values, applied
//! identically to sub-boards (positions are cells) and to the meta-board
//! (positions are sub-board indices).

pub mod draw;
pub mod win;

pub use draw::{all_boards_settled, is_fully_occupied};
pub use win::{LINES, completes_any_line, has_won, lines_through};
