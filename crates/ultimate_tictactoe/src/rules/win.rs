//! Win detection over two-player fields.

use crate::encoding::{Field, player_position_mask, position_of};
use crate::types::Player;
use tracing::instrument;

/// The eight winning lines as 9-bit position masks.
pub const LINES: [u32; 8] = [
    // Rows
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // Columns
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // Diagonals
    0b100_010_001,
    0b001_010_100,
];

/// Lines passing through one position (between two and four of them).
#[derive(Debug, Clone, Copy)]
struct LineSet {
    lines: [u32; 4],
    len: usize,
}

/// For each position index, the lines that contain it.
static LINES_THROUGH: [LineSet; 9] = build_lines_through();

const fn build_lines_through() -> [LineSet; 9] {
    let mut table = [LineSet {
        lines: [0; 4],
        len: 0,
    }; 9];
    let mut pos = 0;
    while pos < 9 {
        let bit = 1u32 << pos;
        let mut i = 0;
        while i < LINES.len() {
            if LINES[i] & bit != 0 {
                let len = table[pos].len;
                table[pos].lines[len] = LINES[i];
                table[pos].len = len + 1;
            }
            i += 1;
        }
        pos += 1;
    }
    table
}

/// Lines containing the position named by `bit`; empty for anything that
/// is not a single position bit.
pub fn lines_through(bit: u32) -> &'static [u32] {
    match position_of(bit) {
        Some(pos) => {
            let set = &LINES_THROUGH[pos.index()];
            &set.lines[..set.len]
        }
        None => &[],
    }
}

/// Checks whether `player` completed a line through the position just played.
///
/// Only lines containing `just_played` are examined, so the check must run
/// after every move for a win to be noticed.
#[instrument(level = "trace", skip(field), fields(field = %field))]
pub fn has_won(field: Field, player: Player, just_played: u32) -> bool {
    let mask = player_position_mask(field, player);
    lines_through(just_played)
        .iter()
        .any(|&line| mask & line == line)
}

/// Checks every line, not only those through a recent move.
pub fn completes_any_line(field: Field, player: Player) -> bool {
    let mask = player_position_mask(field, player);
    LINES.iter().any(|&line| mask & line == line)
}
