//! Two-player bitfield encoding shared by sub-boards and the meta-board.
//!
//! Every board is an 18-bit field. Bits 0-8 hold Green's occupancy over
//! the nine positions, bits 9-17 hold Purple's:
//!
//! ```text
//! purple      | green
//! 876 543 210 | 876 543 210
//! ```
//!
//! A move is a field with exactly one bit set, so it names both the
//! position played and the player who played it.

use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of positions per player half.
pub const HALF_WIDTH: u32 = 9;

/// Mask with all nine positions of one half set.
pub const FULL_MASK: u32 = 0b111_111_111;

/// Mask covering both halves of a field.
const FIELD_MASK: u32 = (FULL_MASK << HALF_WIDTH) | FULL_MASK;

/// An 18-bit two-player occupancy field.
///
/// The same encoding backs a sub-board (positions are cells) and the
/// meta-board (positions are sub-board indices).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{:#020b}", _0)]
#[serde(transparent)]
pub struct Field(u32);

/// Field of one inner 3x3 board.
pub type SubBoardField = Field;

/// Field tracking which player owns each sub-board.
pub type MetaBoardField = Field;

impl Field {
    /// Field with no position marked.
    pub const EMPTY: Field = Field(0);

    /// Wraps raw bits, dropping anything above bit 17.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits & FIELD_MASK)
    }

    /// Builds a field from Green's and Purple's 9-bit position masks.
    pub fn from_halves(green: u32, purple: u32) -> Self {
        Self::from_bits((green & FULL_MASK) | ((purple & FULL_MASK) << HALF_WIDTH))
    }

    /// Raw 18-bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns this field with the move's bit set.
    pub fn with(self, mv: EncodedMove) -> Self {
        Self(self.0 | mv.bits())
    }

    /// Owner of the position named by `bit`.
    pub fn owner_at(self, bit: u32) -> Option<Player> {
        owner_at(self, bit)
    }

    /// One player's 9-bit view of this field.
    pub fn player_mask(self, player: Player) -> u32 {
        player_position_mask(self, player)
    }
}

impl From<EncodedMove> for Field {
    fn from(mv: EncodedMove) -> Self {
        Field(mv.bits())
    }
}

/// A single position bit placed in the half of the player who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EncodedMove(u32);

impl EncodedMove {
    /// Validates raw bits: exactly one of the eighteen field bits set.
    pub fn from_bits(bits: u32) -> Option<Self> {
        (bits.is_power_of_two() && bits & FIELD_MASK == bits).then_some(Self(bits))
    }

    /// Raw 18-bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// The player who made this move.
    pub fn player(self) -> Player {
        if self.0 >> HALF_WIDTH != 0 {
            Player::Purple
        } else {
            Player::Green
        }
    }

    /// The played position as a low-half bit, regardless of player.
    pub fn position_bit(self) -> u32 {
        grayscale(Field::from(self))
    }

    /// The played position.
    pub fn position(self) -> Position {
        let index = self.position_bit().trailing_zeros() as usize;
        Position::ALL[index]
    }
}

impl TryFrom<u32> for EncodedMove {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("{:#b} is not a single-bit move", bits))
    }
}

impl From<EncodedMove> for u32 {
    fn from(mv: EncodedMove) -> Self {
        mv.0
    }
}

impl std::fmt::Display for EncodedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player(), self.position())
    }
}

/// Single-bit mask for a position.
pub fn bit_of(position: Position) -> u32 {
    1 << position.index()
}

/// Inverse of [`bit_of`]; `None` unless `bit` is one of the nine position bits.
#[instrument(level = "trace")]
pub fn position_of(bit: u32) -> Option<Position> {
    if !bit.is_power_of_two() || bit & FULL_MASK != bit {
        return None;
    }
    Position::from_index(bit.trailing_zeros() as usize)
}

/// Which player, if any, has marked the position named by `bit`.
///
/// `bit` must be a low-half position mask.
pub fn owner_at(field: Field, bit: u32) -> Option<Player> {
    if field.bits() & bit != 0 {
        Some(Player::Green)
    } else if (field.bits() >> HALF_WIDTH) & bit != 0 {
        Some(Player::Purple)
    } else {
        None
    }
}

/// Isolates one player's positions as a 9-bit mask.
pub fn player_position_mask(field: Field, player: Player) -> u32 {
    match player {
        Player::Green => field.bits() & FULL_MASK,
        Player::Purple => field.bits() >> HALF_WIDTH,
    }
}

/// Union of both players' positions, ignoring ownership.
pub fn grayscale(field: Field) -> u32 {
    player_position_mask(field, Player::Green) | player_position_mask(field, Player::Purple)
}

/// Moves a position bit into the half belonging to `player`.
pub fn encode_move(bit: u32, player: Player) -> EncodedMove {
    debug_assert!(position_of(bit).is_some(), "not a position bit: {:#b}", bit);
    match player {
        Player::Green => EncodedMove(bit),
        Player::Purple => EncodedMove(bit << HALF_WIDTH),
    }
}

/// Player whose half carries a set bit; Purple wins ties.
///
/// Meant for values carrying at most one bit.
pub fn player_of(value: u32) -> Option<Player> {
    if value >> HALF_WIDTH != 0 {
        Some(Player::Purple)
    } else if value & FULL_MASK != 0 {
        Some(Player::Green)
    } else {
        None
    }
}
