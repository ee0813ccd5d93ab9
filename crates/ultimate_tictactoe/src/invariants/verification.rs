//! Formal verification of the bitfield encoding using Kani model checker.
//!
//! These proof harnesses check the encoding for every position and player
//! instead of sampled ones.

#[cfg(kani)]
mod proofs {
    use crate::{Field, Player, Position, bit_of, encode_move, owner_at, player_of, position_of};

    fn any_position() -> Position {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::ALL[index]
    }

    fn any_player() -> Player {
        if kani::any() { Player::Green } else { Player::Purple }
    }

    /// Proves: an encoded move is owned by its player at its position only.
    #[kani::proof]
    fn verify_encoded_move_owner() {
        let pos = any_position();
        let player = any_player();
        let mv = encode_move(bit_of(pos), player);

        assert_eq!(player_of(mv.bits()), Some(player));
        assert_eq!(owner_at(Field::from(mv), bit_of(pos)), Some(player));
        assert_eq!(mv.position(), pos);
    }

    /// Proves: position_of accepts exactly the nine position bits.
    #[kani::proof]
    fn verify_position_of_inverse() {
        let bit: u32 = kani::any();
        match position_of(bit) {
            Some(pos) => assert_eq!(bit_of(pos), bit),
            None => assert!(bit.count_ones() != 1 || bit > 0b100_000_000),
        }
    }
}
