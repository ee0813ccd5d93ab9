//! Tests for the unchecked transition and the forced-target rules.

use ultimate_tictactoe::{
    Field, GameState, Outcome, Play, Player, Position, apply_move, bit_of, encode_move,
    forced_target, initial_state, is_playable, owner_at, playable_boards,
};

fn play(state: &GameState, sub_board: Position, cell: Position, player: Player) -> GameState {
    apply_move(state, Play::new(sub_board, encode_move(bit_of(cell), player)))
}

/// Marks the top row of `sub_board` for `player`, capturing it.
fn capture(state: &GameState, sub_board: Position, player: Player) -> GameState {
    [Position::TopLeft, Position::TopCenter, Position::TopRight]
        .into_iter()
        .fold(state.clone(), |s, cell| play(&s, sub_board, cell, player))
}

#[test]
fn test_initial_state_all_playable() {
    let state = initial_state();
    for pos in Position::ALL {
        assert!(is_playable(&state, pos));
    }
}

#[test]
fn test_initial_state_fields_empty() {
    let state = initial_state();
    assert!(state.boards().iter().all(|b| *b == Field::EMPTY));
    assert_eq!(state.meta_board(), Field::EMPTY);
    assert_eq!(state.last_move(), None);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_apply_move_leaves_input_untouched() {
    let state = play(&initial_state(), Position::Center, Position::TopLeft, Player::Green);
    let snapshot = state.clone();
    let next = play(&state, Position::TopLeft, Position::Center, Player::Purple);
    assert_eq!(state, snapshot);
    assert_ne!(next, state);
}

#[test]
fn test_forced_sequence_captures_sub_board() {
    use Player::{Green, Purple};
    use Position::*;

    let moves = [
        (Green, TopLeft, TopLeft),
        (Purple, TopLeft, Center),
        (Green, Center, TopCenter),
        (Purple, TopCenter, TopLeft),
        (Green, TopLeft, TopCenter),
        (Purple, TopCenter, TopRight),
        (Green, TopRight, MiddleRight),
        (Purple, MiddleRight, TopLeft),
    ];

    let mut state = initial_state();
    for (player, sub_board, cell) in moves {
        assert_eq!(playable_boards(&state).len(), if state.last_move().is_none() { 9 } else { 1 });
        assert!(is_playable(&state, sub_board), "{} should be playable", sub_board);
        state = play(&state, sub_board, cell, player);
        assert_eq!(forced_target(&state), Some(cell));
    }
    assert_eq!(owner_at(state.meta_board(), bit_of(TopLeft)), None);

    // Green completes the top row of the top-left sub-board.
    state = play(&state, TopLeft, TopRight, Green);
    assert_eq!(owner_at(state.meta_board(), bit_of(TopLeft)), Some(Green));
    assert_eq!(state.winner(), None);
    assert_eq!(forced_target(&state), Some(TopRight));
    assert_eq!(playable_boards(&state), vec![TopRight]);

    // Purple sends Green back to the captured sub-board: free choice.
    state = play(&state, TopRight, TopLeft, Purple);
    assert_eq!(forced_target(&state), None);
    let playable = playable_boards(&state);
    assert_eq!(playable.len(), 8);
    assert!(!playable.contains(&TopLeft));
}

#[test]
fn test_meta_line_sets_winner_in_completing_move() {
    let mut state = initial_state();
    state = capture(&state, Position::TopLeft, Player::Green);
    state = capture(&state, Position::TopCenter, Player::Green);
    state = play(&state, Position::TopRight, Position::TopLeft, Player::Green);
    state = play(&state, Position::TopRight, Position::TopCenter, Player::Green);
    assert_eq!(state.winner(), None);

    state = play(&state, Position::TopRight, Position::TopRight, Player::Green);
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::Green)));
    assert!(playable_boards(&state).is_empty());
}

#[test]
fn test_all_sub_boards_captured_without_line_is_draw() {
    // G P G / G P P / P G G on the meta-board.
    let owners = [
        (Position::TopLeft, Player::Green),
        (Position::TopCenter, Player::Purple),
        (Position::TopRight, Player::Green),
        (Position::MiddleLeft, Player::Green),
        (Position::Center, Player::Purple),
        (Position::MiddleRight, Player::Purple),
        (Position::BottomLeft, Player::Purple),
        (Position::BottomCenter, Player::Green),
        (Position::BottomRight, Player::Green),
    ];

    let mut state = initial_state();
    for (i, (sub_board, player)) in owners.into_iter().enumerate() {
        assert_eq!(state.winner(), None, "ended early at capture {}", i);
        state = capture(&state, sub_board, player);
    }
    assert_eq!(state.winner(), Some(Outcome::Draw));
}

#[test]
fn test_owned_and_drawn_sub_boards_end_in_draw() {
    use Position::*;

    let mut state = initial_state();
    for (sub_board, player) in [
        (TopLeft, Player::Green),
        (TopCenter, Player::Purple),
        (TopRight, Player::Green),
        (MiddleLeft, Player::Green),
        (MiddleRight, Player::Purple),
        (BottomLeft, Player::Purple),
        (BottomCenter, Player::Green),
        (BottomRight, Player::Green),
    ] {
        state = capture(&state, sub_board, player);
    }
    assert_eq!(state.winner(), None);

    // Fill the center without a line: G P G / G P P / P G G.
    let fill = [
        (TopLeft, Player::Green),
        (TopCenter, Player::Purple),
        (TopRight, Player::Green),
        (MiddleLeft, Player::Green),
        (Center, Player::Purple),
        (MiddleRight, Player::Purple),
        (BottomLeft, Player::Purple),
        (BottomCenter, Player::Green),
        (BottomRight, Player::Green),
    ];
    for (cell, player) in fill {
        assert_eq!(state.winner(), None);
        state = play(&state, Center, cell, player);
    }

    assert_eq!(state.board_owner(Center), None);
    assert_eq!(state.winner(), Some(Outcome::Draw));
}

#[test]
fn test_winner_is_never_cleared() {
    let mut state = initial_state();
    for sub_board in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
        state = capture(&state, sub_board, Player::Purple);
    }
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::Purple)));

    let after = play(&state, Position::TopLeft, Position::TopLeft, Player::Green);
    assert_eq!(after.winner(), Some(Outcome::Winner(Player::Purple)));
    assert_eq!(after, state);
}
