//! Tests for the legality-checking referee.

use ultimate_tictactoe::{
    GameState, Move, MoveError, Outcome, Player, Position, Referee, RulesConfig, forced_target,
    initial_state, invariants,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_replay_opening_sequence() {
    init_tracing();
    use Player::{Green, Purple};
    use Position::*;

    let moves = [
        Move::new(Green, TopLeft, TopLeft),
        Move::new(Purple, TopLeft, Center),
        Move::new(Green, Center, TopCenter),
        Move::new(Purple, TopCenter, TopLeft),
        Move::new(Green, TopLeft, TopCenter),
        Move::new(Purple, TopCenter, TopRight),
        Move::new(Green, TopRight, MiddleRight),
        Move::new(Purple, MiddleRight, TopLeft),
        Move::new(Green, TopLeft, TopRight),
    ];

    let referee = Referee::default();
    let state = referee.replay(&moves).expect("legal sequence");

    assert_eq!(state.board_owner(TopLeft), Some(Green));
    assert_eq!(forced_target(&state), Some(TopRight));
    assert_eq!(referee.next_player(&state), Purple);
    assert!(invariants::check_state(&state).is_ok());

    let err = referee
        .play(&state, Move::new(Purple, TopLeft, BottomLeft))
        .unwrap_err();
    assert_eq!(err, MoveError::BoardNotPlayable(TopLeft));
}

#[test]
fn test_legal_moves_match_forced_target() {
    let referee = Referee::default();
    let state = referee
        .play(
            &initial_state(),
            Move::new(Player::Green, Position::BottomLeft, Position::MiddleRight),
        )
        .unwrap();

    let moves = referee.legal_moves(&state);
    assert_eq!(moves.len(), 9);
    assert!(moves.iter().all(|m| m.player == Player::Purple));
    assert!(moves.iter().all(|m| m.sub_board == Position::MiddleRight));
}

#[test]
fn test_first_available_move_game_terminates() {
    init_tracing();
    let referee = Referee::default();
    let mut state = initial_state();

    for _ in 0..81 {
        let Some(mv) = referee.legal_moves(&state).first().copied() else {
            break;
        };
        state = referee.play(&state, mv).expect("listed move is legal");
    }

    assert!(state.is_over());
    assert!(referee.legal_moves(&state).is_empty());
    assert_eq!(
        referee.play(&state, Move::new(Player::Green, Position::Center, Position::Center)),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_purple_can_open() {
    let referee = Referee::new(RulesConfig::new(Player::Purple));
    let green_first = Move::new(Player::Green, Position::Center, Position::Center);
    assert_eq!(
        referee.play(&initial_state(), green_first),
        Err(MoveError::WrongPlayer(Player::Green))
    );

    let state = referee
        .play(
            &initial_state(),
            Move::new(Player::Purple, Position::Center, Position::Center),
        )
        .unwrap();
    assert_eq!(referee.next_player(&state), Player::Green);
}

#[test]
fn test_state_snapshot_round_trips_through_json() {
    let referee = Referee::default();
    let state = referee
        .replay(&[
            Move::new(Player::Green, Position::Center, Position::BottomRight),
            Move::new(Player::Purple, Position::BottomRight, Position::Center),
        ])
        .unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(referee.next_player(&restored), Player::Green);
}

#[test]
fn test_snapshot_rejects_multi_bit_last_move() {
    let json = r#"{"boards":[0,0,0,0,0,0,0,0,0],"meta_board":0,"last_move":3,"winner":null}"#;
    assert!(serde_json::from_str::<GameState>(json).is_err());
}

#[test]
fn test_outcome_serializes_lowercase() {
    let json = serde_json::to_string(&Outcome::Winner(Player::Purple)).unwrap();
    assert_eq!(json, r#"{"winner":"purple"}"#);
}
