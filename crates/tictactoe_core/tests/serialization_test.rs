//! The serialized boundary shape and its round-trip guarantees.

use serde_json::json;
use tictactoe_core::{start_game, submit_move, GameMode, GameState};

#[test]
fn test_wire_shape() {
    let state = start_game(GameMode::VsAI, true);
    let state = submit_move(&state, 0, 0).unwrap();
    let state = submit_move(&state, 1, 1).unwrap();

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value,
        json!({
            "board": [
                ["X", null, null],
                [null, "O", null],
                [null, null, null],
            ],
            "current_player": "X",
            "status": "InProgress",
            "mode": "VsAI",
        })
    );
}

#[test]
fn test_round_trip_is_lossless() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    let state = submit_move(&state, 2, 0).unwrap();
    let state = submit_move(&state, 0, 2).unwrap();

    let text = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, state);

    // The restored value must keep working as an input to the next call.
    let next = submit_move(&restored, 1, 1).unwrap();
    assert!(!next.board().is_empty(tictactoe_core::Position::new(1, 1).unwrap()));
}

#[test]
fn test_rejected_move_leaves_serialized_form_unchanged() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    let state = submit_move(&state, 0, 0).unwrap();

    let before = serde_json::to_string(&state).unwrap();
    assert!(submit_move(&state, 0, 0).is_err());
    assert!(submit_move(&state, 9, 9).is_err());
    let after = serde_json::to_string(&state).unwrap();
    assert_eq!(before, after);
}
