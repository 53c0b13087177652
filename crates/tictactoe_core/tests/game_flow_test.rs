//! End-to-end scenarios for the game state machine.

use tictactoe_core::{
    start_game, submit_move, GameMode, GameState, GameStatus, InvalidMove, Player,
};

/// Replays a sequence of moves, asserting each one is accepted.
fn replay(state: GameState, moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(state, |state, &(row, col)| {
        submit_move(&state, row, col).expect("legal move accepted")
    })
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.board().squares().iter().all(|sq| sq.player().is_none()));
}

#[test]
fn test_diagonal_win() {
    // (0,0)X (0,1)O (1,1)X (1,0)O (2,2)X wins the main diagonal.
    let state = start_game(GameMode::PlayerVsPlayer, true);
    let state = replay(state, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]);
    assert_eq!(state.status(), GameStatus::XWins);
}

#[test]
fn test_full_board_draw() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    // X O X / X O O / O X X - full with no completed line
    let state = replay(
        state,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_cell_rejected() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    let state = submit_move(&state, 0, 0).unwrap();
    let err = submit_move(&state, 0, 0).unwrap_err();
    assert!(matches!(err, InvalidMove::Occupied(_)));
}

#[test]
fn test_out_of_range_rejected() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    assert_eq!(
        submit_move(&state, 3, 0).unwrap_err(),
        InvalidMove::OutOfRange { row: 3, col: 0 }
    );
    assert_eq!(
        submit_move(&state, 0, 7).unwrap_err(),
        InvalidMove::OutOfRange { row: 0, col: 7 }
    );
}

#[test]
fn test_no_moves_after_game_over() {
    let state = start_game(GameMode::PlayerVsPlayer, true);
    let state = replay(state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(state.status(), GameStatus::XWins);
    let err = submit_move(&state, 2, 2).unwrap_err();
    assert_eq!(err, InvalidMove::GameOver(GameStatus::XWins));
}

#[test]
fn test_turn_alternation() {
    let mut state = start_game(GameMode::PlayerVsPlayer, true);
    for &(row, col) in &[(0, 0), (0, 1), (1, 1), (1, 0)] {
        let before = state.current_player();
        state = submit_move(&state, row, col).unwrap();
        assert_eq!(state.current_player(), before.opponent());
    }
}

#[test]
fn test_exactly_one_status_holds() {
    // Walk a game to its end; at every step the status is exactly one of
    // the four values and at most one player has a completed line.
    let mut state = start_game(GameMode::PlayerVsPlayer, true);
    for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        state = submit_move(&state, row, col).unwrap();
        let winner = tictactoe_core::check_winner(state.board());
        match state.status() {
            GameStatus::InProgress | GameStatus::Draw => assert_eq!(winner, None),
            GameStatus::XWins => assert_eq!(winner, Some(Player::X)),
            GameStatus::OWins => assert_eq!(winner, Some(Player::O)),
        }
    }
    assert_eq!(state.status(), GameStatus::XWins);
}
