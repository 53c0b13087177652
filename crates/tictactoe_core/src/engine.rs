//! Minimax move-decision engine for the automated opponent.
//!
//! The state space is small enough (at most 9! continuations) for a full
//! adversarial search, so the engine plays perfectly: best case it wins,
//! worst case it draws, regardless of what the opponent does.

use crate::position::Position;
use crate::types::{GameState, GameStatus, Player};
use tracing::{debug, instrument};

/// Terminal score for a win before depth adjustment.
const WIN: i32 = 10;

/// Selects the best move for the side to move, applied through the same
/// transition rule as move submission, and returns the resulting state.
///
/// Must only be called on an in-progress state; calling it on a decided
/// game is a caller bug, not a recoverable condition.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn decide_move(state: &GameState) -> GameState {
    debug_assert!(
        !state.status().is_terminal(),
        "decide_move called on a decided game"
    );
    let pos = best_move(state).expect("in-progress game has at least one legal move");
    debug!(pos = %pos, "engine chose move");
    state
        .submit(pos)
        .expect("engine-chosen move is legal by construction")
}

/// Evaluates every legal move for the side to move and returns the one
/// with the highest minimax score.
///
/// Candidates are scanned row-major (row 0 to 2, column 0 to 2) and only a
/// strictly better score replaces the current best, so identical inputs
/// always yield the identical move. Returns `None` when the board is full.
pub fn best_move(state: &GameState) -> Option<Position> {
    let engine = state.current_player();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !state.board().is_empty(pos) {
            continue;
        }
        let Ok(next) = state.submit(pos) else {
            continue;
        };
        let score = minimax(&next, engine, 1);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, _)| pos)
}

/// Scores a state from `engine`'s perspective.
///
/// Terminal states score `WIN - depth` for an engine win, `-WIN + depth`
/// for an opponent win, and 0 for a draw; the depth term makes nearer wins
/// outrank distant ones and pushes unavoidable losses as far out as
/// possible. The side to move maximizes when it is the engine and
/// minimizes otherwise.
fn minimax(state: &GameState, engine: Player, depth: i32) -> i32 {
    match state.status() {
        GameStatus::InProgress => {}
        GameStatus::Draw => return 0,
        status => {
            return if status.winner() == Some(engine) {
                WIN - depth
            } else {
                -WIN + depth
            };
        }
    }

    let maximizing = state.current_player() == engine;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !state.board().is_empty(pos) {
            continue;
        }
        let Ok(next) = state.submit(pos) else {
            continue;
        };
        let score = minimax(&next, engine, depth + 1);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
