//! The three boundary operations used by the presentation collaborator.
//!
//! Each call takes a state value and returns a new one; nothing is shared
//! or retained between calls. The collaborator owns the returned state and
//! passes it back verbatim on the next call.

use crate::engine;
use crate::error::InvalidMove;
use crate::position::Position;
use crate::types::{GameMode, GameState};
use tracing::{debug, instrument, warn};

/// Starts a new game.
///
/// X always moves first regardless of `first_player_is_human`; the flag
/// only tells the collaborator which side to treat as the human when the
/// mode is [`GameMode::VsAI`], so it is logged here but not stored.
#[instrument]
pub fn start_game(mode: GameMode, first_player_is_human: bool) -> GameState {
    debug!(?mode, first_player_is_human, "starting new game");
    GameState::new(mode)
}

/// Submits a move at `(row, col)` for the current player.
///
/// # Errors
///
/// Returns [`InvalidMove`] when either coordinate is outside `[0, 2]`, the
/// cell is occupied, or the game is already decided. The input state is
/// unchanged in every failure case.
#[instrument(skip(state))]
pub fn submit_move(state: &GameState, row: usize, col: usize) -> Result<GameState, InvalidMove> {
    let Some(pos) = Position::new(row, col) else {
        warn!(row, col, "move rejected: coordinate out of range");
        return Err(InvalidMove::OutOfRange { row, col });
    };
    state.submit(pos).inspect_err(|err| {
        warn!(%err, "move rejected");
    })
}

/// Computes and applies the automated opponent's move.
///
/// Only callable while the game is in progress and it is the automated
/// side's turn; violating that is a collaborator bug (checked by a debug
/// assertion), not a recoverable error.
#[instrument(skip(state))]
pub fn decide_move(state: &GameState) -> GameState {
    engine::decide_move(state)
}
