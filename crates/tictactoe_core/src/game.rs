//! The game state machine: pure move transitions.

use crate::error::InvalidMove;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus, Square};
use tracing::instrument;

impl GameState {
    /// Applies the current player's mark at `pos`, returning the resulting
    /// state as a new value. `self` is never modified, so a rejected move
    /// leaves the caller's state exactly as it was.
    ///
    /// On success the status is recomputed; the turn passes to the other
    /// player only while the game is still in progress, so a terminal state
    /// names the mover as its `current_player`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is already over or the target
    /// cell is occupied.
    #[instrument(skip(self), fields(pos = %pos, player = %self.current_player()))]
    pub fn submit(&self, pos: Position) -> Result<GameState, InvalidMove> {
        if self.status().is_terminal() {
            return Err(InvalidMove::GameOver(self.status()));
        }
        if !self.board().is_empty(pos) {
            return Err(InvalidMove::Occupied(pos));
        }

        let player = self.current_player();
        let mut next = *self;
        next.board_mut().set(pos, Square::Occupied(player));
        next.set_status(rules::status_of(next.board()));
        if next.status() == GameStatus::InProgress {
            next.set_current_player(player.opponent());
        }
        Ok(next)
    }
}
