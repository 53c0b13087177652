//! Terminal-outcome detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Computes the status of a board: a win for either player, a draw on a
/// full board, or still in progress.
pub fn status_of(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::win_for(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
