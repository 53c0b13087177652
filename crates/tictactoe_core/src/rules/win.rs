//! Win detection.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Expressed over the row-major [`Position::ALL`] table.
const LINES: [[Position; 3]; 8] = {
    const P: [Position; 9] = Position::ALL;
    [
        // Rows
        [P[0], P[1], P[2]],
        [P[3], P[4], P[5]],
        [P[6], P[7], P[8]],
        // Columns
        [P[0], P[3], P[6]],
        [P[1], P[4], P[7]],
        [P[2], P[5], P[8]],
        // Diagonals
        [P[0], P[4], P[8]],
        [P[2], P[4], P[6]],
    ]
};

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds all three cells of any
/// line, `None` otherwise. Well-formed play cannot produce a board where
/// both players have completed a line, so the first match wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}
