//! Board addressing by (row, column) coordinates.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A cell address on the board: row and column, each in `[0, 2]`.
///
/// Construction goes through [`Position::new`], so a `Position` value is
/// always in range and indexing with it cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is outside `[0, 2]`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row, in `[0, 2]`.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column, in `[0, 2]`.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// All 9 positions, row-major (row 0 to 2, column 0 to 2).
    ///
    /// This order is the deterministic candidate order used by the decision
    /// engine's tie-break.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Filters positions by board state, keeping only empty squares.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
