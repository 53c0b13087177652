//! The single recoverable error surfaced across the boundary.

use crate::position::Position;
use crate::types::GameStatus;

/// A rejected move.
///
/// Raised synchronously by move submission; the input state is left
/// untouched because transitions only produce a new value on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// A coordinate was outside `[0, 2]`.
    #[display("Coordinate ({row}, {col}) is out of range")]
    OutOfRange {
        /// Submitted row.
        row: usize,
        /// Submitted column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Position),

    /// The game has already been decided.
    #[display("Game is already over ({_0})")]
    GameOver(GameStatus),
}

impl std::error::Error for InvalidMove {}
