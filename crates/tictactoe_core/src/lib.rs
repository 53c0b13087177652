//! Tic-tac-toe game-state engine and move-decision subsystem.
//!
//! The authoritative core behind a tic-tac-toe front end: it owns the
//! board representation, accepts or rejects moves, detects terminal
//! outcomes, and picks optimal moves for the automated opponent via full
//! minimax search.
//!
//! The entire boundary is three pure request/response operations. Every
//! operation takes a [`GameState`] value and returns a new one; no call
//! mutates its input, so a front end can keep rendering the previous
//! state while a call is pending.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{decide_move, start_game, submit_move, GameMode, GameStatus};
//!
//! let state = start_game(GameMode::VsAI, true);
//! let state = submit_move(&state, 1, 1)?;
//! assert!(state.is_automated_turn());
//! let state = decide_move(&state);
//! assert_eq!(state.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod engine;
mod error;
mod game;
mod position;
mod rules;
mod types;

// Crate-level exports - boundary operations
pub use api::{decide_move, start_game, submit_move};

// Crate-level exports - decision engine internals
pub use engine::best_move;

// Crate-level exports - errors
pub use error::InvalidMove;

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameMode, GameState, GameStatus, Player, Square};

// Crate-level exports - terminal detection
pub use rules::{check_winner, status_of};
