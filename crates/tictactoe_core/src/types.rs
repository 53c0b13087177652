//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second; the automated side in [`GameMode::VsAI`]).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        match player {
            None => Square::Empty,
            Some(player) => Square::Occupied(player),
        }
    }
}

/// Wire representation of the board: 3x3 grid of `null`/`"X"`/`"O"`.
type Cells = [[Option<Player>; 3]; 3];

/// 3x3 tic-tac-toe board.
///
/// Stored as nine squares in row-major order; serializes as a 3x3 grid
/// of optional player marks so the internal layout never crosses the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Cells", into = "Cells")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Cells {
    fn from(board: Board) -> Self {
        let mut cells = [[None; 3]; 3];
        for pos in Position::ALL {
            cells[pos.row()][pos.col()] = board.get(pos).player();
        }
        cells
    }
}

impl From<Cells> for Board {
    fn from(cells: Cells) -> Self {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, cells[pos.row()][pos.col()].into());
        }
        board
    }
}

/// How the second player's turns are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two local human players share the board.
    PlayerVsPlayer,
    /// Player O is the automated opponent.
    VsAI,
}

/// Current status of the game.
///
/// `InProgress` is the sole initial status; the other three are terminal
/// and no move is legal once one of them is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Player X completed a line.
    XWins,
    /// Player O completed a line.
    OWins,
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns the winning player, if this status names one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the winning status for the given player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Complete game state.
///
/// The single unit of truth passed across the boundary. Transitions never
/// mutate in place: [`GameState::submit`](crate::GameState::submit) and the
/// decision engine derive a new value from the old one, so the collaborator
/// can keep showing the previous state while a call is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// How player O's turns are resolved.
    mode: GameMode,
}

impl GameState {
    /// Creates a new game in the given mode. X always moves first.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns true if the automated opponent should move next.
    pub fn is_automated_turn(&self) -> bool {
        self.mode == GameMode::VsAI
            && self.status == GameStatus::InProgress
            && self.current_player == Player::O
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}
