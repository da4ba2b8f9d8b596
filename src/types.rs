//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board is an immutable value type: [`Board::apply`] returns a new
/// board and never mutates the receiver. Whose turn it is, which moves are
/// legal, and whether the game is over are all derived from the squares
/// alone, never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Creates a board from raw squares.
    ///
    /// Intended for tests and presentation layers that rebuild a board
    /// from serialized state. The mark-count invariant is not checked
    /// here; [`Board::to_move`] panics on boards unreachable by legal play.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves first and after every full round, so X is to move whenever
    /// the mark counts are equal, and O whenever X leads by exactly one.
    ///
    /// # Panics
    ///
    /// Panics if the mark counts admit no current player (X behind, or X
    /// ahead by two or more). Such a board cannot arise from legal play,
    /// so this is a programming error, not a recoverable condition.
    pub fn to_move(&self) -> Player {
        let (x_count, o_count) = self.mark_counts();
        if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            panic!("malformed board: {x_count} X marks vs {o_count} O marks");
        }
    }

    /// Counts the marks on the board as `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for square in &self.squares {
            match square {
                Square::Occupied(Player::X) => x_count += 1,
                Square::Occupied(Player::O) => o_count += 1,
                Square::Empty => {}
            }
        }
        (x_count, o_count)
    }

    /// Returns the legal moves for the player to move.
    ///
    /// One move per empty square, in ascending index order. The ordering
    /// is part of the contract: the search engine breaks ties by first
    /// occurrence, so a stable enumeration keeps move selection
    /// deterministic.
    pub fn legal_moves(&self) -> Vec<Move> {
        let player = self.to_move();
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .map(|pos| Move::new(player, pos))
            .collect()
    }

    /// Applies a move, returning the resulting board.
    ///
    /// The receiver is left untouched; a rejected move therefore never
    /// corrupts state, partially or otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the target square is taken,
    /// or [`MoveError::WrongPlayer`] if the move's player is not the player
    /// to move.
    #[instrument(skip(self), fields(position = ?action.position, player = ?action.player))]
    pub fn apply(&self, action: Move) -> Result<Board, MoveError> {
        if !self.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != self.to_move() {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let mut squares = self.squares;
        squares[action.position.to_index()] = Square::Occupied(action.player);
        Ok(Board { squares })
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index (0-8) so a player knows what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
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

/// Current status of the game, derived purely from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
