//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating game state according to tic-tac-toe
//! rules. Rules are separated from board storage so the search engine
//! and the session layer can share one terminal-detection path.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::{Board, GameStatus};

/// Derives the game status from board contents.
///
/// Checks all 8 lines for a winner first; a full board with no winner is
/// a draw; anything else is still in progress.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

impl Board {
    /// Returns the game status for this board.
    pub fn status(&self) -> GameStatus {
        status(self)
    }
}
