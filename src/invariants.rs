//! First-class invariants for the game model.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are checked via `debug_assert!` at move application
//! and are testable independently.

use crate::game::GameInProgress;
use crate::rules::win::has_line;
use crate::types::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: X count minus O count is 0 or 1.
///
/// Players alternate starting with X, so no reachable board can violate
/// this. [`Board::to_move`] panics on boards that do.
pub struct BoardConsistent;

impl Invariant<Board> for BoardConsistent {
    fn holds(board: &Board) -> bool {
        let (x_count, o_count) = board.mark_counts();
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// Invariant: at most one player holds a completed line.
///
/// Play stops at the first win, so a reachable board can never show
/// three-in-a-row for both players at once.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let valid = !(has_line(board, Player::X) && has_line(board, Player::O));
        if !valid {
            warn!("both players hold a completed line");
        }
        valid
    }

    fn description() -> &'static str {
        "at most one player holds a completed line"
    }
}

/// Invariant: history matches the board and alternates starting with X.
pub struct HistoryConsistent;

impl Invariant<GameInProgress> for HistoryConsistent {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        // First move is X's, players alternate.
        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // History length matches filled squares.
        let (x_count, o_count) = game.board().mark_counts();
        if history.len() != x_count + o_count {
            warn!(
                history_len = history.len(),
                filled = x_count + o_count,
                "history length does not match board"
            );
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "history alternates from X and matches the board"
    }
}
