//! Exhaustive minimax search for tic-tac-toe.
//!
//! The search visits every reachable terminal position, so the returned
//! move is provably optimal: it always forces at least a draw, and wins
//! whenever a forced win exists. No pruning or caching is used; the full
//! game tree from any position fits comfortably within interactive
//! latency.

use crate::action::Move;
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Evaluation of a position: a terminal score paired with the search
/// depth of the leaf that produced it.
///
/// Scores are +1 for an X win, -1 for an O win, 0 for a draw. The depth
/// is carried unchanged from the terminal leaf through the recursion and
/// participates only in root move selection, where the derived ordering
/// (score first, depth second) breaks ties between equally scored moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Evaluation {
    /// Terminal score from X's point of view.
    pub score: i32,
    /// Ply distance from the root to the terminal leaf.
    pub depth: u32,
}

fn terminal_score(status: GameStatus) -> Option<i32> {
    match status {
        GameStatus::Won(Player::X) => Some(1),
        GameStatus::Won(Player::O) => Some(-1),
        GameStatus::Draw => Some(0),
        GameStatus::InProgress => None,
    }
}

/// Evaluates a position by full-depth minimax.
///
/// Terminal positions score +1/-1/0 at the depth they were reached.
/// Interior positions take the child evaluation with the best score for
/// the player to move: maximum for X, minimum for O. Ties between child
/// scores resolve to the first child in ascending-index move order, and
/// the winning child's `(score, depth)` pair propagates as-is; depth is
/// never compared below the root.
pub fn evaluate(board: &Board, depth: u32) -> Evaluation {
    if let Some(score) = terminal_score(board.status()) {
        return Evaluation { score, depth };
    }

    let to_move = board.to_move();
    let mut best: Option<Evaluation> = None;
    for action in board.legal_moves() {
        let child = board.apply(action).expect("legal move applies cleanly");
        let eval = evaluate(&child, depth + 1);
        let replace = match best {
            None => true,
            // Strict comparison keeps the first child on score ties.
            Some(held) => match to_move {
                Player::X => eval.score > held.score,
                Player::O => eval.score < held.score,
            },
        };
        if replace {
            best = Some(eval);
        }
    }

    best.expect("non-terminal board has at least one legal move")
}

/// Returns the optimal move for the player to move.
///
/// Every legal move is evaluated by [`evaluate`] and the winner is chosen
/// under the full lexicographic `(score, depth)` ordering: maximal for X,
/// minimal for O, first occurrence on exact ties.
///
/// # Panics
///
/// Panics if the board is terminal. Callers must check
/// [`Board::status`](crate::Board::status) first; asking the engine for a
/// move when none exists is a contract violation, not a recoverable
/// condition.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Move {
    assert_eq!(
        board.status(),
        GameStatus::InProgress,
        "best_move requires a board with at least one legal move"
    );

    let to_move = board.to_move();
    let mut best: Option<(Move, Evaluation)> = None;
    for action in board.legal_moves() {
        let child = board.apply(action).expect("legal move applies cleanly");
        let eval = evaluate(&child, 1);
        let replace = match best {
            None => true,
            Some((_, held)) => match to_move {
                Player::X => eval > held,
                Player::O => eval < held,
            },
        };
        if replace {
            best = Some((action, eval));
        }
    }

    let (action, eval) = best.expect("in-progress board has at least one legal move");
    debug!(?action, ?eval, "selected optimal move");
    action
}
