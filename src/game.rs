//! Phase types for a single round of tic-tac-toe.
//!
//! Each phase is its own distinct type: a finished game ALWAYS has an
//! outcome, not `Option<Outcome>`, and a game in progress has no outcome
//! at all. Transitions consume the previous phase.

use crate::action::{Move, MoveError};
use crate::engine;
use crate::invariants::{BoardConsistent, HistoryConsistent, Invariant};
use crate::position::Position;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

impl GameStatus {
    /// Converts a terminal status into an outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::Won(player) => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::InProgress => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// The player to move is derived from the board, never stored, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
}

impl GameInProgress {
    /// Creates a new game on an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Returns the legal moves, in ascending index order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    /// Returns the valid positions for the player to move.
    pub fn valid_positions(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns the optimal move for the player to move.
    pub fn best_move(&self) -> Move {
        engine::best_move(&self.board)
    }

    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] or [`MoveError::WrongPlayer`]
    /// from move validation; on error the game state is dropped unchanged,
    /// so callers that want to retry should clone first.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameRound, MoveError> {
        let board = self.board.apply(action)?;

        let mut game = self;
        game.board = board;
        game.history.push(action);

        debug_assert!(BoardConsistent::holds(&game.board));
        debug_assert!(HistoryConsistent::holds(&game));

        match board.status().outcome() {
            Some(outcome) => Ok(GameRound::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome,
            })),
            None => Ok(GameRound::InProgress(game)),
        }
    }

    /// Replays moves from the empty board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameRound, MoveError> {
        let mut game = GameInProgress::new();

        for action in moves {
            match game.make_move(*action)? {
                GameRound::InProgress(g) => game = g,
                GameRound::Finished(g) => return Ok(GameRound::Finished(g)),
            }
        }

        Ok(GameRound::InProgress(game))
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The terminal phase is absorbing: no move can be applied to it, and the
/// only way out is [`GameFinished::restart`], which begins a fresh round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts with a fresh empty board.
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Result
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameRound {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameRound {
    /// Returns the board for either phase.
    pub fn board(&self) -> &Board {
        match self {
            GameRound::InProgress(game) => game.board(),
            GameRound::Finished(game) => game.board(),
        }
    }

    /// Returns true if the round is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameRound::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_to_move() {
        let game = GameInProgress::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_history_tracks_moves() {
        let game = GameInProgress::new();
        let action = Move::new(Player::X, Position::Center);

        match game.make_move(action).expect("legal move") {
            GameRound::InProgress(game) => {
                assert_eq!(game.history(), &[action]);
                assert_eq!(game.to_move(), Player::O);
            }
            GameRound::Finished(_) => panic!("game shouldn't finish after one move"),
        }
    }

    #[test]
    fn test_replay_to_win() {
        let moves = vec![
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight), // X wins top row
        ];

        match GameInProgress::replay(&moves).expect("valid replay") {
            GameRound::Finished(game) => {
                assert_eq!(game.outcome(), &Outcome::Winner(Player::X));
                assert_eq!(game.history().len(), 5);
            }
            GameRound::InProgress(_) => panic!("game should be finished"),
        }
    }

    #[test]
    fn test_restart_clears_state() {
        let moves = vec![
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight),
        ];

        if let GameRound::Finished(game) = GameInProgress::replay(&moves).expect("valid replay")
        {
            let fresh = game.restart();
            assert_eq!(fresh.board(), &Board::new());
            assert!(fresh.history().is_empty());
            assert_eq!(fresh.to_move(), Player::X);
        } else {
            panic!("game should be finished");
        }
    }
}
