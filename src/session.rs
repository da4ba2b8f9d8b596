//! Session layer: the core-to-presentation contract.
//!
//! A [`Session`] owns the current round, the mode, and the running score,
//! and exposes the single entry point a presentation layer needs: hand in
//! a chosen position, get back everything there is to render. In
//! single-player mode the engine's reply is computed and applied in the
//! same call, synchronously.

use crate::action::{Move, MoveError};
use crate::game::{GameInProgress, GameRound, Outcome};
use crate::position::Position;
use crate::score::ScoreBoard;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Human (X) against the engine (O).
    #[default]
    SinglePlayer,
    /// Two humans sharing the board.
    Multiplayer,
}

/// Everything the presentation layer needs to render after one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The move that was played.
    pub played: Move,
    /// The engine's reply, if the mode is single-player and the game
    /// continued past the played move.
    pub reply: Option<Move>,
    /// The terminal outcome, if this turn ended the game.
    pub outcome: Option<Outcome>,
}

/// A sequence of rounds with a running score.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    round: GameRound,
    scores: ScoreBoard,
}

impl Session {
    /// Creates a session in the given mode with a fresh board and a
    /// zeroed scoreboard.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            round: GameRound::InProgress(GameInProgress::new()),
            scores: ScoreBoard::new(),
        }
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the running score.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns true if the current round has ended and is waiting for
    /// [`Session::next_round`].
    pub fn round_over(&self) -> bool {
        self.round.is_finished()
    }

    /// Returns the player to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match &self.round {
            GameRound::InProgress(game) => Some(game.to_move()),
            GameRound::Finished(_) => None,
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// If the move finishes the game the outcome is recorded in the
    /// scoreboard exactly once and reported in the returned [`Turn`];
    /// otherwise, in single-player mode, the engine's reply is computed
    /// and applied before returning (which may itself finish the game).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the round has already ended, or
    /// the underlying validation error for an occupied square. Rejected
    /// input leaves the session untouched: board, score, and turn order
    /// are exactly as before the call.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, MoveError> {
        let game = match &self.round {
            GameRound::InProgress(game) => game.clone(),
            GameRound::Finished(_) => return Err(MoveError::GameOver),
        };

        let played = Move::new(game.to_move(), pos);
        let round = game.make_move(played)?;

        let mut reply = None;
        let round = match round {
            GameRound::InProgress(game) if self.mode == Mode::SinglePlayer => {
                let engine_move = game.best_move();
                debug!(%engine_move, "engine reply");
                reply = Some(engine_move);
                game.make_move(engine_move).expect("engine reply is legal")
            }
            other => other,
        };

        let outcome = match &round {
            GameRound::Finished(game) => {
                let outcome = *game.outcome();
                self.scores.record(outcome);
                Some(outcome)
            }
            GameRound::InProgress(_) => None,
        };

        self.round = round;
        Ok(Turn {
            played,
            reply,
            outcome,
        })
    }

    /// Starts a fresh round on an empty board.
    ///
    /// The scoreboard carries over; any unfinished round is discarded.
    pub fn next_round(&mut self) {
        self.round = GameRound::InProgress(GameInProgress::new());
    }

    /// Phrases an outcome announcement for this session's mode.
    ///
    /// Single-player addresses the human (always X); multiplayer names
    /// the winning player.
    pub fn announcement(&self, outcome: Outcome) -> String {
        match (self.mode, outcome) {
            (Mode::SinglePlayer, Outcome::Winner(Player::X)) => "You have won!".to_string(),
            (Mode::SinglePlayer, Outcome::Winner(Player::O)) => "You have lost!".to_string(),
            (Mode::Multiplayer, Outcome::Winner(player)) => {
                format!("Player {player} has won!")
            }
            (_, Outcome::Draw) => "It's a tie!".to_string(),
        }
    }

    /// Formats the running score line.
    pub fn score_line(&self) -> String {
        self.scores.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_gets_engine_reply() {
        let mut session = Session::new(Mode::SinglePlayer);
        let turn = session.play(Position::Center).expect("legal move");

        assert_eq!(turn.played, Move::new(Player::X, Position::Center));
        let reply = turn.reply.expect("engine must reply");
        assert_eq!(reply.player, Player::O);
        assert!(turn.outcome.is_none());
        // Both marks are on the board; it is X's turn again.
        assert_eq!(session.to_move(), Some(Player::X));
        assert_eq!(session.board().mark_counts(), (1, 1));
    }

    #[test]
    fn test_multiplayer_alternates_without_reply() {
        let mut session = Session::new(Mode::Multiplayer);

        let first = session.play(Position::Center).expect("legal move");
        assert_eq!(first.played.player, Player::X);
        assert!(first.reply.is_none());
        assert_eq!(session.to_move(), Some(Player::O));

        let second = session.play(Position::TopLeft).expect("legal move");
        assert_eq!(second.played.player, Player::O);
        assert_eq!(session.to_move(), Some(Player::X));
    }

    #[test]
    fn test_rejected_move_leaves_session_untouched() {
        let mut session = Session::new(Mode::Multiplayer);
        session.play(Position::Center).expect("legal move");
        let board_before = *session.board();
        let scores_before = *session.scores();

        let result = session.play(Position::Center);
        assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.scores(), &scores_before);
        assert_eq!(session.to_move(), Some(Player::O));
    }

    #[test]
    fn test_multiplayer_win_recorded_once_and_round_closes() {
        let mut session = Session::new(Mode::Multiplayer);
        // X plays the top row; O plays 3 and 4.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            session.play(pos).expect("legal move");
        }

        let turn = session.play(Position::TopRight).expect("legal move");
        assert_eq!(turn.outcome, Some(Outcome::Winner(Player::X)));
        assert_eq!(session.scores().x_wins(), 1);
        assert_eq!(session.scores().total(), 1);
        assert!(session.round_over());

        // Terminal phase is absorbing until next_round.
        assert!(matches!(
            session.play(Position::BottomLeft),
            Err(MoveError::GameOver)
        ));
        assert_eq!(session.scores().total(), 1);

        session.next_round();
        assert!(!session.round_over());
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.scores().x_wins(), 1);
    }

    #[test]
    fn test_announcements_per_mode() {
        let single = Session::new(Mode::SinglePlayer);
        assert_eq!(
            single.announcement(Outcome::Winner(Player::X)),
            "You have won!"
        );
        assert_eq!(
            single.announcement(Outcome::Winner(Player::O)),
            "You have lost!"
        );
        assert_eq!(single.announcement(Outcome::Draw), "It's a tie!");

        let multi = Session::new(Mode::Multiplayer);
        assert_eq!(
            multi.announcement(Outcome::Winner(Player::O)),
            "Player O has won!"
        );
        assert_eq!(multi.announcement(Outcome::Draw), "It's a tie!");
    }
}
