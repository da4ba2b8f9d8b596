//! Running score tally across rounds.

use crate::game::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Win and draw counters for a sequence of rounds.
///
/// An explicit context object with a plain lifecycle: zeroed at
/// construction, incremented exactly once per completed game by
/// [`ScoreBoard::record`], read by the display layer. Nothing is
/// persisted across process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a completed game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total completed games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}   O: {}   Ties: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let scores = ScoreBoard::new();
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.to_string(), "X: 0   O: 0   Ties: 0");
    }

    #[test]
    fn test_record_each_outcome_once() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::Winner(Player::X));
        scores.record(Outcome::Winner(Player::O));
        scores.record(Outcome::Winner(Player::O));
        scores.record(Outcome::Draw);

        assert_eq!(scores.x_wins(), 1);
        assert_eq!(scores.o_wins(), 2);
        assert_eq!(scores.draws(), 1);
        assert_eq!(scores.total(), 4);
        assert_eq!(scores.to_string(), "X: 1   O: 2   Ties: 1");
    }
}
