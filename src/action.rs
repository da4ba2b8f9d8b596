//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: a rejected move never alters board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
