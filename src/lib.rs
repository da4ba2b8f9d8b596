//! Perfect Play - tic-tac-toe with an exhaustive minimax opponent
//!
//! The board is a small immutable value type; turn order, legal moves,
//! and terminal outcomes are all derived from its contents. On top of it
//! sit a full-depth minimax engine that always forces at least a draw,
//! and a session layer that drives rounds, applies the engine's replies,
//! and keeps the running score.
//!
//! # Example
//!
//! ```
//! use perfect_play::{Mode, Position, Session};
//!
//! let mut session = Session::new(Mode::SinglePlayer);
//! let turn = session.play(Position::Center)?;
//! assert!(turn.reply.is_some()); // the engine answered
//! # Ok::<(), perfect_play::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod game;
mod invariants;
mod position;
mod score;
mod session;
mod types;

// Rules are public: win/draw detection is useful to presentation layers.
pub mod rules;

// Crate-level exports - Board model
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Positions and moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Search engine
pub use engine::{best_move, evaluate, Evaluation};

// Crate-level exports - Round state machine
pub use game::{GameFinished, GameInProgress, GameRound, Outcome};

// Crate-level exports - Invariants
pub use invariants::{BoardConsistent, HistoryConsistent, Invariant, SingleWinner};

// Crate-level exports - Session and scoring
pub use score::ScoreBoard;
pub use session::{Mode, Session, Turn};
