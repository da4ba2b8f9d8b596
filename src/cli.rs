//! Command-line interface for perfect-play.

use clap::{Parser, ValueEnum};
use perfect_play::Mode;

/// Perfect Play - tic-tac-toe against an optimal opponent
#[derive(Parser, Debug)]
#[command(name = "perfect-play")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode
    #[arg(long, value_enum, default_value_t = ModeArg::Single)]
    pub mode: ModeArg,
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Play against the engine (you are X)
    Single,
    /// Two players sharing the board
    Multi,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => Mode::SinglePlayer,
            ModeArg::Multi => Mode::Multiplayer,
        }
    }
}
