//! Terminal front end for perfect-play.
//!
//! A thin line-oriented presentation layer over [`perfect_play::Session`]:
//! it renders the grid, forwards chosen squares into the core, and prints
//! the announcements and the running score the core hands back.

mod cli;

use anyhow::Result;
use clap::Parser;
use perfect_play::{Mode, Position, Session};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Cli::parse();
    let mode = Mode::from(args.mode);
    let mut session = Session::new(mode);

    info!(?mode, "starting session");
    match mode {
        Mode::SinglePlayer => println!("You are X. The engine is O."),
        Mode::Multiplayer => println!("Two players. X moves first."),
    }
    println!("Enter a square (0-8 or a label like 'center'), or 'quit' to stop.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}\n", session.board().display());
        prompt(&session)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "quit" | "q" | "exit") {
            break;
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unrecognized square '{input}'. Use 0-8 or a label like 'top-left'.\n");
            continue;
        };

        match session.play(pos) {
            Err(err) => {
                println!("{err}.\n");
            }
            Ok(turn) => {
                if let Some(reply) = turn.reply {
                    println!("Engine plays {}.", reply.position);
                }
                if let Some(outcome) = turn.outcome {
                    println!("{}\n", session.board().display());
                    println!("{}", session.announcement(outcome));
                    println!("{}\n", session.score_line());
                    session.next_round();
                }
            }
        }
    }

    println!("\nFinal score - {}", session.score_line());
    Ok(())
}

fn prompt(session: &Session) -> Result<()> {
    match (session.mode(), session.to_move()) {
        (Mode::Multiplayer, Some(player)) => print!("Player {player}, choose a square: "),
        _ => print!("Choose a square: "),
    }
    io::stdout().flush()?;
    Ok(())
}
