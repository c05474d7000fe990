//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal or evaluate games headlessly", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Play a sequence of moves from a fresh game and print the result
    Play {
        /// Moves as board indices (0-8) or labels such as top-left
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a board given as text, e.g. XOX/OXO/OXO
    Evaluate {
        /// Nine cells of X, O or '.', separators '/', '|', '-', '+' allowed
        board: String,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
