//! Tic-tac-toe front ends over the pure game core.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_core`): board, status evaluation, turn state machine
//! - **Config**: optional TOML settings for logging and mark symbols
//! - **Report**: headless play and board evaluation
//! - **TUI**: interactive ratatui front end
//!
//! # Example
//!
//! ```
//! use tictactoe::play;
//!
//! let report = play(&["0", "1", "3", "4", "6"]);
//! assert_eq!(report.status, "X wins");
//! assert_eq!(report.winning_line, Some([0, 3, 6]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use report::{RejectedMove, Report, evaluate_board, play};

pub use tictactoe_core::{
    Board, Cell, GameState, GameView, Mark, Move, MoveError, Outcome, Position, ShapeError,
    WinningLine, apply_move, evaluate, reset,
};
