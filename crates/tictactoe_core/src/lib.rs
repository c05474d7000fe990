//! Pure tic-tac-toe game logic.
//!
//! The crate holds the authoritative model of one play session and the pure
//! functions that advance it:
//!
//! - [`evaluate`] maps a [`Board`] to an [`Outcome`]
//! - [`apply_move`] places the current turn's mark and re-evaluates
//! - [`reset`] returns to the initial state
//!
//! Front ends render a [`GameView`] derived from the state and never store
//! occupancy themselves.
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, apply_move};
//!
//! let state = [0, 1, 3, 4, 6]
//!     .into_iter()
//!     .fold(GameState::new(), |state, index| apply_move(&state, index));
//!
//! match state.outcome() {
//!     Outcome::CrossWins(line) => assert_eq!(line.indices(), [0, 3, 6]),
//!     other => panic!("unexpected outcome: {other}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, IndexInRange, MoveContract};
pub use error::{ShapeError, ShapeErrorKind};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use outcome::{Outcome, WinningLine};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, evaluate, evaluate_cells, is_full};
pub use state::{GameState, InvalidState, apply_move, reset};
pub use types::{Board, Cell, Mark, Turn};
pub use view::GameView;
