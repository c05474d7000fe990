//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. They never mutate state, so the
//! state machine and any front end can call them freely.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use super::error::ShapeError;
use super::outcome::Outcome;
use super::types::{Board, Cell};
use tracing::{instrument, trace};

/// Evaluates the status of a board.
///
/// The first winning line in [`WINNING_LINES`] order wins; otherwise a full
/// board is a draw and anything else is still being played.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::win(mark, line);
    }
    if is_full(board) {
        trace!("board full without a winning line");
        return Outcome::Draw;
    }
    Outcome::Playing
}

/// Evaluates a raw cell sequence, failing fast unless it has exactly 9 cells.
#[track_caller]
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn evaluate_cells(cells: &[Cell]) -> Result<Outcome, ShapeError> {
    let board = Board::from_cells(cells)?;
    Ok(evaluate(&board))
}
