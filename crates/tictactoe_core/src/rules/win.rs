//! Win detection logic for tic-tac-toe.

use super::super::outcome::WinningLine;
use super::super::position::Position;
use super::super::types::{Board, Mark};
use tracing::{debug, instrument};

/// The 8 winning lines in evaluation order: rows, columns, diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first uniformly marked line.
///
/// Returns the owning mark and the line, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if let Some(mark) = cell.mark()
            && cell == board.get(b)
            && cell == board.get(c)
        {
            debug!(%mark, indices = ?line.indices(), "winning line found");
            return Some((mark, line));
        }
    }

    None
}
