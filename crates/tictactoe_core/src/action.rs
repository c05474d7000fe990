//! Move records and move rejection reasons.

use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// An accepted move: a mark placed at a position.
///
/// The game keeps these in order, so a state can be checked or rebuilt
/// from its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already reached a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The index does not name a cell.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already marked.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
