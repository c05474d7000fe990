//! Evaluated game results.

use super::error::{ShapeError, ShapeErrorKind};
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three distinct positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Builds a line from board indices.
    ///
    /// Fails fast unless given exactly 3 distinct indices in 0-8.
    #[track_caller]
    #[instrument]
    pub fn from_indices(indices: &[usize]) -> Result<Self, ShapeError> {
        let &[a, b, c] = indices else {
            return Err(ShapeError::new(ShapeErrorKind::LineLength(indices.len())));
        };

        let mut positions = [Position::TopLeft; 3];
        for (slot, index) in positions.iter_mut().zip([a, b, c]) {
            let Some(position) = Position::from_index(index) else {
                return Err(ShapeError::new(ShapeErrorKind::IndexOutOfRange(index)));
            };
            *slot = position;
        }

        if a == b || a == c {
            return Err(ShapeError::new(ShapeErrorKind::DuplicateIndex(a)));
        }
        if b == c {
            return Err(ShapeError::new(ShapeErrorKind::DuplicateIndex(b)));
        }

        Ok(Self(positions))
    }

    /// The three positions, in enumeration order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// True if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl TryFrom<&[usize]> for WinningLine {
    type Error = ShapeError;

    #[track_caller]
    fn try_from(indices: &[usize]) -> Result<Self, Self::Error> {
        WinningLine::from_indices(indices)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    Playing,
    /// Board full with no winning line.
    Draw,
    /// Cross completed the line.
    CrossWins(WinningLine),
    /// Circle completed the line.
    CircleWins(WinningLine),
}

impl Outcome {
    /// Builds the win outcome for `mark`.
    pub fn win(mark: Mark, line: WinningLine) -> Self {
        match mark {
            Mark::Cross => Outcome::CrossWins(line),
            Mark::Circle => Outcome::CircleWins(line),
        }
    }

    /// True for the terminal outcomes (a win or a draw).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::CrossWins(_) => Some(Mark::Cross),
            Outcome::CircleWins(_) => Some(Mark::Circle),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::CrossWins(line) | Outcome::CircleWins(line) => Some(*line),
            Outcome::Playing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Playing => write!(f, "Playing"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::CrossWins(_) => write!(f, "X wins"),
            Outcome::CircleWins(_) => write!(f, "O wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_accepts_three_distinct() {
        let line = WinningLine::from_indices(&[0, 3, 6]).unwrap();
        assert_eq!(
            line.positions(),
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );
        assert_eq!(line.indices(), [0, 3, 6]);
        assert!(line.contains(Position::MiddleLeft));
        assert!(!line.contains(Position::Center));
    }

    #[test]
    fn test_from_indices_rejects_bad_shapes() {
        let err = WinningLine::from_indices(&[0, 1]).unwrap_err();
        assert_eq!(err.kind(), &ShapeErrorKind::LineLength(2));

        let err = WinningLine::from_indices(&[0, 1, 2, 3]).unwrap_err();
        assert_eq!(err.kind(), &ShapeErrorKind::LineLength(4));

        let err = WinningLine::from_indices(&[0, 1, 9]).unwrap_err();
        assert_eq!(err.kind(), &ShapeErrorKind::IndexOutOfRange(9));

        let err = WinningLine::try_from(&[4usize, 8, 4][..]).unwrap_err();
        assert_eq!(err.kind(), &ShapeErrorKind::DuplicateIndex(4));
    }

    #[test]
    fn test_outcome_queries() {
        let line = WinningLine::from_indices(&[2, 4, 6]).unwrap();
        let won = Outcome::win(Mark::Circle, line);
        assert_eq!(won, Outcome::CircleWins(line));
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(Mark::Circle));
        assert_eq!(won.winning_line(), Some(line));

        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::Playing.is_terminal());
        assert_eq!(Outcome::Playing.winning_line(), None);
    }
}
