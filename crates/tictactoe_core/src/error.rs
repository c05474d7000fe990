//! Shape errors for malformed boards and winning lines.

use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with the input shape.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ShapeErrorKind {
    /// A board was built from a sequence that is not exactly 9 cells long.
    #[display("board must have exactly 9 cells, got {}", _0)]
    BoardLength(usize),

    /// A winning line was built from a sequence that is not exactly 3 long.
    #[display("winning line must have exactly 3 positions, got {}", _0)]
    LineLength(usize),

    /// A winning line repeats a position.
    #[display("winning line repeats position {}", _0)]
    DuplicateIndex(usize),

    /// An index does not name a board position.
    #[display("index {} is outside the board (0-8)", _0)]
    IndexOutOfRange(usize),

    /// A board string contained a character that is not a cell symbol.
    #[display("unrecognized cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

/// Input shape error with location tracking.
///
/// Raised when a caller hands the core a board or winning line of the wrong
/// shape. This indicates a programming defect and is never recovered from.
#[derive(Debug, Clone, Display, Error)]
#[display("Shape error: {} at {}:{}", kind, file, line)]
pub struct ShapeError {
    /// What was malformed.
    pub kind: ShapeErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ShapeError {
    /// Creates a new shape error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ShapeErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of shape violation.
    pub fn kind(&self) -> &ShapeErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_location() {
        let err = ShapeError::new(ShapeErrorKind::BoardLength(8));
        let text = err.to_string();
        assert!(text.contains("exactly 9 cells, got 8"));
        assert!(text.contains("error.rs"));
    }

    #[test]
    fn test_kind_accessor() {
        let err = ShapeError::new(ShapeErrorKind::UnknownSymbol('z'));
        assert_eq!(err.kind(), &ShapeErrorKind::UnknownSymbol('z'));
    }
}
