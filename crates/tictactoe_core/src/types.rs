//! Core domain types for tic-tac-toe.

use super::error::{ShapeError, ShapeErrorKind};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's marker. Cross always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross (X), moves first.
    Cross,
    /// Circle (O), moves second.
    Circle,
}

/// Whose turn it is; the mark that will be placed next.
pub type Turn = Mark;

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }

    /// Conventional single-letter symbol.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Circle => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value held by one cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by Cross.
    Cross,
    /// Marked by Circle.
    Circle,
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Mark::Cross),
            Cell::Circle => Some(Mark::Circle),
        }
    }

    /// True when nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Cross),
            'O' | 'o' => Some(Cell::Circle),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Cross => Cell::Cross,
            Mark::Circle => Cell::Circle,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always exactly 9 cells. Sequences of any other length are rejected by
/// [`Board::from_cells`] rather than truncated or padded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from a sequence of exactly 9 cells.
    #[track_caller]
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(cells: &[Cell]) -> Result<Self, ShapeError> {
        match <[Cell; 9]>::try_from(cells) {
            Ok(cells) => Ok(Self { cells }),
            Err(_) => Err(ShapeError::new(ShapeErrorKind::BoardLength(cells.len()))),
        }
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the cell at `index`, or `None` past the last cell.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes `cell` at `pos`.
    ///
    /// This is raw storage access; move legality lives in the state machine.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = ShapeError;

    #[track_caller]
    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Board::from_cells(&cells)
    }
}

/// Renders as three rows, `X|O|.` with `-+-+-` separators.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let start = row * 3;
            write!(
                f,
                "{}|{}|{}",
                self.cells[start].symbol(),
                self.cells[start + 1].symbol(),
                self.cells[start + 2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Parses `X`/`x`, `O`/`o` and `.` as cells.
///
/// Whitespace and the separators `|`, `/`, `-` and `+` are ignored, so both
/// `"XO./.X./..O"` and the [`Display`](std::fmt::Display) form parse.
impl FromStr for Board {
    type Err = ShapeError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            if c.is_whitespace() || matches!(c, '|' | '/' | '-' | '+') {
                continue;
            }
            let Some(cell) = Cell::from_symbol(c) else {
                return Err(ShapeError::new(ShapeErrorKind::UnknownSymbol(c)));
            };
            cells.push(cell);
        }
        Board::from_cells(&cells)
    }
}
