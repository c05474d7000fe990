//! Presentation view derived from a game state.
//!
//! Front ends render a [`GameView`] and keep no game state of their own:
//! occupancy, highlighting, the status text and the replay affordance all
//! come from the authoritative [`GameState`].

use super::outcome::{Outcome, WinningLine};
use super::position::Position;
use super::state::GameState;
use super::types::Mark;
use serde::Serialize;
use tracing::instrument;

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    marks: [Option<Mark>; 9],
    highlight: Option<WinningLine>,
    outcome: Outcome,
    turn: Mark,
}

impl GameView {
    /// Derives the view for `state`.
    #[instrument(skip(state))]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            marks: state.board().cells().map(|cell| cell.mark()),
            highlight: state.outcome().winning_line(),
            outcome: state.outcome(),
            turn: state.turn(),
        }
    }

    /// Mark shown at `pos`.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.marks[pos.index()]
    }

    /// True when `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(pos))
    }

    /// Status label: `Playing`, `Draw`, `X wins` or `O wins`.
    pub fn status(&self) -> String {
        self.outcome.to_string()
    }

    /// Mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The replay control is offered once the game is over.
    pub fn replay_visible(&self) -> bool {
        self.outcome.is_terminal()
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        GameView::from_state(state)
    }
}
