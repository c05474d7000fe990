//! Application state for the terminal front end.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{GameState, GameView, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Terminal application state.
///
/// Owns the single authoritative [`GameState`]; everything drawn comes from
/// [`App::view`].
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
}

impl App {
    /// Creates an app with a fresh game and the cursor in the center.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// View derived from the current state.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => self.replay(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.place(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Requests a move at `position`. Occupied cells and moves after the
    /// game ended are silently ignored.
    fn place(&mut self, position: Position) {
        let next = self.state.apply_move(position.index());
        if next == self.state {
            debug!(%position, "Move ignored");
        }
        self.state = next;
    }

    /// Starts over from the initial state.
    fn replay(&mut self) {
        self.state = self.state.reset();
        self.cursor = Position::Center;
        info!("Game restarted");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
