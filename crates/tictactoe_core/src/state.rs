//! Turn and game state machine.
//!
//! A [`GameState`] is a plain value. Transitions take a state and return the
//! next one, so a front end owns exactly one authoritative copy and never
//! has to reach into global variables.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::outcome::Outcome;
use super::position::Position;
use super::rules::evaluate;
use super::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one play session.
///
/// Deserializing checks [`TicTacToeInvariants`], so only states reachable by
/// play from [`GameState::new`] are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, Cross to move, playing.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Cross,
            outcome: Outcome::Playing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Positions that would accept a move. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Places the current turn's mark at `index` and returns the next state.
    ///
    /// The turn flips after every accepted move, including the one that ends
    /// the game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the outcome is terminal
    /// - [`MoveError::OutOfRange`] for an index past 8
    /// - [`MoveError::CellOccupied`] when the cell already holds a mark
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&self, index: usize) -> Result<GameState, MoveError> {
        let position = MoveContract::pre(self, &index)?;

        let mut next = self.clone();
        next.board.set(position, Cell::from(self.turn));
        next.history.push(Move::new(self.turn, position));
        next.turn = self.turn.opponent();
        next.outcome = evaluate(&next.board);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%position, outcome = %next.outcome, "move accepted");
        Ok(next)
    }

    /// Applies a move request, ignoring rejected requests.
    ///
    /// Out-of-range indices, occupied cells and moves after the game ended
    /// return an unchanged copy of `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> GameState {
        match self.try_move(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "move ignored");
                self.clone()
            }
        }
    }

    /// Returns the initial state. Valid from any state.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn reset(&self) -> GameState {
        debug!("resetting game");
        GameState::new()
    }

    /// Rebuilds a state by playing `indices` from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, MoveError> {
        indices
            .iter()
            .try_fold(GameState::new(), |state, &index| state.try_move(index))
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    #[instrument(skip_all)]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            turn: raw.turn,
            outcome: raw.outcome,
            history: raw.history,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            debug!(count = violations.len(), "rejecting unreachable state");
            InvalidState { violations }
        })?;
        Ok(state)
    }
}

/// A state that no sequence of moves from the initial state produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid game state:")?;
        for violation in &self.violations {
            write!(f, " {};", violation.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidState {}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a move request to `state`; see [`GameState::apply_move`].
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    state.apply_move(index)
}

/// Resets `state` to the initial state; see [`GameState::reset`].
pub fn reset(state: &GameState) -> GameState {
    state.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::WinningLine;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Mark::Cross);
        assert_eq!(state.outcome(), Outcome::Playing);
        assert!(state.history().is_empty());
        assert_eq!(state.valid_moves().len(), 9);
    }

    #[test]
    fn test_move_marks_cell_and_flips_turn() {
        let state = GameState::new().try_move(4).unwrap();
        assert_eq!(state.board().get(Position::Center), Cell::Cross);
        assert_eq!(state.turn(), Mark::Circle);
        assert_eq!(state.history(), &[Move::new(Mark::Cross, Position::Center)]);

        let state = state.try_move(0).unwrap();
        assert_eq!(state.board().get(Position::TopLeft), Cell::Circle);
        assert_eq!(state.turn(), Mark::Cross);
    }

    #[test]
    fn test_rejections_report_reason() {
        let state = GameState::new().try_move(4).unwrap();
        assert_eq!(state.try_move(4), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(state.try_move(9), Err(MoveError::OutOfRange(9)));

        let won = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
        let line = WinningLine::from_indices(&[0, 3, 6]).unwrap();
        assert_eq!(won.try_move(8), Err(MoveError::GameOver(Outcome::CrossWins(line))));
    }

    #[test]
    fn test_apply_move_ignores_rejections() {
        let state = GameState::new().apply_move(2);
        assert_eq!(state.apply_move(2), state);
        assert_eq!(state.apply_move(42), state);
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let won = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
        assert!(won.is_over());
        assert_eq!(won.turn(), Mark::Circle);
        assert!(won.valid_moves().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_stale_outcome() {
        let json = r#"{
            "board": {"cells": ["Cross", "Cross", "Cross", "Circle", "Circle",
                                "Empty", "Empty", "Empty", "Empty"]},
            "turn": "Circle",
            "outcome": "Playing",
            "history": []
        }"#;
        let err = serde_json::from_str::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("invalid game state"));
    }

    #[test]
    fn test_deserialize_accepts_played_game() {
        let won = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        let json = serde_json::to_string(&won).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, won);
        assert!(back.is_over());
        assert_eq!(back.apply_move(8), back);
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let state = GameState::replay(&[0, 1, 3]).unwrap();
        assert_eq!(reset(&state), GameState::new());
    }
}
