//! Contract-based validation for state transitions.
//!
//! Contracts pair preconditions with postconditions: {P} action {Q}.

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::state::GameState;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a transition on `S` driven by `A`.
pub trait Contract<S, A> {
    /// What the precondition check proves about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not reached a terminal outcome.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the outcome is terminal.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver(game.outcome()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a board position.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves `index` to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfRange(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects positions that already hold a mark.
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Contract for placing the current turn's mark at a board index.
///
/// Preconditions, checked in this order:
/// - game is not over
/// - index is in range
/// - cell is empty
///
/// Postconditions are the full [`TicTacToeInvariants`] set.
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    #[instrument(skip(game))]
    fn pre(game: &GameState, index: &usize) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let position = IndexInRange::check(*index)?;
        CellIsEmpty::check(position, game)?;
        Ok(position)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_precondition_resolves_position() {
        let game = GameState::new();
        assert_eq!(MoveContract::pre(&game, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_order() {
        // Terminal state wins over range and occupancy checks.
        let won = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
        assert!(matches!(MoveContract::pre(&won, &0), Err(MoveError::GameOver(_))));
        assert!(matches!(MoveContract::pre(&won, &99), Err(MoveError::GameOver(_))));

        let game = GameState::new().try_move(0).unwrap();
        assert_eq!(MoveContract::pre(&game, &9), Err(MoveError::OutOfRange(9)));
        assert_eq!(
            MoveContract::pre(&game, &0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameState::new();
        let after = game.try_move(4).unwrap();
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameState::new();
        let mut after = game.try_move(4).unwrap();
        after.board.set(Position::TopLeft, Cell::Circle);

        let err = MoveContract::post(&game, &after).unwrap_err();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
    }
}
