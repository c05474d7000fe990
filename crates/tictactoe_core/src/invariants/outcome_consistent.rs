//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::{Board, Cell, GameState, rules::evaluate};

/// Invariant: the stored outcome is what the evaluator reports for the board,
/// and no move was played after the game ended.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        if game.outcome() != evaluate(game.board()) {
            return false;
        }

        let Some((_, earlier)) = game.history().split_last() else {
            return true;
        };
        let mut board = Board::new();
        earlier.iter().all(|mov| {
            board.set(mov.position, Cell::from(mov.mark));
            !evaluate(&board).is_terminal()
        })
    }

    fn description() -> &'static str {
        "Stored outcome matches the evaluated board"
    }
}
