//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, GameState};

/// Invariant: replaying the history onto an empty board never overwrites a
/// cell and reproduces the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::from(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
