//! History consistency invariant: one history entry per occupied cell.

use super::Invariant;
use crate::GameState;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
