//! Alternating turn invariant: Cross, Circle, Cross, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: history starts with Cross, marks alternate, and the mark to
/// move matches the number of moves played.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mark != Mark::Cross
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected = if history.len() % 2 == 0 {
            Mark::Cross
        } else {
            Mark::Circle
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate starting with Cross"
    }
}
