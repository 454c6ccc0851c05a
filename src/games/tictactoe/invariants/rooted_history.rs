//! Rooted history invariant: entry 0 is the empty starting board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: history starts from an empty board with no last move.
pub struct RootedHistoryInvariant;

impl Invariant<GameEngine> for RootedHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().get(0).is_some_and(|root| {
            root.last_move().is_none() && root.board().occupied() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}
