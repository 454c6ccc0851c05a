//! No play after the end: a decided board is always the last entry.

use super::super::GameEngine;
use super::super::rules::detect_outcome;
use super::Invariant;

/// Invariant: every entry except the last is still in progress.
pub struct NoPlayAfterEndInvariant;

impl Invariant<GameEngine> for NoPlayAfterEndInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let entries = engine.history().entries();
        entries[..entries.len().saturating_sub(1)]
            .iter()
            .all(|entry| !detect_outcome(entry.board()).is_terminal())
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}
