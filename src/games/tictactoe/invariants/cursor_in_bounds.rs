//! Cursor invariant: the cursor always names an existing entry.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.cursor() < engine.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_jumps() {
        let mut engine = GameEngine::default();
        engine.apply_move(0);
        engine.jump_to(0);
        engine.jump_to(7);
        assert!(CursorInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_detached_cursor_violates() {
        let mut engine = GameEngine::default();
        engine.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
