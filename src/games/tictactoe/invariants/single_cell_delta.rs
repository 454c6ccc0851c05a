//! Single-cell delta invariant: each entry changes exactly its last-move cell.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `history[k].board` differs from `history[k - 1].board`
/// in exactly the cell at `history[k].last_move`, for every k ≥ 1.
///
/// Past snapshots are never rewritten, so any in-place mutation of a
/// stored board shows up here as a multi-cell delta.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().entries().windows(2).all(|pair| {
            let [prev, next] = pair else { return false };
            match next.last_move() {
                Some(cell) => prev.board().diff(next.board()) == [*cell],
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry differs from its predecessor in exactly the moved cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryEntry, Player};

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::default();
        for cell in [4, 0, 8, 2] {
            engine.apply_move(cell);
        }
        assert!(SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_mislabelled_move_violates() {
        let mut engine = GameEngine::default();
        engine.apply_move(4);
        let board = engine.current_board().clone();
        engine.history.entries_mut()[1] = HistoryEntry::after_move(board, 5);
        assert!(!SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_two_cell_jump_violates() {
        let mut engine = GameEngine::default();
        engine.apply_move(4);
        let board = engine.current_board().with_mark(0, Player::O).unwrap();
        engine.history.entries_mut()[1] = HistoryEntry::after_move(board, 4);
        assert!(!SingleCellDeltaInvariant::holds(&engine));
    }
}
