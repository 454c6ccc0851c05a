//! Contract-based validation for engine moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::engine::GameEngine;
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::rules::detect_outcome;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell must be on the board.
pub struct CellInRange;

impl CellInRange {
    /// Checks the cell against the current board size.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<(), EngineError> {
        engine.current_board().get(cell).map(|_| ())
    }
}

/// Precondition: the cell must be empty on the board at the cursor.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the cell is unoccupied at the cursor.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<(), EngineError> {
        if engine.current_board().is_empty(cell) {
            Ok(())
        } else {
            Err(EngineError::SquareOccupied { index: cell })
        }
    }
}

/// Precondition: the board at the cursor must not be decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the outcome at the cursor is still open.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), EngineError> {
        let outcome = detect_outcome(engine.current_board());
        if outcome.is_terminal() {
            Err(EngineError::GameOver { outcome })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the cell exists, is empty,
/// and the game at the cursor is still open.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<(), EngineError> {
        CellInRange::check(cell, engine)?;
        CellIsEmpty::check(cell, engine)?;
        GameNotOver::check(engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Cell is on the board
/// - Cell is empty at the cursor
/// - Game at the cursor is still open
///
/// Postconditions:
/// - History ends exactly one entry after the old cursor
/// - Cursor points at the new entry
/// - All engine invariants hold
pub struct MoveContract;

impl Contract<GameEngine, usize> for MoveContract {
    fn pre(engine: &GameEngine, cell: &usize) -> Result<(), EngineError> {
        LegalMove::check(*cell, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.cursor() != before.cursor() + 1 {
            violations.push(InvariantViolation::new("Cursor advances by one after a move"));
        }
        if after.history().len() != before.cursor() + 2 {
            violations.push(InvariantViolation::new(
                "History ends at the new move after a move",
            ));
        }
        if after.history().entries()[..=before.cursor()]
            != before.history().entries()[..=before.cursor()]
        {
            violations.push(InvariantViolation::new(
                "Entries up to the old cursor are unchanged",
            ));
        }

        if let Err(mut found) = EngineInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{HistoryEntry, Outcome, Player};

    #[test]
    fn test_precondition_empty_square() {
        let engine = GameEngine::default();
        assert!(MoveContract::pre(&engine, &4).is_ok());
    }

    #[test]
    fn test_precondition_out_of_range() {
        let engine = GameEngine::default();
        assert!(matches!(
            MoveContract::pre(&engine, &9),
            Err(EngineError::CellOutOfRange { index: 9, cells: 9 })
        ));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::default();
        engine.apply_move(4);
        assert!(matches!(
            MoveContract::pre(&engine, &4),
            Err(EngineError::SquareOccupied { index: 4 })
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let mut engine = GameEngine::default();
        for cell in [0, 3, 1, 4, 2] {
            engine.apply_move(cell);
        }
        assert_eq!(
            MoveContract::pre(&engine, &8),
            Err(EngineError::GameOver {
                outcome: Outcome::Win(Player::X)
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameEngine::default();
        let mut after = before.clone();
        after.try_apply_move(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameEngine::default();
        let mut after = before.clone();
        after.try_apply_move(4).unwrap();

        // Smuggle a second mark into the stored snapshot
        let board = after
            .current_board()
            .with_mark(0, Player::O)
            .unwrap();
        after.history.entries_mut()[1] = HistoryEntry::after_move(board, 4);

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_stale_cursor() {
        let before = GameEngine::default();
        let mut after = before.clone();
        after.try_apply_move(4).unwrap();
        after.cursor = 0;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
