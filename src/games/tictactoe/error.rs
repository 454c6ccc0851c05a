//! Rejection reasons for engine requests.
//!
//! The engine's primary operations absorb these silently; the `try_*`
//! variants surface them so hosts and tests can see why a request was ignored.

use super::outcome::Outcome;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Coarse classification of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ErrorKind {
    /// A cell or step index outside its valid bounds.
    #[display("out of range")]
    OutOfRange,
    /// The cell is taken or the game already ended at the cursor.
    #[display("illegal move")]
    IllegalMove,
}

/// Error returned when a move or jump request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index is not on the board.
    #[display("Cell {index} is out of range (board has {cells} cells)")]
    CellOutOfRange {
        /// Requested cell.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// History step does not exist.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// The square at the index is already occupied.
    #[display("Cell {index} is already occupied")]
    SquareOccupied {
        /// Requested cell.
        index: usize,
    },

    /// The board at the cursor is already decided.
    #[display("Game is already over ({outcome})")]
    GameOver {
        /// Outcome of the board at the cursor.
        outcome: Outcome,
    },
}

/// Error returned when serialized state breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid snapshot: {reason}")]
pub struct SnapshotError {
    reason: String,
}

impl SnapshotError {
    /// Creates a snapshot error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// What was wrong with the snapshot.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl EngineError {
    /// Returns which class of rejection this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::CellOutOfRange { .. } | EngineError::StepOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            EngineError::SquareOccupied { .. } | EngineError::GameOver { .. } => {
                ErrorKind::IllegalMove
            }
        }
    }
}
