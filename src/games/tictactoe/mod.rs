//! Tic-tac-toe with a navigable move history.

mod board;
mod contracts;
mod engine;
mod error;
mod history;
mod move_list;
mod outcome;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, DEFAULT_SIDE, MAX_SIDE};
pub use contracts::{CellInRange, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use engine::{GameEngine, Phase, Status};
pub use error::{EngineError, ErrorKind, SnapshotError};
pub use history::{History, HistoryEntry};
pub use move_list::{MoveListEntry, describe, move_coordinates};
pub use outcome::Outcome;
pub use rules::detect_outcome;
pub use types::{Player, Square};

/// Alias for the occupant state of a cell.
pub type Mark = Square;
