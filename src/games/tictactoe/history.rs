//! Linear history of board snapshots.

use super::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board snapshot plus the cell changed to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell played to reach this board; `None` for the game start.
    last_move: Option<usize>,
}

impl HistoryEntry {
    /// The empty starting position.
    pub fn start(side: usize) -> Self {
        Self {
            board: Board::new(side),
            last_move: None,
        }
    }

    /// A position reached by playing `cell`.
    pub fn after_move(board: Board, cell: usize) -> Self {
        Self {
            board,
            last_move: Some(cell),
        }
    }
}

/// Ordered history; entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the starting position.
    #[instrument]
    pub fn new(side: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::start(side)],
        }
    }

    /// Number of entries, including the start.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a well-formed history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Appends `entry` after `step`, discarding everything that followed it.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub(super) fn branch_at(&mut self, step: usize, entry: HistoryEntry) {
        let discarded = self.entries.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding entries after step");
        }
        self.entries.truncate(step + 1);
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}
