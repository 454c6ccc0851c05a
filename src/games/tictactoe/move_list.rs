//! Labels for the selectable history list.

use super::history::HistoryEntry;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One selectable line of the move list; selecting it jumps to `step`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct MoveListEntry {
    /// Text shown to the player.
    label: String,
    /// History step to jump to.
    step: usize,
}

/// Coordinates shown for a move at `cell` on a board of side `side`.
///
/// The row is one-based (`ceil((cell + 1) / side)`) while the column is
/// the zero-based `cell % side`, matching the labels players already know.
pub fn move_coordinates(cell: usize, side: usize) -> (usize, usize) {
    ((cell + 1).div_ceil(side), cell % side)
}

/// Describes the entry at `step`.
pub fn describe(entry: &HistoryEntry, step: usize, side: usize) -> String {
    match entry.last_move() {
        Some(cell) => {
            let (row, column) = move_coordinates(*cell, side);
            format!("Go to move ({}, {})", row, column)
        }
        None if step == 0 => "Go to game start".to_string(),
        None => format!("Go to move #{}", step),
    }
}
