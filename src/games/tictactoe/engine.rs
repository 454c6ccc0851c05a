//! Game engine with a navigable move history.
//!
//! The engine owns the history of board snapshots and a cursor into it.
//! Whose turn it is follows from the cursor's parity, so jumping around
//! the history can never leave a stale turn flag behind.
//!
//! `apply_move` and `jump_to` absorb invalid requests as no-ops. The
//! `try_*` variants report why a request was ignored.

use super::contracts::{Contract, MoveContract};
use super::error::{EngineError, SnapshotError};
use super::history::{History, HistoryEntry};
use super::invariants::{EngineInvariants, InvariantSet};
use super::move_list::{MoveListEntry, describe};
use super::rules::detect_outcome;
use super::{Board, Outcome, Player};
use crate::GameConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether play can continue from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The board at the cursor is still open.
    Active,
    /// The board at the cursor is won or drawn.
    Ended,
}

/// Status line for the board at the cursor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// The player owns a complete line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full with no line.
    #[display("End game. No winner")]
    Draw,
    /// The player places the next mark.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe engine with time travel.
///
/// Deserialization rejects any history or cursor that fails
/// [`EngineInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineSnapshot")]
pub struct GameEngine {
    pub(super) history: History,
    pub(super) cursor: usize,
}

/// Unchecked wire form of a [`GameEngine`].
#[derive(Deserialize)]
struct EngineSnapshot {
    history: History,
    cursor: usize,
}

impl TryFrom<EngineSnapshot> for GameEngine {
    type Error = SnapshotError;

    fn try_from(snapshot: EngineSnapshot) -> Result<Self, Self::Error> {
        let engine = Self {
            history: snapshot.history,
            cursor: snapshot.cursor,
        };
        EngineInvariants::check_all(&engine).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            SnapshotError::new(reasons.join("; "))
        })?;
        Ok(engine)
    }
}

impl GameEngine {
    /// Creates a new game on an empty board of the given side length.
    #[instrument]
    pub fn new(side: usize) -> Self {
        Self {
            history: History::new(side),
            cursor: 0,
        }
    }

    /// Creates a new game sized by `config`.
    #[instrument(skip(config), fields(side = *config.side()))]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.side())
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        self.current_board().side()
    }

    /// The full history, including entries after the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the history entry being viewed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The player who places the next mark from the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// The history entry at the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history.entries()[self.cursor]
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Outcome of the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        detect_outcome(self.current_board())
    }

    /// Whether moves are accepted from the cursor.
    pub fn phase(&self) -> Phase {
        if self.outcome().is_terminal() {
            Phase::Ended
        } else {
            Phase::Active
        }
    }

    /// Status of the board at the cursor.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Win(player) => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(self.next_player()),
        }
    }

    /// One selectable entry per history step.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let side = self.side();
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry::new(describe(entry, step, side), step))
            .collect()
    }

    /// Places the next player's mark at `cell` from the cursor.
    ///
    /// Entries after the cursor are discarded. Returns the new cursor.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CellOutOfRange`] if `cell` is not on the board.
    /// - [`EngineError::SquareOccupied`] if the cell is taken at the cursor.
    /// - [`EngineError::GameOver`] if the board at the cursor is decided.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.next_player()))]
    pub fn try_apply_move(&mut self, cell: usize) -> Result<usize, EngineError> {
        MoveContract::pre(&*self, &cell)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let board = self.current_board().with_mark(cell, player)?;
        self.history
            .branch_at(self.cursor, HistoryEntry::after_move(board, cell));
        self.cursor += 1;

        info!(cell, %player, step = self.cursor, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, &*self) {
            for violation in &violations {
                tracing::warn!(
                    description = %violation.description,
                    "Invariant violated after move"
                );
            }
            debug_assert!(violations.is_empty(), "Move postcondition failed");
        }

        Ok(self.cursor)
    }

    /// Places the next player's mark at `cell`, ignoring invalid requests.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) {
        if let Err(error) = self.try_apply_move(cell) {
            debug!(%error, kind = %error.kind(), "Move ignored");
        }
    }

    /// Moves the cursor to `step` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if no entry exists at `step`.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;
        debug!(step, next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Moves the cursor to `step`, ignoring steps that do not exist.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(error) = self.try_jump_to(step) {
            debug!(%error, kind = %error.kind(), "Jump ignored");
        }
    }

    /// Starts over on an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let side = self.side();
        info!(side, discarded = self.history.len() - 1, "Restarting game");
        *self = Self::new(side);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(super::board::DEFAULT_SIDE)
    }
}
