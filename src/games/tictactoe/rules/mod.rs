//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine, contracts and tests can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// A win takes precedence over a full board.
#[instrument(skip(board), fields(side = board.side()))]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
