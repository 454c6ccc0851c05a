//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Enumerates the winning lines of an N×N board.
///
/// Order is fixed: N rows top to bottom, N columns left to right,
/// then the main diagonal and the anti-diagonal.
pub fn winning_lines(side: usize) -> Vec<Vec<usize>> {
    if side == 0 {
        return Vec::new();
    }
    let rows = (0..side).map(|r| (0..side).map(|c| r * side + c).collect::<Vec<usize>>());
    let cols = (0..side).map(|c| (0..side).map(|r| r * side + c).collect::<Vec<usize>>());
    let main: Vec<usize> = (0..side).map(|i| i * side + i).collect();
    let anti: Vec<usize> = (0..side).map(|i| i * side + (side - 1 - i)).collect();
    rows.chain(cols).chain([main, anti]).collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`winning_lines`] order)
/// whose squares all hold the same mark, `None` otherwise.
#[instrument(skip(board), fields(side = board.side()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    winning_lines(board.side()).iter().find_map(|line| {
        let first = squares[line[0]].player()?;
        line[1..]
            .iter()
            .all(|&i| squares[i].player() == Some(first))
            .then_some(first)
    })
}
