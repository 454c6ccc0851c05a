//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor based on arrow keys.
///
/// The cursor stays put at the board edges and for any other key.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / side, cursor % side);
    match key {
        KeyCode::Right if col + 1 < side => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < side => cursor + side,
        KeyCode::Up if row > 0 => cursor - side,
        _ => cursor,
    }
}

/// Maps a digit key to a cell index (`1` is cell 0).
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
