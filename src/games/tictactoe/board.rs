//! Square board of marks.
//!
//! A board is a value: once stored in history it is never mutated.
//! Placing a mark produces a new board via [`Board::with_mark`].

use super::error::{EngineError, SnapshotError};
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Side length of the classic board.
pub const DEFAULT_SIDE: usize = 3;

/// Largest supported board side.
pub const MAX_SIDE: usize = 9;

/// N×N board with squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardSnapshot {
    side: usize,
    squares: Vec<Square>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let BoardSnapshot { side, squares } = snapshot;
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(SnapshotError::new(format!(
                "board side {} is outside 1..={}",
                side, MAX_SIDE
            )));
        }
        if side * side != squares.len() {
            return Err(SnapshotError::new(format!(
                "board of side {} holds {} squares",
                side,
                squares.len()
            )));
        }
        Ok(Self { side, squares })
    }
}

impl Board {
    /// Creates an empty board of the given side length.
    ///
    /// The side is clamped to `1..=MAX_SIDE`.
    #[instrument]
    pub fn new(side: usize) -> Self {
        let clamped = side.clamp(1, MAX_SIDE);
        if clamped != side {
            warn!(requested = side, side = clamped, "Board side clamped");
        }
        Self {
            side: clamped,
            squares: vec![Square::Empty; clamped * clamped],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// Returns `None` unless the length is a perfect square.
    pub fn from_squares(squares: Vec<Square>) -> Option<Self> {
        let side = squares.len().isqrt();
        (side * side == squares.len()).then_some(Self { side, squares })
    }

    /// Side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (N²).
    pub fn cells(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `index` is not on the board.
    pub fn get(&self, index: usize) -> Result<Square, EngineError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(EngineError::CellOutOfRange {
                index,
                cells: self.cells(),
            })
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Ok(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the indices of empty squares.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Zero-based `(row, column)` of a cell index.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CellOutOfRange`] if `index` is not on the board.
    /// - [`EngineError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Self, EngineError> {
        if !self.get(index)?.is_empty() {
            return Err(EngineError::SquareOccupied { index });
        }
        let mut next = self.clone();
        next.squares[index] = Square::Occupied(player);
        Ok(next)
    }

    /// Indices where this board and `other` hold different squares.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        if self.cells() != other.cells() {
            return (0..self.cells().max(other.cells())).collect();
        }
        self.squares
            .iter()
            .zip(other.squares.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.side].join("+");
        for row in 0..self.side {
            for col in 0..self.side {
                let pos = row * self.side + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col + 1 < self.side {
                    f.write_str("|")?;
                }
            }
            if row + 1 < self.side {
                write!(f, "\n{}\n", separator)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.cells(), 9);
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(3);
        assert_eq!(
            board.get(9),
            Err(EngineError::CellOutOfRange { index: 9, cells: 9 })
        );
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::new(3);
        let next = board.with_mark(4, Player::X).unwrap();
        assert_eq!(board.get(4), Ok(Square::Empty));
        assert_eq!(next.get(4), Ok(Square::Occupied(Player::X)));
        assert_eq!(board.diff(&next), vec![4]);
    }

    #[test]
    fn test_with_mark_occupied() {
        let board = Board::new(3).with_mark(0, Player::X).unwrap();
        assert_eq!(
            board.with_mark(0, Player::O),
            Err(EngineError::SquareOccupied { index: 0 })
        );
    }

    #[test]
    fn test_from_squares_requires_square_length() {
        assert!(Board::from_squares(vec![Square::Empty; 8]).is_none());
        let board = Board::from_squares(vec![Square::Empty; 16]).unwrap();
        assert_eq!(board.side(), 4);
    }

    #[test]
    fn test_new_clamps_side() {
        assert_eq!(Board::new(0).side(), 1);
        assert_eq!(Board::new(usize::MAX).side(), MAX_SIDE);
        assert_eq!(Board::new(usize::MAX).cells(), MAX_SIDE * MAX_SIDE);
    }

    fn squares_toml(count: usize) -> String {
        vec!["\"Empty\""; count].join(", ")
    }

    #[test]
    fn test_deserialize_checks_square_count() {
        let text = format!("side = 3\nsquares = [{}]\n", squares_toml(4));
        let err = toml::from_str::<Board>(&text).unwrap_err();
        assert!(err.to_string().contains("holds 4 squares"));

        let text = format!("side = 3\nsquares = [{}]\n", squares_toml(9));
        assert_eq!(toml::from_str::<Board>(&text).unwrap(), Board::new(3));
    }

    #[test]
    fn test_deserialize_checks_side_bound() {
        let text = "side = 0\nsquares = []\n";
        assert!(toml::from_str::<Board>(text).is_err());
    }

    #[test]
    fn test_row_col() {
        let board = Board::new(3);
        assert_eq!(board.row_col(0), (0, 0));
        assert_eq!(board.row_col(5), (1, 2));
        assert_eq!(board.row_col(7), (2, 1));
    }

    #[test]
    fn test_display() {
        let board = Board::new(3)
            .with_mark(0, Player::X)
            .and_then(|b| b.with_mark(4, Player::O))
            .unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
