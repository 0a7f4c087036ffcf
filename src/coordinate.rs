//! Grid positions.

use core::fmt;

/// Offsets of a cell's 8-neighbourhood, the cell itself included.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-indexed (row, col) position.
///
/// Components are signed and unchecked: whether a coordinate lies on a board
/// is decided by the [`Board`](crate::Board) it is used against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from 1-indexed user-facing values.
    pub const fn from_one_based(row: i32, col: i32) -> Self {
        Self::new(row - 1, col - 1)
    }

    /// Coordinate shifted by (`d_row`, `d_col`).
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// This cell and its eight surrounding cells, in row-major order.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .into_iter()
            .map(move |(d_row, d_col)| self.offset(d_row, d_col))
    }
}

/// Displays 1-indexed as `row col`, the same form the player types.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
