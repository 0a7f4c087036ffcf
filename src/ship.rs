//! Ship definitions and the cells they occupy.

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends towards increasing columns.
    Horizontal,
    /// Extends towards increasing rows.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight ship anchored at its bow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create an undamaged ship. Whether it fits is checked when it is added to a board.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        Ship {
            length,
            bow,
            orientation,
            remaining: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> + Clone {
        let bow = self.bow;
        let (d_row, d_col) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(d_row * i, d_col * i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.occupied_coordinates().any(|c| c == coord)
    }

    /// Take one segment of damage.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.remaining == 0 {
            return Err(BoardError::InvariantViolation("hit on a ship that is already sunk"));
        }
        self.remaining -= 1;
        Ok(())
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left.
    pub fn remaining_segments(&self) -> usize {
        self.remaining
    }
}
