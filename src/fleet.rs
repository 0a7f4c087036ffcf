//! Random fleet placement.

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Builds boards with the standard fleet at random legal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer {
    size: usize,
    max_attempts: usize,
}

impl FleetPlacer {
    /// Placer for `size`×`size` boards with the standard attempt budget.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the number of placement attempts shared by the whole fleet.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Try once to place the whole fleet on a fresh board.
    ///
    /// Returns `None` when the attempt budget runs out; the caller starts
    /// over from an empty board. On success the placement buffer has already
    /// been cleared and the board is ready for play.
    pub fn build_random_board<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.size);
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    debug!(
                        "gave up placing fleet after {} attempts ({} of {} ships placed)",
                        self.max_attempts,
                        board.ships().len(),
                        FLEET.len()
                    );
                    return None;
                }
                match board.add_ship(self.random_ship(rng, length)) {
                    Ok(()) => break,
                    Err(BoardError::ShipPlacementConflict(_)) => continue,
                    Err(e) => {
                        warn!("unexpected placement failure: {}", e);
                        return None;
                    }
                }
            }
        }
        debug!("fleet placed after {} attempts", attempts);
        board.begin_match();
        Some(board)
    }

    /// Keep building boards until one succeeds.
    pub fn random_board<R: Rng>(&self, rng: &mut R) -> Board {
        loop {
            if let Some(board) = self.build_random_board(rng) {
                return board;
            }
        }
    }

    /// A ship of `length` with a bow anywhere in `0..=size` on both axes, so
    /// some candidates deliberately hang off the board.
    fn random_ship<R: Rng>(&self, rng: &mut R, length: usize) -> Ship {
        let limit = self.size as i32;
        let bow = Coordinate::new(rng.random_range(0..=limit), rng.random_range(0..=limit));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(length, bow, orientation)
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        FleetPlacer::new(BOARD_SIZE)
    }
}
