//! Game board: the grid, its ships, and shot resolution.

use std::collections::HashSet;

use log::debug;

use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Visible state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water that has not been fired upon.
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Ship segment that has been hit.
    Hit,
    /// Shot that landed in open water.
    Miss,
    /// Water around a sunk ship, revealed when it went down.
    Margin,
}

/// One side's grid with its fleet.
///
/// `targeted` holds every cell that may not be used again: cells fired upon,
/// plus the cells and buffer reserved while the fleet is placed so ships never
/// touch. The reserved cells are also kept in `placement`, and
/// [`Board::begin_match`] releases only those; shot history is never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    targeted: HashSet<Coordinate>,
    placement: HashSet<Coordinate>,
    sunk_count: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            ships: Vec::new(),
            targeted: HashSet::new(),
            placement: HashSet::new(),
            sunk_count: 0,
            concealed: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when `coord` falls outside the grid.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let size = self.size as i32;
        !(0..size).contains(&coord.row) || !(0..size).contains(&coord.col)
    }

    /// State of the cell at `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Iterate rows of cell states, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether `coord` is currently blocked for placement or firing.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Number of blocked cells.
    pub fn targeted_count(&self) -> usize {
        self.targeted.len()
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    pub fn live_ship_count(&self) -> usize {
        self.ships.len() - self.sunk_count
    }

    /// Returns `true` once every ship of a non-empty fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide ship segments when the board is rendered.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Place `ship`, reserving its cells and the surrounding buffer.
    ///
    /// Every cell is checked before anything is written, so a rejected ship
    /// leaves the board untouched.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Some(conflict) = ship
            .occupied_coordinates()
            .find(|&c| self.is_out_of_bounds(c) || self.targeted.contains(&c))
        {
            return Err(BoardError::ShipPlacementConflict(conflict));
        }

        for coord in ship.occupied_coordinates() {
            self.set_cell(coord, CellState::Ship);
            self.targeted.insert(coord);
            self.placement.insert(coord);
        }
        self.mark_surroundings(&ship, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `coord` and report what the shot did.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        if self.is_out_of_bounds(coord) {
            return Err(BoardError::OutOfBoundsFire(coord));
        }
        if self.targeted.contains(&coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }

        let Some(idx) = self.ships.iter().position(|s| s.occupies(coord)) else {
            self.targeted.insert(coord);
            self.set_cell(coord, CellState::Miss);
            debug!("shot at {} missed", coord);
            return Ok(ShotResult::Miss);
        };

        self.ships[idx].apply_hit()?;
        self.targeted.insert(coord);
        self.set_cell(coord, CellState::Hit);
        if !self.ships[idx].is_sunk() {
            debug!("shot at {} hit", coord);
            return Ok(ShotResult::Hit);
        }

        self.sunk_count += 1;
        let sunk = self.ships[idx].clone();
        self.mark_surroundings(&sunk, true);
        debug!(
            "shot at {} sank a ship of length {} ({} of {} sunk)",
            coord,
            sunk.length(),
            self.sunk_count,
            self.ships.len()
        );
        Ok(ShotResult::Sunk)
    }

    /// Release the cells reserved during placement. Cells already fired upon
    /// stay targeted, so calling this mid-match changes nothing about play.
    pub fn begin_match(&mut self) {
        for coord in self.placement.drain() {
            self.targeted.remove(&coord);
        }
    }

    /// Block every free in-bounds cell around `ship`, revealing them as
    /// margin when `reveal` is set.
    fn mark_surroundings(&mut self, ship: &Ship, reveal: bool) {
        for coord in ship.occupied_coordinates().flat_map(Coordinate::neighbourhood) {
            if self.is_out_of_bounds(coord) || !self.targeted.insert(coord) {
                continue;
            }
            if reveal {
                self.set_cell(coord, CellState::Margin);
            } else {
                self.placement.insert(coord);
            }
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some(coord.row as usize * self.size + coord.col as usize)
        }
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}
