//! Common types for the board: shot results and board errors.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Outcome of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot hit open water.
    Miss,
    /// Shot hit a ship segment and the ship is still afloat.
    Hit,
    /// Shot destroyed the last segment of a ship.
    Sunk,
}

impl ShotResult {
    /// Hits and sinks let the firing side shoot again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by Board and Ship operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Shot aimed outside the grid.
    #[error("cannot fire outside the board ({0})")]
    OutOfBoundsFire(Coordinate),
    /// Cell was already fired upon.
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coordinate),
    /// Ship leaves the grid, overlaps another ship or touches one.
    #[error("ship cannot be placed at {0}")]
    ShipPlacementConflict(Coordinate),
    /// Internal bookkeeping went wrong, e.g. a hit on an already destroyed ship.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl BoardError {
    /// Errors a combatant recovers from by choosing another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBoundsFire(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

/// Errors that end or block a match.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Non-recoverable board failure.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The human side's input stream ended.
    #[error("input closed")]
    InputClosed,
    /// Reading input or writing a prompt failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// `step` called before `start`.
    #[error("match has not started")]
    NotStarted,
    /// A move was requested after the match was decided.
    #[error("match is already finished")]
    MatchFinished,
}
