//! Match notifications.
//!
//! The core never prints. Everything a player should be told about is sent
//! to a [`MatchObserver`] as a [`MatchEvent`].

use crate::common::{BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::game::Side;
use crate::player::InputError;

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// `side` is about to move.
    TurnStarted(Side),
    /// `side` fired at `target`; the shot may still be rejected.
    ShotFired { side: Side, target: Coordinate },
    Miss { side: Side, target: Coordinate },
    Hit { side: Side, target: Coordinate },
    Sunk { side: Side, target: Coordinate },
    /// The board refused the shot; `side` picks another target.
    TargetRejected { side: Side, error: BoardError },
    /// Typed input could not be read as a target.
    InputRejected(InputError),
    MatchWon(Side),
}

impl MatchEvent {
    /// Event announcing the outcome of a shot that landed.
    pub fn for_result(side: Side, target: Coordinate, result: ShotResult) -> Self {
        match result {
            ShotResult::Miss => MatchEvent::Miss { side, target },
            ShotResult::Hit => MatchEvent::Hit { side, target },
            ShotResult::Sunk => MatchEvent::Sunk { side, target },
        }
    }
}

/// Receiver of match notifications.
pub trait MatchObserver {
    fn notify(&mut self, event: &MatchEvent);
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn notify(&mut self, _event: &MatchEvent) {}
}

/// Observer that keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl MatchObserver for EventLog {
    fn notify(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}
