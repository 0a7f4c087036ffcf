//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomatedCombatant, Board, Combatant, ConsoleInput, Coordinate, FleetPlacer, HumanCombatant,
    MatchController, MatchEvent, MatchObserver, MatchState, Orientation, Ship, ShotResult, Side,
};

pub use crate::ui::{render_board, ConsoleReporter};
