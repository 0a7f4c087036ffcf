use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::MatchError;
use crate::coordinate::Coordinate;
use crate::observer::MatchObserver;

use super::Combatant;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no memory of its own: cells already shot at can be drawn again,
/// the board rejects them and the turn loop draws once more.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedCombatant;

impl AutomatedCombatant {
    pub fn new() -> Self {
        Self
    }
}

impl Combatant for AutomatedCombatant {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
        _observer: &mut dyn MatchObserver,
    ) -> Result<Coordinate, MatchError> {
        let size = opponent.size() as i32;
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
