//! Combatant trait and implementations
//!
//! A combatant picks where to shoot. Two kinds exist:
//! - AutomatedCombatant: uniform random targets
//! - HumanCombatant: targets typed on an input source

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{MatchError, ShotResult};
use crate::coordinate::Coordinate;
use crate::game::Side;
use crate::observer::{MatchEvent, MatchObserver};

/// Interface implemented by both kinds of combatant.
pub trait Combatant {
    /// Pick the next cell to fire at on `opponent`.
    ///
    /// The target is not required to be legal; [`Combatant::take_turn`]
    /// asks again when the board rejects it.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
        observer: &mut dyn MatchObserver,
    ) -> Result<Coordinate, MatchError>;

    /// Fire at `opponent` until a shot lands and return its result.
    ///
    /// Out-of-bounds and repeated targets are reported and retried. Any other
    /// error ends the turn.
    fn take_turn(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        opponent: &mut Board,
        observer: &mut dyn MatchObserver,
    ) -> Result<ShotResult, MatchError> {
        loop {
            let target = self.choose_target(rng, opponent, observer)?;
            observer.notify(&MatchEvent::ShotFired { side, target });
            match opponent.fire(target) {
                Ok(result) => {
                    observer.notify(&MatchEvent::for_result(side, target, result));
                    return Ok(result);
                }
                Err(error) if error.is_retryable_shot() => {
                    debug!("{:?} target rejected: {}", side, error);
                    observer.notify(&MatchEvent::TargetRejected { side, error });
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}

pub mod ai;
pub use ai::AutomatedCombatant;

pub mod cli;
pub use cli::{parse_target, ConsoleInput, HumanCombatant, InputError, InputSource};
