//! Turn order and victory detection.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{MatchError, ShotResult};
use crate::fleet::FleetPlacer;
use crate::observer::{MatchEvent, MatchObserver};
use crate::player::Combatant;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Boards are placed, no shot fired yet.
    Setup,
    /// Waiting for `Side` to shoot.
    AwaitingMove(Side),
    /// Decided; no more moves are accepted.
    Finished { winner: Side },
}

/// Runs a match between two combatants, each with its own board.
///
/// Lifecycle: construct in [`MatchState::Setup`], [`start`](Self::start),
/// then [`step`](Self::step) until [`MatchState::Finished`].
pub struct MatchController {
    combatants: [Box<dyn Combatant>; 2],
    boards: [Board; 2],
    state: MatchState,
    rng: SmallRng,
    shots: usize,
}

impl MatchController {
    /// Pair two combatants with the boards holding their own fleets.
    pub fn new(
        first: Box<dyn Combatant>,
        first_board: Board,
        second: Box<dyn Combatant>,
        second_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            combatants: [first, second],
            boards: [first_board, second_board],
            state: MatchState::Setup,
            rng,
            shots: 0,
        }
    }

    /// Place random fleets for both sides on `size`×`size` boards.
    ///
    /// The second side's board is concealed; the first side is the one
    /// looking at the screen.
    pub fn with_random_fleets(
        first: Box<dyn Combatant>,
        second: Box<dyn Combatant>,
        size: usize,
        mut rng: SmallRng,
    ) -> Self {
        let placer = FleetPlacer::new(size);
        let first_board = placer.random_board(&mut rng);
        let mut second_board = placer.random_board(&mut rng);
        second_board.set_concealed(true);
        Self::new(first, first_board, second, second_board, rng)
    }

    /// Same as [`with_random_fleets`](Self::with_random_fleets) with a fixed seed.
    pub fn seeded(
        first: Box<dyn Combatant>,
        second: Box<dyn Combatant>,
        size: usize,
        seed: u64,
    ) -> Self {
        Self::with_random_fleets(first, second, size, SmallRng::seed_from_u64(seed))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Winner once the match is finished.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Board holding `side`'s fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Number of shots that landed so far, both sides together.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Leave setup with the first side to move. Does nothing once started.
    pub fn start(&mut self) -> MatchState {
        if self.state == MatchState::Setup {
            info!(
                "match started on a {}x{} board",
                self.boards[0].size(),
                self.boards[0].size()
            );
            self.state = MatchState::AwaitingMove(Side::First);
        }
        self.state
    }

    /// Play one turn for the side to move and return the new state.
    ///
    /// A hit or sink keeps the same side on the move; a miss passes the turn.
    pub fn step(&mut self, observer: &mut dyn MatchObserver) -> Result<MatchState, MatchError> {
        let side = match self.state {
            MatchState::Setup => return Err(MatchError::NotStarted),
            MatchState::Finished { .. } => return Err(MatchError::MatchFinished),
            MatchState::AwaitingMove(side) => side,
        };
        observer.notify(&MatchEvent::TurnStarted(side));

        let opponent = &mut self.boards[side.opponent().index()];
        let combatant = &mut self.combatants[side.index()];
        let result = combatant.take_turn(side, &mut self.rng, opponent, observer)?;
        self.shots += 1;

        self.state = if let Some(winner) = self.decided() {
            info!("{:?} won after {} shots", winner, self.shots);
            observer.notify(&MatchEvent::MatchWon(winner));
            MatchState::Finished { winner }
        } else if result == ShotResult::Miss {
            debug!("{:?} missed, turn passes", side);
            MatchState::AwaitingMove(side.opponent())
        } else {
            MatchState::AwaitingMove(side)
        };
        Ok(self.state)
    }

    /// Play to the end and return the winner.
    pub fn run(&mut self, observer: &mut dyn MatchObserver) -> Result<Side, MatchError> {
        self.start();
        loop {
            if let MatchState::Finished { winner } = self.step(observer)? {
                return Ok(winner);
            }
        }
    }

    /// The side whose opponent has lost every ship, if any.
    fn decided(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .into_iter()
            .find(|side| self.boards[side.opponent().index()].all_sunk())
    }
}
