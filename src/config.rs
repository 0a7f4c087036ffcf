/// Side length of the square board used when nothing else is requested.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths making up every fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships in a fleet. A side loses once this many of its ships are sunk.
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Ship placement attempts allowed for a whole fleet before the board is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Smallest board size the command line accepts.
pub const MIN_BOARD_SIZE: usize = 6;

/// Largest board size the command line accepts.
pub const MAX_BOARD_SIZE: usize = 10;
