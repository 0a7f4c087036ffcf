mod board;
mod common;
pub mod config;
mod coordinate;
mod fleet;
mod game;
pub mod logging;
pub mod observer;
pub mod player;
pub mod prelude;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use fleet::*;
pub use game::*;
pub use logging::init_logging;
pub use observer::*;
pub use player::*;
pub use ship::*;
