//! Game orchestration: players, phases and the turn state machine.

pub mod phase;
pub mod player;
pub mod state;

pub use phase::Phase;
pub use player::{Player, PlayerMemento};
pub use state::{Game, GameSetup, START_POSITIONS};
