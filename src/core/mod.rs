//! Core engine types: positions, players, RNG, configuration, errors.
//!
//! These are the leaf building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{
    validate_player_count, GameConfig, BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS, SLIDABLE_LINES,
    TREASURE_COUNT,
};
pub use error::{ErrorCategory, MazeError, Result};
pub use player::{PlayerId, PlayerKind, PlayerMap};
pub use position::{Direction, Position};
pub use rng::GameRng;
