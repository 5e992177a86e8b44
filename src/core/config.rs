//! Game configuration.
//!
//! Board and party sizing are fixed constants of the game. What varies
//! between sessions is collected in `GameConfig`: how many seats play, which
//! of them are bots, and the seed every random draw descends from.

use serde::{Deserialize, Serialize};

use super::error::{MazeError, Result};
use super::player::{PlayerId, PlayerKind};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with (one per corner).
pub const MAX_PLAYERS: usize = 4;

/// Row / column indices that can be slid. Every even line is fixed.
pub const SLIDABLE_LINES: [usize; 3] = [1, 3, 5];

/// Number of objective treasures in the deck.
pub const TREASURE_COUNT: usize = 24;

/// Session configuration.
///
/// ## Example
///
/// ```
/// use shifting_maze::core::{GameConfig, PlayerId, PlayerKind};
///
/// let config = GameConfig::default()
///     .with_player_count(3)
///     .with_seed(7)
///     .with_kind(PlayerId::new(1), PlayerKind::Human);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.kind(PlayerId::new(0)), PlayerKind::Human);
/// assert_eq!(config.kind(PlayerId::new(1)), PlayerKind::Human);
/// assert_eq!(config.kind(PlayerId::new(2)), PlayerKind::Bot);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats taking part in the next game (2..=4).
    pub player_count: usize,

    /// Root seed for board generation, the deal and bot fallbacks.
    pub seed: u64,

    /// Controller of each seat, indexed by `PlayerId`.
    /// Seats beyond `player_count` are ignored.
    pub seats: [PlayerKind; MAX_PLAYERS],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 42,
            // Seat 0 is the local human, everybody else is a bot
            seats: [PlayerKind::Human, PlayerKind::Bot, PlayerKind::Bot, PlayerKind::Bot],
        }
    }
}

impl GameConfig {
    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set who controls one seat. Unknown seats are ignored.
    #[must_use]
    pub fn with_kind(mut self, player: PlayerId, kind: PlayerKind) -> Self {
        if let Some(seat) = self.seats.get_mut(player.index()) {
            *seat = kind;
        }
        self
    }

    /// Make every seat human (hot-seat play, tests).
    #[must_use]
    pub fn all_human(mut self) -> Self {
        self.seats = [PlayerKind::Human; MAX_PLAYERS];
        self
    }

    /// Controller of a seat. Unknown seats read as human.
    #[must_use]
    pub fn kind(&self, player: PlayerId) -> PlayerKind {
        self.seats.get(player.index()).copied().unwrap_or_default()
    }

    /// Check the player count is playable.
    pub fn validate(&self) -> Result<()> {
        validate_player_count(self.player_count)
    }
}

/// Reject player counts outside `MIN_PLAYERS..=MAX_PLAYERS`.
pub fn validate_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(MazeError::InvalidPlayerCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.kind(PlayerId::new(0)), PlayerKind::Human);
        assert_eq!(config.kind(PlayerId::new(3)), PlayerKind::Bot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_player_count(4)
            .with_seed(123)
            .with_kind(PlayerId::new(0), PlayerKind::Bot)
            .with_kind(PlayerId::new(9), PlayerKind::Bot);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.seed, 123);
        assert!(config.kind(PlayerId::new(0)).is_bot());
        assert_eq!(config.kind(PlayerId::new(9)), PlayerKind::Human);
    }

    #[test]
    fn test_all_human() {
        let config = GameConfig::default().all_human();
        assert!(config.seats.iter().all(|k| !k.is_bot()));
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(validate_player_count(1).is_err());
        assert!(validate_player_count(2).is_ok());
        assert!(validate_player_count(4).is_ok());
        assert_eq!(
            validate_player_count(5),
            Err(MazeError::InvalidPlayerCount { count: 5 })
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99).with_player_count(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_slidable_lines_are_odd() {
        assert!(SLIDABLE_LINES.iter().all(|i| i % 2 == 1 && *i < BOARD_SIZE));
    }
}
