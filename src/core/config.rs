//! Table configuration.
//!
//! Every table is configured independently at creation time. The defaults
//! match the standard rules; the knobs cover the seat limits, the dealing
//! seed, and how the disprove ring treats eliminated or stalled seats.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::cards::Character;

/// Fewest seats a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a table can hold (one per character).
pub const MAX_PLAYERS: usize = Character::ALL.len();

/// Default wait for a disprove reply before it is forced to "no card".
pub const DEFAULT_DISPROVE_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for a single table.
///
/// ```
/// use std::time::Duration;
/// use clueless_engine::core::TableConfig;
///
/// let config = TableConfig::new(7)
///     .with_disprove_timeout(Some(Duration::from_secs(30)))
///     .skip_eliminated_seats();
///
/// assert_eq!(config.seed, 7);
/// assert!(!config.eliminated_seats_disprove);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed for the solution pick and the shuffle.
    pub seed: u64,

    /// How long a seat may sit on a disprove request. `None` waits forever.
    pub disprove_timeout: Option<Duration>,

    /// Whether seats eliminated by a false accusation are still asked to
    /// disprove. They keep their hands, so the standard rules say yes.
    pub eliminated_seats_disprove: bool,

    /// Seats required before the lobby may start.
    pub min_players: usize,

    /// Seats the lobby accepts.
    pub max_players: usize,
}

impl TableConfig {
    /// Create a configuration with the standard rules and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            disprove_timeout: Some(DEFAULT_DISPROVE_TIMEOUT),
            eliminated_seats_disprove: true,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }

    /// Create a configuration seeded from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    /// Set the disprove timeout.
    #[must_use]
    pub fn with_disprove_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.disprove_timeout = timeout;
        self
    }

    /// Do not ask eliminated seats to disprove.
    #[must_use]
    pub fn skip_eliminated_seats(mut self) -> Self {
        self.eliminated_seats_disprove = false;
        self
    }

    /// Set the seat limits, clamped to what the board supports.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.max_players = max.clamp(self.min_players, MAX_PLAYERS);
        self
    }

    /// Check if a game may start with `count` seats.
    #[must_use]
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::new(1);

        assert_eq!(config.disprove_timeout, Some(DEFAULT_DISPROVE_TIMEOUT));
        assert!(config.eliminated_seats_disprove);
        assert!(!config.accepts_player_count(1));
        assert!(config.accepts_player_count(2));
        assert!(config.accepts_player_count(6));
        assert!(!config.accepts_player_count(7));
    }

    #[test]
    fn test_player_limits_clamped() {
        let config = TableConfig::new(1).with_player_limits(0, 10);
        assert_eq!((config.min_players, config.max_players), (2, 6));

        let config = TableConfig::new(1).with_player_limits(4, 3);
        assert_eq!((config.min_players, config.max_players), (4, 4));
    }

    #[test]
    fn test_config_serde() {
        let config = TableConfig::new(99).with_disprove_timeout(None);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
