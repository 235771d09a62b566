//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A correct accusation.
    Winner(PlayerId),
    /// Every seat was eliminated by a false accusation.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }
}
