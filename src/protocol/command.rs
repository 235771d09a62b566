//! Inbound commands.
//!
//! The transport layer decodes client messages into `Command` values and
//! hands them to the owning table one at a time. The set is closed: adding
//! a command is a compile-checked change to every `match` over it.

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::cards::{Card, Guess};
use crate::core::{ActionType, PlayerId};

/// A suggestion: the current player names a character and weapon for the
/// room they stand in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub player_id: PlayerId,
    pub guess: Guess,
}

impl Suggestion {
    #[must_use]
    pub fn new(player_id: PlayerId, guess: Guess) -> Self {
        Self { player_id, guess }
    }
}

/// An accusation: a final guess at the solution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accusation {
    pub player_id: PlayerId,
    pub guess: Guess,
}

impl Accusation {
    #[must_use]
    pub fn new(player_id: PlayerId, guess: Guess) -> Self {
        Self { player_id, guess }
    }
}

/// A command addressed to one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Join the lobby under a nickname.
    JoinGame { nickname: String },

    /// Mark a lobby seat ready.
    Ready { player_id: PlayerId },

    /// Move the sender's token to a neighbouring space.
    Move { player_id: PlayerId, to: Coordinate },

    Suggest(Suggestion),

    /// Answer a disprove request with a matching card, or `None`.
    Disprove {
        player_id: PlayerId,
        card: Option<Card>,
        suggestion: Suggestion,
    },

    Accuse(Accusation),

    EndTurn { player_id: PlayerId },
}

impl Command {
    /// The player issuing the command. `JoinGame` has no identity yet.
    #[must_use]
    pub fn sender(&self) -> Option<&PlayerId> {
        match self {
            Command::JoinGame { .. } => None,
            Command::Ready { player_id }
            | Command::Move { player_id, .. }
            | Command::Disprove { player_id, .. }
            | Command::EndTurn { player_id } => Some(player_id),
            Command::Suggest(suggestion) => Some(&suggestion.player_id),
            Command::Accuse(accusation) => Some(&accusation.player_id),
        }
    }

    /// The turn action this command performs, if it is one.
    #[must_use]
    pub fn action_type(&self) -> Option<ActionType> {
        match self {
            Command::JoinGame { .. } | Command::Ready { .. } => None,
            Command::Move { .. } => Some(ActionType::Move),
            Command::Suggest(_) => Some(ActionType::Suggest),
            Command::Disprove { .. } => Some(ActionType::Disprove),
            Command::Accuse(_) => Some(ActionType::Accuse),
            Command::EndTurn { .. } => Some(ActionType::EndTurn),
        }
    }
}
