//! Outbound events.
//!
//! Every accepted command produces a list of `Outbound` values: an `Event`
//! and who should receive it. The engine only decides the audience; the
//! transport does the delivery.

use serde::{Deserialize, Serialize};

use super::command::{Accusation, Suggestion};
use crate::board::{BoardSnapshot, Coordinate};
use crate::cards::Card;
use crate::core::PlayerId;

/// Audience of an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Every seated (or lobby) player.
    All,
    /// Exactly one player.
    Player(PlayerId),
    /// Everyone except the listed players.
    AllExcept(Vec<PlayerId>),
}

impl Recipient {
    /// Check if `player` is part of this audience.
    #[must_use]
    pub fn includes(&self, player: &PlayerId) -> bool {
        match self {
            Recipient::All => true,
            Recipient::Player(p) => p == player,
            Recipient::AllExcept(excluded) => !excluded.contains(player),
        }
    }
}

/// What a disprove reply revealed, as seen by one audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disproof {
    /// The card shown. Only the suggester and the revealer see this.
    Revealed(Card),
    /// A card was shown, but not to you.
    Withheld,
    /// Nobody could disprove the suggestion.
    NoCard,
}

/// One seat as listed in the lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySeat {
    pub player_id: PlayerId,
    pub ready: bool,
}

/// An event emitted by a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Identity minted for a joining player.
    AssignPlayerId(PlayerId),

    /// Current lobby roster.
    UpdatePlayers(Vec<LobbySeat>),

    /// Layout and token positions at the start of the game.
    StartGame(BoardSnapshot),

    /// The receiving player's hand.
    DealCards(Vec<Card>),

    YourTurn { turn_id: u32, player_id: PlayerId },

    Moved { player_id: PlayerId, to: Coordinate },

    /// A suggestion, verbatim.
    Suggested(Suggestion),

    Accused { accusation: Accusation, correct: bool },

    TurnEnded { player_id: PlayerId },

    /// Sent to exactly the seat being asked.
    RequestDisprove(Suggestion),

    /// Outcome of a disprove step. `player_id` is the revealer, or the
    /// suggester when nobody could disprove.
    Disproved {
        player_id: PlayerId,
        disproof: Disproof,
        suggestion: Suggestion,
    },

    /// The game is over. `winner` is `None` when every seat was eliminated.
    EndGame { winner: Option<Accusation> },
}

/// An event and its audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outbound {
    pub to: Recipient,
    pub event: Event,
}

impl Outbound {
    #[must_use]
    pub fn new(to: Recipient, event: Event) -> Self {
        Self { to, event }
    }

    #[must_use]
    pub fn broadcast(event: Event) -> Self {
        Self::new(Recipient::All, event)
    }

    #[must_use]
    pub fn to_player(player: PlayerId, event: Event) -> Self {
        Self::new(Recipient::Player(player), event)
    }
}

/// Events in `outbound` that `player` would receive, in order.
pub fn events_for<'a>(
    outbound: &'a [Outbound],
    player: &'a PlayerId,
) -> impl Iterator<Item = &'a Event> + 'a {
    outbound
        .iter()
        .filter(move |o| o.to.includes(player))
        .map(|o| &o.event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Character, Weapon};

    fn id(character: Character) -> PlayerId {
        PlayerId::placeholder(character)
    }

    #[test]
    fn test_recipient_includes() {
        let scarlet = id(Character::Scarlet);
        let plum = id(Character::Plum);

        assert!(Recipient::All.includes(&scarlet));
        assert!(Recipient::Player(scarlet.clone()).includes(&scarlet));
        assert!(!Recipient::Player(scarlet.clone()).includes(&plum));
        assert!(!Recipient::AllExcept(vec![scarlet.clone()]).includes(&scarlet));
        assert!(Recipient::AllExcept(vec![scarlet]).includes(&plum));
    }

    #[test]
    fn test_events_for() {
        let scarlet = id(Character::Scarlet);
        let plum = id(Character::Plum);
        let outbound = vec![
            Outbound::broadcast(Event::TurnEnded { player_id: scarlet.clone() }),
            Outbound::to_player(plum.clone(), Event::DealCards(vec![Card::Weapon(Weapon::Rope)])),
        ];

        assert_eq!(events_for(&outbound, &scarlet).count(), 1);
        assert_eq!(events_for(&outbound, &plum).count(), 2);
    }

    #[test]
    fn test_outbound_serialization() {
        let outbound = Outbound::new(
            Recipient::AllExcept(vec![id(Character::White)]),
            Event::YourTurn { turn_id: 3, player_id: id(Character::White) },
        );

        let json = serde_json::to_string(&outbound).unwrap();
        let deserialized: Outbound = serde_json::from_str(&json).unwrap();
        assert_eq!(outbound, deserialized);
    }
}
