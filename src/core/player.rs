//! Player identity, seats and per-seat data storage.
//!
//! ## PlayerId
//!
//! Immutable identity value `{character, nickname}`. Compared and hashed by
//! value so it can key maps directly; tokens and seats store it by value.
//!
//! ## SeatIndex / PlayerMap
//!
//! Seats are 0-based positions in turn order. `PlayerMap` is per-seat data
//! storage backed by `Vec` for O(1) access, indexed by `SeatIndex`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Character};

/// Player identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId {
    pub character: Character,
    pub nickname: String,
}

impl PlayerId {
    #[must_use]
    pub fn new(character: Character, nickname: impl Into<String>) -> Self {
        Self {
            character,
            nickname: nickname.into(),
        }
    }

    /// Identity for a character nobody plays.
    ///
    /// The board still carries that character's token so it can be named
    /// in suggestions; the nickname is the character's name.
    #[must_use]
    pub fn placeholder(character: Character) -> Self {
        Self::new(character, character.name())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.nickname, self.character)
    }
}

/// Seat position in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatIndex(pub u8);

impl SeatIndex {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `seat_count`.
    #[must_use]
    pub const fn next(self, seat_count: usize) -> Self {
        Self(((self.0 as usize + 1) % seat_count) as u8)
    }

    /// Iterate over all seats of a table with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatIndex> {
        (0..seat_count as u8).map(SeatIndex)
    }
}

impl std::fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use clueless_engine::core::{PlayerMap, SeatIndex};
///
/// let mut notes: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// notes[SeatIndex::new(1)] += 2;
/// assert_eq!(notes[SeatIndex::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatIndex) -> T) -> Self {
        let data = SeatIndex::all(seat_count).map(factory).collect();
        Self { data }
    }

    /// Build from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatIndex) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatIndex) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatIndex, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatIndex, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatIndex(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over mutable values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<SeatIndex> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: SeatIndex) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatIndex> for PlayerMap<T> {
    fn index_mut(&mut self, seat: SeatIndex) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Server-side record of one seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub hand: Vec<Card>,
    /// Cleared by a false accusation. Inactive seats never get a turn.
    pub active: bool,
    /// Set when another player's suggestion pulled this token into a room.
    /// Consumed at the start of this player's next turn.
    pub moved_by_suggestion: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(player_id: PlayerId, seat: SeatIndex, hand: Vec<Card>) -> Self {
        Self {
            player_id,
            seat,
            hand,
            active: true,
            moved_by_suggestion: false,
        }
    }

    /// Check if `card` is in this player's hand.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}
