//! Capacity-bounded board spaces.
//!
//! Rooms, hallways and the void between hallways are one struct: a capacity
//! plus an optional room tag. The kind is derived from those two fields.

use serde::{Deserialize, Serialize};

use crate::cards::Location;
use crate::core::PlayerId;

/// Tokens a room can hold (every character at once).
pub const ROOM_CAPACITY: usize = 6;

/// Tokens a hallway can hold.
pub const HALLWAY_CAPACITY: usize = 1;

/// Kind of space, derived from capacity and room tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Room(Location),
    Hallway,
    Void,
}

/// One grid cell and the tokens standing on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    capacity: usize,
    room: Option<Location>,
    occupants: Vec<PlayerId>,
}

impl Space {
    #[must_use]
    pub fn room(location: Location) -> Self {
        Self::with_capacity(ROOM_CAPACITY, Some(location))
    }

    #[must_use]
    pub fn hallway() -> Self {
        Self::with_capacity(HALLWAY_CAPACITY, None)
    }

    #[must_use]
    pub fn void() -> Self {
        Self::with_capacity(0, None)
    }

    pub(crate) fn with_capacity(capacity: usize, room: Option<Location>) -> Self {
        Self {
            capacity,
            room,
            occupants: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        match (self.room, self.capacity) {
            (Some(location), _) => SpaceKind::Room(location),
            (None, 0) => SpaceKind::Void,
            (None, _) => SpaceKind::Hallway,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Room identity, if this space is a room.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.room
    }

    #[must_use]
    pub fn is_room(&self) -> bool {
        self.room.is_some()
    }

    /// Check if one more token fits.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.occupants.len() < self.capacity
    }

    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.occupants.contains(player)
    }

    /// Add a token. Callers check [`Space::can_add`] first.
    pub(crate) fn add(&mut self, player: PlayerId) {
        debug_assert!(self.can_add(), "space over capacity");
        self.occupants.push(player);
    }

    /// Remove a token. Returns true if it was present.
    pub(crate) fn remove(&mut self, player: &PlayerId) -> bool {
        if let Some(pos) = self.occupants.iter().position(|p| p == player) {
            self.occupants.remove(pos);
            true
        } else {
            false
        }
    }
}
