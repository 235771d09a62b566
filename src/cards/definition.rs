//! The three closed card value sets: characters, weapons and locations.
//!
//! Every value carries its fixed board data:
//! - `Location`: the coordinate of its room
//! - `Character`: its starting coordinate and its seat-order ordinal
//!
//! Seat order follows the declaration order of `Character`.

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;

/// One of the nine rooms on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Study,
    Hall,
    Lounge,
    Library,
    Billiard,
    Dining,
    Conservatory,
    Ballroom,
    Kitchen,
}

impl Location {
    /// All locations in declaration order.
    pub const ALL: [Location; 9] = [
        Location::Study,
        Location::Hall,
        Location::Lounge,
        Location::Library,
        Location::Billiard,
        Location::Dining,
        Location::Conservatory,
        Location::Ballroom,
        Location::Kitchen,
    ];

    /// Grid coordinate of this room.
    #[must_use]
    pub const fn position(self) -> Coordinate {
        match self {
            Location::Study => Coordinate::new(0, 0),
            Location::Hall => Coordinate::new(0, 2),
            Location::Lounge => Coordinate::new(0, 4),
            Location::Library => Coordinate::new(2, 0),
            Location::Billiard => Coordinate::new(2, 2),
            Location::Dining => Coordinate::new(2, 4),
            Location::Conservatory => Coordinate::new(4, 0),
            Location::Ballroom => Coordinate::new(4, 2),
            Location::Kitchen => Coordinate::new(4, 4),
        }
    }

    /// Room at a grid coordinate, if any.
    #[must_use]
    pub fn at(position: Coordinate) -> Option<Location> {
        Location::ALL.into_iter().find(|l| l.position() == position)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Location::Study => "Study",
            Location::Hall => "Hall",
            Location::Lounge => "Lounge",
            Location::Library => "Library",
            Location::Billiard => "Billiard",
            Location::Dining => "Dining",
            Location::Conservatory => "Conservatory",
            Location::Ballroom => "Ballroom",
            Location::Kitchen => "Kitchen",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six weapons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weapon {
    Rope,
    Dagger,
    Wrench,
    Revolver,
    Candlestick,
    LeadPipe,
}

impl Weapon {
    /// All weapons in declaration order.
    pub const ALL: [Weapon; 6] = [
        Weapon::Rope,
        Weapon::Dagger,
        Weapon::Wrench,
        Weapon::Revolver,
        Weapon::Candlestick,
        Weapon::LeadPipe,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Weapon::Rope => "Rope",
            Weapon::Dagger => "Dagger",
            Weapon::Wrench => "Wrench",
            Weapon::Revolver => "Revolver",
            Weapon::Candlestick => "Candlestick",
            Weapon::LeadPipe => "Lead Pipe",
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six characters.
///
/// Players are seated in declaration order, which is also the order in
/// which the lobby hands out characters to joining players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Character {
    Scarlet,
    Plum,
    Mustard,
    White,
    Green,
    Peacock,
}

impl Character {
    /// All characters in seat order.
    pub const ALL: [Character; 6] = [
        Character::Scarlet,
        Character::Plum,
        Character::Mustard,
        Character::White,
        Character::Green,
        Character::Peacock,
    ];

    /// Hallway this character's token starts on.
    #[must_use]
    pub const fn starting_position(self) -> Coordinate {
        match self {
            Character::Scarlet => Coordinate::new(0, 3),
            Character::Plum => Coordinate::new(1, 0),
            Character::Mustard => Coordinate::new(1, 4),
            Character::White => Coordinate::new(4, 3),
            Character::Green => Coordinate::new(4, 1),
            Character::Peacock => Coordinate::new(3, 0),
        }
    }

    /// Seat-order index (0-based).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::Scarlet => "Scarlet",
            Character::Plum => "Plum",
            Character::Mustard => "Mustard",
            Character::White => "White",
            Character::Green => "Green",
            Character::Peacock => "Peacock",
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
