//! Cards and guesses.
//!
//! A `Card` is a tagged value: its category is the variant, so equality by
//! category + value falls out of the derive.
//!
//! A `Guess` is the (character, weapon, location) triple named by
//! suggestions, accusations and the hidden solution.

use serde::{Deserialize, Serialize};

use super::definition::{Character, Location, Weapon};

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Character,
    Weapon,
    Location,
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Character(Character),
    Weapon(Weapon),
    Location(Location),
}

impl Card {
    /// The full 21-card set, characters then weapons then locations.
    pub fn all() -> impl Iterator<Item = Card> {
        Character::ALL
            .into_iter()
            .map(Card::Character)
            .chain(Weapon::ALL.into_iter().map(Card::Weapon))
            .chain(Location::ALL.into_iter().map(Card::Location))
    }

    /// Category of this card.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Card::Character(_) => CardCategory::Character,
            Card::Weapon(_) => CardCategory::Weapon,
            Card::Location(_) => CardCategory::Location,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Character(c) => write!(f, "{c}"),
            Card::Weapon(w) => write!(f, "{w}"),
            Card::Location(l) => write!(f, "{l}"),
        }
    }
}

/// A (character, weapon, location) triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    pub character: Character,
    pub weapon: Weapon,
    pub location: Location,
}

impl Guess {
    #[must_use]
    pub const fn new(character: Character, weapon: Weapon, location: Location) -> Self {
        Self {
            character,
            weapon,
            location,
        }
    }

    /// The three cards named by this guess.
    #[must_use]
    pub const fn cards(&self) -> [Card; 3] {
        [
            Card::Character(self.character),
            Card::Weapon(self.weapon),
            Card::Location(self.location),
        ]
    }

    /// Check whether `card` is one of the three named cards.
    #[must_use]
    pub fn names(&self, card: Card) -> bool {
        match card {
            Card::Character(c) => c == self.character,
            Card::Weapon(w) => w == self.weapon,
            Card::Location(l) => l == self.location,
        }
    }

    /// Cards in `hand` that would disprove this guess.
    pub fn matching<'a>(&'a self, hand: &'a [Card]) -> impl Iterator<Item = Card> + 'a {
        hand.iter().copied().filter(move |&card| self.names(card))
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.character, self.weapon, self.location)
    }
}
