//! Card system: values, guesses, the solution and the deal.
//!
//! ## Key Types
//!
//! - `Character`, `Weapon`, `Location`: the three card categories
//! - `Card`: one card of any category
//! - `Guess`: a (character, weapon, location) triple
//! - `Solution`: the hidden guess, never dealt
//! - `Deal`: a solution plus one hand per seat
//!
//! Cards are plain `Copy` values. There is no card registry: the set is
//! closed and known at compile time.

pub mod card;
pub mod deck;
pub mod definition;

pub use card::{Card, CardCategory, Guess};
pub use deck::{Deal, Solution, CARD_COUNT};
pub use definition::{Character, Location, Weapon};
