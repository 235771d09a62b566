//! Solution selection and dealing.
//!
//! A `Deal` is a plain value: the hidden solution plus one hand per seat.
//! Live games draw one with [`Deal::random`]; fixtures and replays build
//! one by hand and pass it through [`Deal::validate`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Guess};
use super::definition::{Character, Location, Weapon};
use crate::core::{GameError, GameRng};

/// Total number of cards in the set.
pub const CARD_COUNT: usize = Character::ALL.len() + Weapon::ALL.len() + Location::ALL.len();

/// The hidden answer: one card per category, never dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution(Guess);

impl Solution {
    #[must_use]
    pub const fn new(guess: Guess) -> Self {
        Self(guess)
    }

    #[must_use]
    pub const fn guess(&self) -> Guess {
        self.0
    }

    /// Check if `card` is one of the three solution cards.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.0.names(card)
    }

    /// Check if a guess names exactly the solution.
    #[must_use]
    pub fn matches(&self, guess: &Guess) -> bool {
        self.0 == *guess
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A solution and the hands dealt around the table, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub solution: Solution,
    pub hands: Vec<Vec<Card>>,
}

impl Deal {
    /// Pick a solution and deal the rest round-robin from seat 0.
    ///
    /// The solution and the shuffle draw from separate streams of `rng`, so
    /// the same seed always yields the same deal.
    ///
    /// ```
    /// use clueless_engine::cards::Deal;
    /// use clueless_engine::core::GameRng;
    ///
    /// let deal = Deal::random(4, &GameRng::new(42));
    /// let sizes: Vec<_> = deal.hands.iter().map(Vec::len).collect();
    /// assert_eq!(sizes, vec![5, 5, 4, 4]);
    /// ```
    #[must_use]
    pub fn random(seat_count: usize, rng: &GameRng) -> Self {
        let mut pick = rng.for_context("solution");
        let mut characters = Character::ALL;
        let mut weapons = Weapon::ALL;
        let mut locations = Location::ALL;
        pick.shuffle(&mut characters);
        pick.shuffle(&mut weapons);
        pick.shuffle(&mut locations);
        let solution = Solution::new(Guess::new(characters[0], weapons[0], locations[0]));

        let mut deck: Vec<Card> = Card::all().filter(|c| !solution.contains(*c)).collect();
        rng.for_context("shuffle").shuffle(&mut deck);

        let mut hands = vec![Vec::new(); seat_count];
        if seat_count > 0 {
            for (i, card) in deck.into_iter().enumerate() {
                hands[i % seat_count].push(card);
            }
        }

        Self { solution, hands }
    }

    /// Check that this deal is a legal partition of the card set.
    pub fn validate(&self, seat_count: usize) -> Result<(), GameError> {
        if self.hands.len() != seat_count {
            return Err(GameError::InvalidDeal("one hand per seat is required"));
        }

        let mut seen = FxHashSet::default();
        for card in self.hands.iter().flatten() {
            if self.solution.contains(*card) {
                return Err(GameError::InvalidDeal("a solution card was dealt"));
            }
            if !seen.insert(*card) {
                return Err(GameError::InvalidDeal("a card was dealt twice"));
            }
        }
        if seen.len() + 3 != CARD_COUNT {
            return Err(GameError::InvalidDeal("not every card was dealt"));
        }

        let largest = self.hands.iter().map(Vec::len).max().unwrap_or(0);
        let smallest = self.hands.iter().map(Vec::len).min().unwrap_or(0);
        if largest - smallest > 1 {
            return Err(GameError::InvalidDeal("hand sizes differ by more than one"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_count() {
        assert_eq!(CARD_COUNT, 21);
    }

    #[test]
    fn test_random_deal_is_valid() {
        for seats in 2..=6 {
            let deal = Deal::random(seats, &GameRng::new(seats as u64));
            assert!(deal.validate(seats).is_ok(), "{seats} seats");
            let dealt: usize = deal.hands.iter().map(Vec::len).sum();
            assert_eq!(dealt + 3, CARD_COUNT);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Deal::random(3, &GameRng::new(99));
        let b = Deal::random(3, &GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_solution_matches() {
        let guess = Guess::new(Character::Plum, Weapon::Rope, Location::Study);
        let solution = Solution::new(guess);

        assert!(solution.matches(&guess));
        assert!(!solution.matches(&Guess::new(Character::Plum, Weapon::Rope, Location::Hall)));
        assert!(solution.contains(Card::Weapon(Weapon::Rope)));
        assert!(!solution.contains(Card::Weapon(Weapon::Dagger)));
    }

    #[test]
    fn test_validate_rejects_dealt_solution_card() {
        let mut deal = Deal::random(2, &GameRng::new(1));
        let leaked = deal.solution.guess().cards()[0];
        deal.hands[0].push(leaked);

        assert_eq!(
            deal.validate(2),
            Err(GameError::InvalidDeal("a solution card was dealt"))
        );
    }

    #[test]
    fn test_validate_rejects_uneven_hands() {
        let mut deal = Deal::random(3, &GameRng::new(5));
        let moved = deal.hands[1].pop().unwrap();
        deal.hands[0].push(moved);

        assert_eq!(
            deal.validate(3),
            Err(GameError::InvalidDeal("hand sizes differ by more than one"))
        );
    }

    #[test]
    fn test_validate_rejects_missing_cards() {
        let mut deal = Deal::random(2, &GameRng::new(8));
        deal.hands[0].pop();

        assert!(deal.validate(2).is_err());
        assert!(deal.validate(3).is_err());
    }
}
