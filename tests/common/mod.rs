//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::time::Instant;

use clueless_engine::cards::{Card, Character, Deal, Guess, Location, Solution, Weapon, CARD_COUNT};
use clueless_engine::core::{PlayerId, TableConfig};
use clueless_engine::game::GameManager;
use clueless_engine::protocol::{events_for, Event, Outbound};

/// The solution most scenarios use.
pub const SOLUTION: Guess = Guess::new(Character::White, Weapon::LeadPipe, Location::Kitchen);

/// Player ids for the first `count` characters.
pub fn players(count: usize) -> Vec<PlayerId> {
    Character::ALL[..count]
        .iter()
        .map(|c| PlayerId::new(*c, c.name().to_lowercase()))
        .collect()
}

/// A valid deal with chosen cards pinned to chosen seats.
///
/// Pinned cards go first; the rest of the set fills the hands in card
/// order, keeping hand sizes within one of each other.
pub fn fixed_deal(seats: usize, solution: Guess, pinned: &[(usize, Card)]) -> Deal {
    let solution = Solution::new(solution);
    let mut rest = Card::all()
        .filter(|c| !solution.contains(*c) && !pinned.iter().any(|(_, p)| p == c));

    let dealt = CARD_COUNT - 3;
    let mut hands = vec![Vec::new(); seats];
    for (seat, card) in pinned {
        hands[*seat].push(*card);
    }
    for (i, hand) in hands.iter_mut().enumerate() {
        let size = dealt / seats + usize::from(i < dealt % seats);
        while hand.len() < size {
            match rest.next() {
                Some(card) => hand.push(card),
                None => break,
            }
        }
    }

    Deal { solution, hands }
}

/// A game with a fixed deal and no disprove timeout.
pub fn game(seats: usize, pinned: &[(usize, Card)]) -> GameManager {
    let config = TableConfig::new(0).with_disprove_timeout(None);
    GameManager::with_deal(config, players(seats), fixed_deal(seats, SOLUTION, pinned))
        .expect("fixture deal is valid")
}

/// Events one player would receive.
pub fn received<'a>(out: &'a [Outbound], player: &'a PlayerId) -> Vec<&'a Event> {
    events_for(out, player).collect()
}

pub fn now() -> Instant {
    Instant::now()
}
