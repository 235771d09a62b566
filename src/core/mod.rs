//! Core engine types: players and seats, actions, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, ActionType};
pub use config::{TableConfig, DEFAULT_DISPROVE_TIMEOUT, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, MoveError, SuggestionStanding};
pub use player::{PlayerId, PlayerMap, PlayerState, SeatIndex};
pub use rng::GameRng;
