//! # clueless-engine
//!
//! Authoritative rules engine for a turn-based deduction board game for 2-6
//! players: a 5×5 board of rooms and hallways, a hidden solution, and a
//! ring of players disproving each other's suggestions.
//!
//! ## Design Principles
//!
//! 1. **Per-Table Aggregate**: Each table owns its board, seats, solution
//!    and turn. Nothing is global; tables never share state.
//!
//! 2. **Commands In, Events Out**: A table consumes one `Command` at a time
//!    and returns the `Outbound` events to deliver. It never performs I/O.
//!
//! 3. **Reject Before Mutate**: Every illegal command is detected before any
//!    state changes and returned to its sender as a `GameError`.
//!
//! ## Architecture
//!
//! - **Explicit Disprove State**: The ring is a single pending record
//!   resumed by the matching reply, not a blocking wait.
//!
//! - **Value Identity**: Players are identified by `PlayerId` values that
//!   key maps directly.
//!
//! - **Persistent History**: Accepted actions go into an `im::Vector`, so a
//!   history snapshot is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Players and seats, actions, RNG, configuration, errors
//! - `cards`: Cards, guesses, the solution and the deal
//! - `board`: Grid, spaces, tokens, movement, snapshots
//! - `protocol`: Commands, events and their recipients
//! - `rules`: Per-turn legality and game outcome
//! - `disprove`: The disprove ring
//! - `game`: Game manager, lobby, tables

pub mod core;
pub mod cards;
pub mod board;
pub mod protocol;
pub mod rules;
pub mod disprove;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ActionType, GameError, GameRng, MoveError, PlayerId, PlayerMap, PlayerState,
    SeatIndex, TableConfig,
};

pub use crate::cards::{Card, Character, Deal, Guess, Location, Solution, Weapon};

pub use crate::board::{Board, BoardSnapshot, Coordinate, Direction, Space, SpaceKind};

pub use crate::protocol::{Accusation, Command, Disproof, Event, Outbound, Recipient, Suggestion};

pub use crate::rules::{GameResult, Turn};

pub use crate::disprove::PendingDisprove;

pub use crate::game::{GameManager, Lobby, Table, TableManager};
