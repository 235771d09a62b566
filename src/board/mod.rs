//! The 5×5 board.
//!
//! ## Layout
//!
//! ```text
//!        col 0         col 1     col 2       col 3     col 4
//! row 0  Study         hallway   Hall        hallway   Lounge
//! row 1  hallway       void      hallway     void      hallway
//! row 2  Library       hallway   Billiard    hallway   Dining
//! row 3  hallway       void      hallway     void      hallway
//! row 4  Conservatory  hallway   Ballroom    hallway   Kitchen
//! ```
//!
//! Opposite corners are joined by secret passageways.

pub mod grid;
pub mod manager;
pub mod snapshot;
pub mod space;

pub use grid::{Coordinate, Direction, GRID_SIZE};
pub use manager::{Board, MovementOptions, PlayerToken};
pub use snapshot::{BoardSnapshot, SpaceView};
pub use space::{Space, SpaceKind, HALLWAY_CAPACITY, ROOM_CAPACITY};
