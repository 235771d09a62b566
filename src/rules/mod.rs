//! Turn rules and game outcome.
//!
//! The legality check is a pure function of the turn's action log and two
//! board facts. `GameManager` supplies the facts and enforces the answer.

pub mod result;
pub mod turn;

pub use result::GameResult;
pub use turn::{ActionLog, AvailableActions, Turn};
