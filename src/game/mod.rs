//! Tables: lobby, game in progress, and the manager that keys them.
//!
//! ## Key Types
//!
//! - `GameManager`: authoritative state of one game
//! - `Lobby`: seats waiting for a game
//! - `Table`: a lobby that turns into a game
//! - `TableManager`: independent tables by id

pub mod lobby;
pub mod manager;
pub mod table;

pub use lobby::Lobby;
pub use manager::GameManager;
pub use table::{Table, TableId, TableManager, TablePhase};
