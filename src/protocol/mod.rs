//! Boundary vocabulary between a table and its transport.
//!
//! ## Key Types
//!
//! - `Command`: inbound, one per client message
//! - `Event`: outbound, what happened
//! - `Recipient` / `Outbound`: who receives each event
//!
//! Framing and serialization belong to the transport. Every type here
//! derives serde so any format can carry it.

pub mod command;
pub mod event;

pub use command::{Accusation, Command, Suggestion};
pub use event::{events_for, Disproof, Event, LobbySeat, Outbound, Recipient};
