//! Disprove ring.
//!
//! ## Key Types
//!
//! - `PendingDisprove`: the single outstanding request of a table
//! - `next_responder`: ring traversal in seat order
//!
//! While a request is pending the table accepts nothing but the matching
//! reply (or a timeout expiry).

pub mod ring;

pub use ring::{next_responder, PendingDisprove};
