//! The pending-disprove record and ring traversal.
//!
//! After a suggestion the seats to the suggester's left are asked in turn
//! order, one at a time, until one of them shows a card or the ring comes
//! back around to the suggester. Only one request is ever outstanding per
//! table.

use std::time::{Duration, Instant};

use crate::core::SeatIndex;
use crate::protocol::Suggestion;

/// The outstanding disprove request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDisprove {
    /// The suggestion being disproved.
    pub suggestion: Suggestion,

    /// Seat that made the suggestion.
    pub suggester: SeatIndex,

    /// Seat whose reply is awaited.
    pub asked: SeatIndex,

    /// When `asked` was sent its request.
    pub requested_at: Instant,
}

impl PendingDisprove {
    /// Open the ring at the first eligible seat after the suggester.
    ///
    /// Returns `None` if no other seat is eligible.
    pub fn start(
        suggestion: Suggestion,
        suggester: SeatIndex,
        seat_count: usize,
        eligible: impl Fn(SeatIndex) -> bool,
        now: Instant,
    ) -> Option<Self> {
        let asked = next_responder(suggester, suggester, seat_count, eligible)?;
        Some(Self {
            suggestion,
            suggester,
            asked,
            requested_at: now,
        })
    }

    /// Pass the request to the next eligible seat.
    ///
    /// Returns `false` once the ring is exhausted; the record then still
    /// points at the last seat asked.
    pub fn advance(
        &mut self,
        seat_count: usize,
        eligible: impl Fn(SeatIndex) -> bool,
        now: Instant,
    ) -> bool {
        match next_responder(self.suggester, self.asked, seat_count, eligible) {
            Some(seat) => {
                self.asked = seat;
                self.requested_at = now;
                true
            }
            None => false,
        }
    }

    /// Check whether the asked seat has run out of time.
    #[must_use]
    pub fn is_expired(&self, timeout: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.requested_at) >= timeout
    }
}

/// First eligible seat after `after`, stopping before `suggester`.
///
/// Visits at most `seat_count - 1` seats.
///
/// ```
/// use clueless_engine::core::SeatIndex;
/// use clueless_engine::disprove::next_responder;
///
/// let s = SeatIndex::new;
/// // Seat 1 is skipped, the ring stops before wrapping to seat 2
/// assert_eq!(next_responder(s(2), s(2), 4, |seat| seat != s(1)), Some(s(3)));
/// assert_eq!(next_responder(s(2), s(3), 4, |seat| seat != s(1)), Some(s(0)));
/// assert_eq!(next_responder(s(2), s(0), 4, |seat| seat != s(1)), None);
/// ```
#[must_use]
pub fn next_responder(
    suggester: SeatIndex,
    after: SeatIndex,
    seat_count: usize,
    eligible: impl Fn(SeatIndex) -> bool,
) -> Option<SeatIndex> {
    let mut seat = after;
    for _ in 0..seat_count {
        seat = seat.next(seat_count);
        if seat == suggester {
            return None;
        }
        if eligible(seat) {
            return Some(seat);
        }
    }
    None
}
