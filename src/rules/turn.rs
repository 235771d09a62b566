//! Per-turn action log and the legal-action rules that read it.
//!
//! A `Turn` is created when a seat is granted the turn and replaced when
//! the next seat is. The log of actions taken so far is the only state the
//! legality check reads; board facts (is the token in a room, can it move)
//! are passed in by the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionType, SeatIndex};

/// Actions taken during one turn, in order.
pub type ActionLog = SmallVec<[ActionType; 4]>;

/// Actions a player may take next.
pub type AvailableActions = SmallVec<[ActionType; 4]>;

/// One seat's turn.
///
/// ```
/// use clueless_engine::core::{ActionType, SeatIndex};
/// use clueless_engine::rules::Turn;
///
/// let mut turn = Turn::new(0, SeatIndex::new(0), false);
/// assert!(turn.allows(ActionType::Move, false, true));
///
/// turn.record(ActionType::Move);
/// assert!(!turn.allows(ActionType::Move, false, true));
/// assert!(turn.allows(ActionType::Suggest, true, false));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Monotonic turn counter for the table.
    pub turn_id: u32,

    /// Seat holding the turn.
    pub seat: SeatIndex,

    actions: ActionLog,

    /// The seat's token was pulled into a room by someone else's suggestion
    /// since its previous turn.
    entered_by_suggestion: bool,
}

impl Turn {
    #[must_use]
    pub fn new(turn_id: u32, seat: SeatIndex, entered_by_suggestion: bool) -> Self {
        Self {
            turn_id,
            seat,
            actions: SmallVec::new(),
            entered_by_suggestion,
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[ActionType] {
        &self.actions
    }

    #[must_use]
    pub fn last_action(&self) -> Option<ActionType> {
        self.actions.last().copied()
    }

    /// True until the first action is recorded.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn entered_by_suggestion(&self) -> bool {
        self.entered_by_suggestion
    }

    /// Append an accepted action to the log.
    pub fn record(&mut self, action: ActionType) {
        self.actions.push(action);
    }

    /// Check whether `action` is legal next.
    ///
    /// `in_room` is whether the seat's token stands in a room and
    /// `can_move` whether the board offers it at least one move.
    #[must_use]
    pub fn allows(&self, action: ActionType, in_room: bool, can_move: bool) -> bool {
        match action {
            ActionType::Move => self.is_fresh() && can_move,
            ActionType::Suggest => {
                in_room
                    && (self.last_action() == Some(ActionType::Move)
                        || (self.entered_by_suggestion && self.is_fresh()))
            }
            ActionType::Accuse | ActionType::EndTurn => true,
            // Disproving is asked of other seats, never offered to the turn holder
            ActionType::Disprove => false,
        }
    }

    /// Every action legal next, in display order.
    #[must_use]
    pub fn available_actions(&self, in_room: bool, can_move: bool) -> AvailableActions {
        [
            ActionType::Move,
            ActionType::Suggest,
            ActionType::Accuse,
            ActionType::EndTurn,
        ]
        .into_iter()
        .filter(|action| self.allows(*action, in_room, can_move))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(entered_by_suggestion: bool) -> Turn {
        Turn::new(7, SeatIndex::new(1), entered_by_suggestion)
    }

    #[test]
    fn test_fresh_turn_in_hallway() {
        let turn = turn(false);
        assert_eq!(
            turn.available_actions(false, true).as_slice(),
            &[ActionType::Move, ActionType::Accuse, ActionType::EndTurn]
        );
    }

    #[test]
    fn test_blocked_player_only_accuses_or_ends() {
        let turn = turn(false);
        assert_eq!(
            turn.available_actions(false, false).as_slice(),
            &[ActionType::Accuse, ActionType::EndTurn]
        );
    }

    #[test]
    fn test_suggest_after_moving_into_room() {
        let mut turn = turn(false);
        turn.record(ActionType::Move);

        assert_eq!(
            turn.available_actions(true, true).as_slice(),
            &[ActionType::Suggest, ActionType::Accuse, ActionType::EndTurn]
        );
    }

    #[test]
    fn test_no_suggest_after_moving_into_hallway() {
        let mut turn = turn(false);
        turn.record(ActionType::Move);
        assert!(!turn.allows(ActionType::Suggest, false, true));
    }

    #[test]
    fn test_staying_in_room_cannot_suggest() {
        let turn = turn(false);
        assert!(!turn.allows(ActionType::Suggest, true, true));
    }

    #[test]
    fn test_entered_by_suggestion_may_suggest_first() {
        let mut turn = turn(true);
        assert!(turn.entered_by_suggestion());
        assert!(turn.allows(ActionType::Suggest, true, true));
        assert!(turn.allows(ActionType::Move, true, true));

        turn.record(ActionType::Suggest);
        assert!(!turn.allows(ActionType::Suggest, true, true));
        assert!(!turn.allows(ActionType::Move, true, true));
    }

    #[test]
    fn test_one_suggestion_per_turn() {
        let mut turn = turn(false);
        turn.record(ActionType::Move);
        turn.record(ActionType::Suggest);

        assert_eq!(turn.last_action(), Some(ActionType::Suggest));
        assert!(!turn.allows(ActionType::Suggest, true, true));
        assert_eq!(turn.actions(), &[ActionType::Move, ActionType::Suggest]);
    }

    #[test]
    fn test_disprove_never_offered() {
        assert!(!turn(true).allows(ActionType::Disprove, true, true));
    }
}
