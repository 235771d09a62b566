//! Action kinds and the per-table action history.
//!
//! `ActionType` is the closed set of things a player can do. The legality
//! check offers a subset of them each time it is asked; accepted actions are
//! logged on the current turn and appended to the table's history as an
//! `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Kind of player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Move,
    Suggest,
    /// Reply to a disprove request. Never offered on a turn.
    Disprove,
    Accuse,
    EndTurn,
}

impl ActionType {
    /// Check if the player chooses this action on their own turn.
    #[must_use]
    pub const fn is_user_initiated(self) -> bool {
        !matches!(self, ActionType::Disprove)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionType::Move => "move",
            ActionType::Suggest => "suggest",
            ActionType::Disprove => "disprove",
            ActionType::Accuse => "accuse",
            ActionType::EndTurn => "end turn",
        };
        f.write_str(name)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The kind of action taken.
    pub action: ActionType,

    /// Turn during which the action was taken.
    pub turn_id: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: ActionType, turn_id: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn_id,
            sequence,
        }
    }
}
