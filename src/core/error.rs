//! Error taxonomy.
//!
//! Every error is detected before any state is touched and handed back to
//! the caller that sent the offending command. None of them are fatal: the
//! table stays usable and the caller may retry with a legal command.

use thiserror::Error;

use super::action::ActionType;
use super::player::PlayerId;
use crate::board::{Coordinate, Direction};
use crate::cards::{Card, Location};

/// Why a token could not move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("space {0} is full")]
    SpaceFull(Coordinate),

    #[error("cannot move {direction:?} from {from}")]
    NoPassage { from: Coordinate, direction: Direction },

    #[error("{0} is off the board")]
    OutOfBounds(Coordinate),

    #[error("{to} is not reachable from {from} in one move")]
    NotAdjacent { from: Coordinate, to: Coordinate },

    #[error("no token for {0}")]
    UnknownToken(PlayerId),

    #[error("{0} has not been placed on the board")]
    Unplaced(PlayerId),

    #[error("{0} already has a token")]
    DuplicateToken(PlayerId),
}

/// Errors returned by table commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("{action} is not available right now")]
    InvalidActionForTurnState { action: ActionType },

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is not {0}'s turn")]
    NotCurrentTurnHolder(PlayerId),

    #[error("{player} cannot suggest the {named} while standing {standing}")]
    MalformedSuggestionTarget {
        player: PlayerId,
        named: Location,
        standing: SuggestionStanding,
    },

    #[error("waiting for {from} to answer a disprove request")]
    AwaitingDisprove { from: PlayerId },

    #[error("no disprove request is outstanding")]
    NoPendingDisprove,

    #[error("{player} cannot disprove with {card:?}: {reason}")]
    InvalidDisproof {
        player: PlayerId,
        card: Option<Card>,
        reason: &'static str,
    },

    #[error("the game is over")]
    GameOver,

    #[error("a game needs 2 to 6 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("more than one player is seated as {0}")]
    DuplicateCharacter(PlayerId),

    #[error("invalid deal: {0}")]
    InvalidDeal(&'static str),

    #[error("the lobby is full")]
    LobbyFull,

    #[error("nickname {0:?} is already taken")]
    NicknameTaken(String),

    #[error("the game has already started")]
    GameInProgress,

    #[error("the game has not started yet")]
    GameNotStarted,

    #[error("no table with id {0}")]
    UnknownTable(u64),
}

/// Where a player stood when a suggestion was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionStanding {
    Hallway,
    Room(Location),
}

impl std::fmt::Display for SuggestionStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStanding::Hallway => f.write_str("in a hallway"),
            SuggestionStanding::Room(room) => write!(f, "in the {room}"),
        }
    }
}
