//! Board: the grid of spaces and the tokens standing on them.
//!
//! The `Board` is the only owner of tokens. It answers movement questions
//! (which directions are open, where they lead) and performs moves as a
//! single remove-then-add under `&mut self`, so a token is never observable
//! in two spaces.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Coordinate, Direction};
use super::space::Space;
use crate::cards::{Character, Location};
use crate::core::{MoveError, PlayerId};

/// A player's marker on the board, distinct from the player's identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerToken {
    pub player_id: PlayerId,
    /// `None` until the token is first placed.
    pub position: Option<Coordinate>,
}

/// Open moves from a token's current space.
pub type MovementOptions = SmallVec<[(Direction, Coordinate); 5]>;

/// The 5×5 board.
///
/// ## Usage
///
/// ```
/// use clueless_engine::board::{Board, Coordinate, Direction};
/// use clueless_engine::cards::Character;
/// use clueless_engine::core::PlayerId;
///
/// let plum = PlayerId::new(Character::Plum, "pat");
/// let mut board = Board::for_players(&[plum.clone()]);
///
/// // Plum starts in the hallway below the Study
/// assert_eq!(board.position_of(&plum), Some(Coordinate::new(1, 0)));
///
/// board.move_in_direction(&plum, Direction::Up).unwrap();
/// assert!(board.is_in_room(&plum));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    /// Row-major grid of spaces.
    grid: Vec<Space>,

    /// Tokens by identity.
    tokens: FxHashMap<PlayerId, PlayerToken>,
}

impl Board {
    /// Create an empty board with the standard layout.
    ///
    /// Even rows alternate Room/Hallway, odd rows alternate Hallway/Void.
    #[must_use]
    pub fn empty() -> Self {
        let grid = Coordinate::all()
            .map(|c| match (c.row % 2, c.col % 2) {
                (0, 0) => Location::at(c).map_or_else(Space::void, Space::room),
                (1, 1) => Space::void(),
                _ => Space::hallway(),
            })
            .collect();

        Self::with_grid(grid)
    }

    /// Create a tokenless board over a row-major grid.
    pub(crate) fn with_grid(grid: Vec<Space>) -> Self {
        Self {
            grid,
            tokens: FxHashMap::default(),
        }
    }

    /// Create a board with one token per character.
    ///
    /// Seated players keep their identities; every other character gets a
    /// placeholder identity. Tokens start on their character's hallway.
    #[must_use]
    pub fn for_players(seated: &[PlayerId]) -> Self {
        let mut board = Self::empty();

        for character in Character::ALL {
            let player_id = seated
                .iter()
                .find(|p| p.character == character)
                .cloned()
                .unwrap_or_else(|| PlayerId::placeholder(character));

            let placed = board.add_token(player_id, Some(character.starting_position()));
            debug_assert!(placed.is_ok(), "starting hallways must be distinct: {placed:?}");
        }

        board
    }

    /// Add a token, optionally placing it.
    ///
    /// Fails without adding anything if the identity already has a token
    /// or the placement is illegal.
    pub fn add_token(
        &mut self,
        player_id: PlayerId,
        position: Option<Coordinate>,
    ) -> Result<(), MoveError> {
        if self.tokens.contains_key(&player_id) {
            return Err(MoveError::DuplicateToken(player_id));
        }
        if let Some(to) = position {
            let space = self.space(to).ok_or(MoveError::OutOfBounds(to))?;
            if !space.can_add() {
                return Err(MoveError::SpaceFull(to));
            }
        }

        self.tokens.insert(
            player_id.clone(),
            PlayerToken {
                player_id: player_id.clone(),
                position: None,
            },
        );

        if let Some(to) = position {
            self.move_token(&player_id, to)?;
        }
        Ok(())
    }

    // === Queries ===

    /// Get the space at a coordinate.
    #[must_use]
    pub fn space(&self, at: Coordinate) -> Option<&Space> {
        if at.in_bounds() {
            self.grid.get(at.index())
        } else {
            None
        }
    }

    /// Iterate over every space in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = (Coordinate, &Space)> {
        Coordinate::all().zip(self.grid.iter())
    }

    /// Tokens standing at a coordinate.
    #[must_use]
    pub fn occupants(&self, at: Coordinate) -> &[PlayerId] {
        self.space(at).map_or(&[], Space::occupants)
    }

    #[must_use]
    pub fn token(&self, player: &PlayerId) -> Option<&PlayerToken> {
        self.tokens.get(player)
    }

    /// Iterate over all tokens (unordered).
    pub fn tokens(&self) -> impl Iterator<Item = &PlayerToken> {
        self.tokens.values()
    }

    #[must_use]
    pub fn position_of(&self, player: &PlayerId) -> Option<Coordinate> {
        self.tokens.get(player)?.position
    }

    /// The space a player's token stands on.
    #[must_use]
    pub fn space_of(&self, player: &PlayerId) -> Option<&Space> {
        self.space(self.position_of(player)?)
    }

    /// The room a player's token stands in.
    #[must_use]
    pub fn room_of(&self, player: &PlayerId) -> Option<Location> {
        self.space_of(player)?.location()
    }

    #[must_use]
    pub fn is_in_room(&self, player: &PlayerId) -> bool {
        self.room_of(player).is_some()
    }

    /// Identity bound to a character's token.
    #[must_use]
    pub fn id_of_character(&self, character: Character) -> Option<&PlayerId> {
        self.tokens.keys().find(|id| id.character == character)
    }

    // === Movement ===

    /// Resolve where `direction` leads from a player's current space.
    pub fn resolve(&self, player: &PlayerId, direction: Direction) -> Result<Coordinate, MoveError> {
        let from = self
            .tokens
            .get(player)
            .ok_or_else(|| MoveError::UnknownToken(player.clone()))?
            .position;

        let from = from.ok_or_else(|| MoveError::Unplaced(player.clone()))?;
        from.step(direction)
            .ok_or(MoveError::NoPassage { from, direction })
    }

    /// Directions a player can take right now, with their targets.
    ///
    /// A direction is open if it resolves from the current coordinate and
    /// the target has spare capacity. Unknown or unplaced tokens have none.
    #[must_use]
    pub fn movement_options(&self, player: &PlayerId) -> MovementOptions {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let to = self.resolve(player, direction).ok()?;
                self.space(to)?.can_add().then_some((direction, to))
            })
            .collect()
    }

    /// Move a token to `to`.
    ///
    /// Rejects, leaving the board untouched, when the target is off the
    /// board or full. Moving onto the token's own space is a no-op.
    /// Returns the previous position.
    pub fn move_token(
        &mut self,
        player: &PlayerId,
        to: Coordinate,
    ) -> Result<Option<Coordinate>, MoveError> {
        let from = self
            .tokens
            .get(player)
            .ok_or_else(|| MoveError::UnknownToken(player.clone()))?
            .position;

        if from == Some(to) {
            return Ok(from);
        }

        let target = self.space(to).ok_or(MoveError::OutOfBounds(to))?;
        if !target.can_add() {
            return Err(MoveError::SpaceFull(to));
        }

        if let Some(from) = from {
            self.grid[from.index()].remove(player);
        }
        self.grid[to.index()].add(player.clone());
        if let Some(token) = self.tokens.get_mut(player) {
            token.position = Some(to);
        }

        Ok(from)
    }

    /// Resolve a direction and move there.
    pub fn move_in_direction(
        &mut self,
        player: &PlayerId,
        direction: Direction,
    ) -> Result<Coordinate, MoveError> {
        let to = self.resolve(player, direction)?;
        self.move_token(player, to)?;
        Ok(to)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::for_players(&[])
    }
}
