//! Board snapshots and read-only replicas.
//!
//! A `BoardSnapshot` carries the layout and every token position. Clients
//! rebuild a replica with [`Board::from_snapshot`] and keep it current by
//! feeding it broadcast events through [`Board::observe`]. Replicas never
//! feed anything back into the authoritative board.

use serde::{Deserialize, Serialize};

use super::grid::{Coordinate, GRID_SIZE};
use super::manager::{Board, PlayerToken};
use super::space::Space;
use crate::cards::Location;
use crate::core::MoveError;
use crate::protocol::Event;

/// One space as seen in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceView {
    pub coordinate: Coordinate,
    pub capacity: usize,
    pub room: Option<Location>,
}

/// Layout plus token positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Every space, row-major.
    pub spaces: Vec<SpaceView>,
    /// Every token, ordered by character.
    pub tokens: Vec<PlayerToken>,
}

impl Board {
    /// Capture the layout and every token position.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let spaces = self
            .spaces()
            .map(|(coordinate, space)| SpaceView {
                coordinate,
                capacity: space.capacity(),
                room: space.location(),
            })
            .collect();

        let mut tokens: Vec<_> = self.tokens().cloned().collect();
        tokens.sort_by(|a, b| a.player_id.cmp(&b.player_id));

        BoardSnapshot { spaces, tokens }
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Fails if the snapshot does not describe a full grid or places tokens
    /// illegally.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, MoveError> {
        let cells = GRID_SIZE as usize * GRID_SIZE as usize;
        let mut grid: Vec<Option<Space>> = vec![None; cells];

        for view in &snapshot.spaces {
            if !view.coordinate.in_bounds() {
                return Err(MoveError::OutOfBounds(view.coordinate));
            }
            grid[view.coordinate.index()] = Some(Space::with_capacity(view.capacity, view.room));
        }

        let grid = Coordinate::all()
            .map(|c| grid[c.index()].take().ok_or(MoveError::OutOfBounds(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut board = Board::with_grid(grid);
        for token in &snapshot.tokens {
            board.add_token(token.player_id.clone(), token.position)?;
        }
        Ok(board)
    }

    /// Apply a broadcast event to a replica.
    ///
    /// Only `Moved` and `Suggested` touch the board; everything else is
    /// ignored.
    pub fn observe(&mut self, event: &Event) -> Result<(), MoveError> {
        match event {
            Event::Moved { player_id, to } => {
                self.move_token(player_id, *to)?;
            }
            Event::Suggested(suggestion) => {
                let guess = suggestion.guess;
                if let Some(id) = self.id_of_character(guess.character).cloned() {
                    self.move_token(&id, guess.location.position())?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
