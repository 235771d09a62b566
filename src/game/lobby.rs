//! Pre-game lobby.
//!
//! Players join by nickname and are minted an identity bound to the first
//! free character. The game starts once every seat is ready and the seat
//! count is acceptable. Connection tracking is the transport's concern.

use tracing::info;

use crate::cards::Character;
use crate::core::{GameError, PlayerId, TableConfig};
use crate::protocol::{Event, LobbySeat, Outbound};

/// Seats waiting for a game.
#[derive(Clone, Debug, Default)]
pub struct Lobby {
    /// Seats in join order.
    seats: Vec<LobbySeat>,
}

impl Lobby {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seats(&self) -> &[LobbySeat] {
        &self.seats
    }

    /// Seated identities in join order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.seats.iter().map(|s| &s.player_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Check if the game may start.
    #[must_use]
    pub fn is_ready_to_start(&self, config: &TableConfig) -> bool {
        config.accepts_player_count(self.seats.len()) && self.seats.iter().all(|s| s.ready)
    }

    /// Seat a new player under the first free character.
    ///
    /// Returns the minted identity with the events to deliver: the
    /// identity to the joiner and the new roster to everyone.
    pub fn join(
        &mut self,
        nickname: String,
        config: &TableConfig,
    ) -> Result<(PlayerId, Vec<Outbound>), GameError> {
        if self.seats.len() >= config.max_players {
            return Err(GameError::LobbyFull);
        }
        if self.players().any(|p| p.nickname == nickname) {
            return Err(GameError::NicknameTaken(nickname));
        }
        let character = Character::ALL
            .into_iter()
            .find(|c| self.players().all(|p| p.character != *c))
            .ok_or(GameError::LobbyFull)?;

        let player_id = PlayerId::new(character, nickname);
        info!(player = %player_id, seats = self.seats.len() + 1, "joined lobby");
        self.seats.push(LobbySeat {
            player_id: player_id.clone(),
            ready: false,
        });

        let out = vec![
            Outbound::to_player(player_id.clone(), Event::AssignPlayerId(player_id.clone())),
            self.roster(),
        ];
        Ok((player_id, out))
    }

    /// Mark a seat ready.
    pub fn ready(&mut self, player: &PlayerId) -> Result<Vec<Outbound>, GameError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|s| s.player_id == *player)
            .ok_or_else(|| GameError::UnknownPlayer(player.clone()))?;
        seat.ready = true;
        Ok(vec![self.roster()])
    }

    /// Free a seat; its character becomes available again.
    pub fn leave(&mut self, player: &PlayerId) -> Result<Vec<Outbound>, GameError> {
        let index = self
            .seats
            .iter()
            .position(|s| s.player_id == *player)
            .ok_or_else(|| GameError::UnknownPlayer(player.clone()))?;
        self.seats.remove(index);
        info!(player = %player, "left lobby");
        Ok(vec![self.roster()])
    }

    fn roster(&self) -> Outbound {
        Outbound::broadcast(Event::UpdatePlayers(self.seats.clone()))
    }
}
