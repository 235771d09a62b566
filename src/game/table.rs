//! Tables and the table manager.
//!
//! A `Table` starts as a lobby and turns into a game once every seat is
//! ready. `TableManager` keys any number of independent tables by id; no
//! state is shared between them.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::info;

use super::lobby::Lobby;
use super::manager::GameManager;
use crate::core::{GameError, TableConfig};
use crate::protocol::{Command, Outbound};

/// Identifier of a table within a `TableManager`.
pub type TableId = u64;

/// Phase of a table.
#[derive(Clone, Debug)]
pub enum TablePhase {
    Lobby(Lobby),
    Playing(GameManager),
}

/// One table: a lobby, then a game.
#[derive(Clone, Debug)]
pub struct Table {
    id: TableId,
    config: TableConfig,
    phase: TablePhase,
}

impl Table {
    #[must_use]
    pub fn new(id: TableId, config: TableConfig) -> Self {
        Self {
            id,
            config,
            phase: TablePhase::Lobby(Lobby::new()),
        }
    }

    #[must_use]
    pub fn id(&self) -> TableId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &TablePhase {
        &self.phase
    }

    /// The game, once started.
    #[must_use]
    pub fn game(&self) -> Option<&GameManager> {
        match &self.phase {
            TablePhase::Playing(game) => Some(game),
            TablePhase::Lobby(_) => None,
        }
    }

    #[must_use]
    pub fn lobby(&self) -> Option<&Lobby> {
        match &self.phase {
            TablePhase::Lobby(lobby) => Some(lobby),
            TablePhase::Playing(_) => None,
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Vec<Outbound>, GameError> {
        self.handle_at(command, Instant::now())
    }

    /// Route a command to the lobby or the game.
    pub fn handle_at(&mut self, command: Command, now: Instant) -> Result<Vec<Outbound>, GameError> {
        let lobby = match &mut self.phase {
            TablePhase::Playing(game) => return game.handle_at(command, now),
            TablePhase::Lobby(lobby) => lobby,
        };

        let mut out = match command {
            Command::JoinGame { nickname } => lobby.join(nickname, &self.config)?.1,
            Command::Ready { player_id } => lobby.ready(&player_id)?,
            Command::Move { .. }
            | Command::Suggest(_)
            | Command::Disprove { .. }
            | Command::Accuse(_)
            | Command::EndTurn { .. } => return Err(GameError::GameNotStarted),
        };

        if lobby.is_ready_to_start(&self.config) {
            let game = GameManager::new(self.config.clone(), lobby.players().cloned().collect())?;
            info!(table = self.id, "lobby complete");
            out.extend(game.begin());
            self.phase = TablePhase::Playing(game);
        }
        Ok(out)
    }

    /// Forward a disprove timeout check to the game.
    pub fn expire_pending_disprove(&mut self, now: Instant) -> Vec<Outbound> {
        match &mut self.phase {
            TablePhase::Playing(game) => game.expire_pending_disprove(now),
            TablePhase::Lobby(_) => Vec::new(),
        }
    }
}

/// Independent tables keyed by id.
///
/// ```
/// use clueless_engine::core::TableConfig;
/// use clueless_engine::game::TableManager;
/// use clueless_engine::protocol::Command;
///
/// let mut tables = TableManager::new();
/// let id = tables.create(TableConfig::new(1));
///
/// let out = tables.handle(id, Command::JoinGame { nickname: "sam".into() }).unwrap();
/// assert_eq!(out.len(), 2);
/// assert!(tables.handle(id + 1, Command::JoinGame { nickname: "pat".into() }).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableManager {
    tables: FxHashMap<TableId, Table>,
    next_id: TableId,
}

impl TableManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new table and return its id.
    pub fn create(&mut self, config: TableConfig) -> TableId {
        let id = self.next_id;
        self.next_id += 1;
        self.tables.insert(id, Table::new(id, config));
        info!(table = id, "table created");
        id
    }

    /// Close a table.
    pub fn remove(&mut self, id: TableId) -> Option<Table> {
        self.tables.remove(&id)
    }

    #[must_use]
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(&id)
    }

    pub fn table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn handle(&mut self, id: TableId, command: Command) -> Result<Vec<Outbound>, GameError> {
        self.handle_at(id, command, Instant::now())
    }

    pub fn handle_at(
        &mut self,
        id: TableId,
        command: Command,
        now: Instant,
    ) -> Result<Vec<Outbound>, GameError> {
        self.tables
            .get_mut(&id)
            .ok_or(GameError::UnknownTable(id))?
            .handle_at(command, now)
    }

    /// Expire stalled disprove requests on every table.
    ///
    /// Returns the events of each table that had one, by table id.
    pub fn expire_pending_disproves(&mut self, now: Instant) -> Vec<(TableId, Vec<Outbound>)> {
        let mut expired: Vec<_> = self
            .tables
            .iter_mut()
            .map(|(id, table)| (*id, table.expire_pending_disprove(now)))
            .filter(|(_, out)| !out.is_empty())
            .collect();
        expired.sort_by_key(|(id, _)| *id);
        expired
    }
}
