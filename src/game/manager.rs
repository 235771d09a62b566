//! Per-table game state and command handling.
//!
//! `GameManager` owns the board, the seats, the solution and the turn. It
//! applies commands one at a time through `&mut self` and answers each
//! with the events to deliver. Every rejection is detected before any state
//! changes.

use std::time::Instant;

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::board::{Board, Coordinate, Direction, MovementOptions};
use crate::cards::{Card, Deal, Solution};
use crate::core::{
    ActionRecord, ActionType, GameError, GameRng, MoveError, PlayerId, PlayerMap, PlayerState,
    SeatIndex, SuggestionStanding, TableConfig,
};
use crate::disprove::PendingDisprove;
use crate::protocol::{Accusation, Command, Disproof, Event, Outbound, Recipient, Suggestion};
use crate::rules::{AvailableActions, GameResult, Turn};

/// Authoritative state of one game in progress.
///
/// ## Usage
///
/// ```
/// use clueless_engine::cards::Character;
/// use clueless_engine::core::{PlayerId, TableConfig};
/// use clueless_engine::game::GameManager;
/// use clueless_engine::protocol::Command;
///
/// let scarlet = PlayerId::new(Character::Scarlet, "sam");
/// let plum = PlayerId::new(Character::Plum, "pat");
/// let mut game = GameManager::new(TableConfig::new(42), vec![plum.clone(), scarlet.clone()]).unwrap();
///
/// // Seats follow character order, so Scarlet opens
/// let _opening = game.begin();
/// assert_eq!(game.current_player(), &scarlet);
///
/// game.handle(Command::EndTurn { player_id: scarlet }).unwrap();
/// assert_eq!(game.current_player(), &plum);
/// ```
#[derive(Clone, Debug)]
pub struct GameManager {
    config: TableConfig,

    /// Seated players in turn order.
    players: PlayerMap<PlayerState>,

    /// Seat lookup by identity.
    seats: FxHashMap<PlayerId, SeatIndex>,

    board: Board,

    solution: Solution,

    /// Monotonic turn counter; the current seat is `turn_index % seats`.
    turn_index: u32,

    turn: Turn,

    pending: Option<PendingDisprove>,

    result: Option<GameResult>,

    history: Vector<ActionRecord>,
}

impl GameManager {
    /// Seat `players` and deal from the configured seed.
    pub fn new(config: TableConfig, players: Vec<PlayerId>) -> Result<Self, GameError> {
        let deal = Deal::random(players.len(), &GameRng::new(config.seed));
        Self::with_deal(config, players, deal)
    }

    /// Seat `players` with a prepared deal.
    ///
    /// Players are seated in character order whatever order they are
    /// given in; `deal.hands[i]` goes to seat `i`.
    pub fn with_deal(
        config: TableConfig,
        mut players: Vec<PlayerId>,
        deal: Deal,
    ) -> Result<Self, GameError> {
        if !config.accepts_player_count(players.len()) {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }

        players.sort_by_key(|p| p.character.ordinal());
        if let Some(pair) = players.windows(2).find(|w| w[0].character == w[1].character) {
            return Err(GameError::DuplicateCharacter(pair[1].clone()));
        }

        deal.validate(players.len())?;

        let board = Board::for_players(&players);

        let mut seats = FxHashMap::default();
        let states = players
            .into_iter()
            .zip(deal.hands)
            .enumerate()
            .map(|(i, (player_id, hand))| {
                let seat = SeatIndex::new(i as u8);
                seats.insert(player_id.clone(), seat);
                PlayerState::new(player_id, seat, hand)
            })
            .collect();

        Ok(Self {
            config,
            players: PlayerMap::from_vec(states),
            seats,
            board,
            solution: deal.solution,
            turn_index: 0,
            turn: Turn::new(0, SeatIndex::new(0), false),
            pending: None,
            result: None,
            history: Vector::new(),
        })
    }

    /// Opening events: the board, each hand, and the first turn.
    #[must_use]
    pub fn begin(&self) -> Vec<Outbound> {
        info!(
            seats = self.players.seat_count(),
            seed = self.config.seed,
            "game started"
        );

        let mut out = vec![Outbound::broadcast(Event::StartGame(self.board.snapshot()))];
        out.extend(self.players.values().map(|p| {
            Outbound::to_player(p.player_id.clone(), Event::DealCards(p.hand.clone()))
        }));
        out.push(self.your_turn());
        out
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: &PlayerId) -> Option<&PlayerState> {
        self.seats.get(player).map(|seat| &self.players[*seat])
    }

    #[must_use]
    pub fn seat_of(&self, player: &PlayerId) -> Option<SeatIndex> {
        self.seats.get(player).copied()
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    #[must_use]
    pub fn current_seat(&self) -> SeatIndex {
        self.turn.seat
    }

    #[must_use]
    pub fn current_player(&self) -> &PlayerId {
        &self.players[self.turn.seat].player_id
    }

    #[must_use]
    pub fn pending_disprove(&self) -> Option<&PendingDisprove> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Actions `player` may take right now.
    ///
    /// Empty unless `player` holds the turn and no disprove is pending.
    #[must_use]
    pub fn available_actions(&self, player: &PlayerId) -> AvailableActions {
        if self.result.is_some() || self.pending.is_some() || self.current_player() != player {
            return AvailableActions::new();
        }
        let can_move = !self.board.movement_options(player).is_empty();
        self.turn
            .available_actions(self.board.is_in_room(player), can_move)
    }

    /// Moves `player`'s token could make right now.
    #[must_use]
    pub fn movement_options(&self, player: &PlayerId) -> MovementOptions {
        self.board.movement_options(player)
    }

    // === Commands ===

    /// Apply one command, timestamping any disprove request with the
    /// current time.
    pub fn handle(&mut self, command: Command) -> Result<Vec<Outbound>, GameError> {
        self.handle_at(command, Instant::now())
    }

    /// Apply one command at `now`.
    pub fn handle_at(&mut self, command: Command, now: Instant) -> Result<Vec<Outbound>, GameError> {
        let sender = command.sender().cloned();
        let outcome = self.dispatch(command, now);
        if let Err(err) = &outcome {
            warn!(sender = ?sender, %err, "command rejected");
        }
        outcome
    }

    fn dispatch(&mut self, command: Command, now: Instant) -> Result<Vec<Outbound>, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        match command {
            Command::JoinGame { .. } | Command::Ready { .. } => Err(GameError::GameInProgress),
            Command::Move { player_id, to } => self.apply_move(&player_id, to),
            Command::Suggest(suggestion) => self.apply_suggest(suggestion, now),
            Command::Disprove {
                player_id,
                card,
                suggestion,
            } => self.apply_disprove(&player_id, card, &suggestion, now),
            Command::Accuse(accusation) => self.apply_accuse(accusation),
            Command::EndTurn { player_id } => self.apply_end_turn(&player_id),
        }
    }

    /// Force a "no card" reply if the asked seat has run out of time.
    ///
    /// Returns the resulting events, or nothing if no request has expired.
    pub fn expire_pending_disprove(&mut self, now: Instant) -> Vec<Outbound> {
        let Some(timeout) = self.config.disprove_timeout else {
            return Vec::new();
        };
        let stalled = match &self.pending {
            Some(pending) if self.result.is_none() && pending.is_expired(timeout, now) => {
                self.players[pending.asked].player_id.clone()
            }
            _ => return Vec::new(),
        };

        warn!(player = %stalled, ?timeout, "disprove timed out, forcing no card");
        self.resolve_reply(None, now)
    }

    fn apply_move(&mut self, player: &PlayerId, to: Coordinate) -> Result<Vec<Outbound>, GameError> {
        self.check_turn_action(player, ActionType::Move)?;

        let options = self.board.movement_options(player);
        if !options.iter().any(|(_, target)| *target == to) {
            let from = self
                .board
                .position_of(player)
                .ok_or_else(|| MoveError::Unplaced(player.clone()))?;
            let adjacent = Direction::ALL.into_iter().any(|d| from.step(d) == Some(to));
            let err = if adjacent {
                MoveError::SpaceFull(to)
            } else {
                MoveError::NotAdjacent { from, to }
            };
            return Err(err.into());
        }

        let from = self.board.move_token(player, to)?;
        self.record(player, ActionType::Move);
        debug!(player = %player, ?from, %to, "moved");

        Ok(vec![Outbound::broadcast(Event::Moved {
            player_id: player.clone(),
            to,
        })])
    }

    fn apply_suggest(&mut self, suggestion: Suggestion, now: Instant) -> Result<Vec<Outbound>, GameError> {
        let player = suggestion.player_id.clone();
        let seat = self.check_turn_holder(&player)?;

        let guess = suggestion.guess;
        match self.board.room_of(&player) {
            Some(room) if room == guess.location => {}
            standing => {
                return Err(GameError::MalformedSuggestionTarget {
                    player,
                    named: guess.location,
                    standing: standing.map_or(SuggestionStanding::Hallway, SuggestionStanding::Room),
                });
            }
        }
        self.check_allowed(&player, ActionType::Suggest)?;

        info!(player = %player, %guess, "suggested");
        let mut out = vec![Outbound::broadcast(Event::Suggested(suggestion.clone()))];

        // Pull the named character's token into the room
        if let Some(named) = self.board.id_of_character(guess.character).cloned() {
            let target = guess.location.position();
            if self.board.position_of(&named) != Some(target) {
                self.board.move_token(&named, target)?;
                if let Some(named_seat) = self.seat_of(&named).filter(|s| *s != seat) {
                    self.players[named_seat].moved_by_suggestion = true;
                }
                debug!(player = %named, room = %guess.location, "moved by suggestion");
            }
        }
        self.record(&player, ActionType::Suggest);

        let pending = PendingDisprove::start(
            suggestion.clone(),
            seat,
            self.players.seat_count(),
            self.ring_eligibility(),
            now,
        );
        match pending {
            Some(pending) => {
                out.push(self.request_disprove(&pending));
                self.pending = Some(pending);
            }
            None => out.push(self.nobody_disproved(suggestion)),
        }
        Ok(out)
    }

    fn apply_disprove(
        &mut self,
        player: &PlayerId,
        card: Option<Card>,
        suggestion: &Suggestion,
        now: Instant,
    ) -> Result<Vec<Outbound>, GameError> {
        let pending = self.pending.as_ref().ok_or(GameError::NoPendingDisprove)?;
        let seat = self
            .seat_of(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.clone()))?;

        let invalid = |reason| GameError::InvalidDisproof {
            player: player.clone(),
            card,
            reason,
        };
        if seat != pending.asked {
            return Err(invalid("not the seat being asked"));
        }
        if *suggestion != pending.suggestion {
            return Err(invalid("does not answer the pending suggestion"));
        }

        let state = &self.players[seat];
        let guess = pending.suggestion.guess;
        match card {
            Some(card) if !state.holds(card) => return Err(invalid("card is not in hand")),
            Some(card) if !guess.names(card) => return Err(invalid("card does not match the suggestion")),
            None if guess.matching(&state.hand).next().is_some() => {
                return Err(invalid("a matching card is in hand"))
            }
            _ => {}
        }

        Ok(self.resolve_reply(card, now))
    }

    fn apply_accuse(&mut self, accusation: Accusation) -> Result<Vec<Outbound>, GameError> {
        let player = accusation.player_id.clone();
        let seat = self.check_turn_action(&player, ActionType::Accuse)?;
        self.record(&player, ActionType::Accuse);

        let correct = self.solution.matches(&accusation.guess);
        info!(player = %player, guess = %accusation.guess, correct, "accused");

        let mut out = vec![Outbound::broadcast(Event::Accused {
            accusation: accusation.clone(),
            correct,
        })];

        if correct {
            info!(winner = %player, "game over");
            self.result = Some(GameResult::Winner(player));
            out.push(Outbound::broadcast(Event::EndGame {
                winner: Some(accusation),
            }));
        } else {
            self.players[seat].active = false;
            out.push(Outbound::broadcast(Event::TurnEnded { player_id: player }));
            out.extend(self.advance_turn());
        }
        Ok(out)
    }

    fn apply_end_turn(&mut self, player: &PlayerId) -> Result<Vec<Outbound>, GameError> {
        self.check_turn_action(player, ActionType::EndTurn)?;
        self.record(player, ActionType::EndTurn);
        debug!(player = %player, turn_id = self.turn.turn_id, "turn ended");

        let mut out = vec![Outbound::broadcast(Event::TurnEnded {
            player_id: player.clone(),
        })];
        out.extend(self.advance_turn());
        Ok(out)
    }

    // === Turn bookkeeping ===

    /// Reject unless `player` holds the turn and nothing is pending.
    fn check_turn_holder(&self, player: &PlayerId) -> Result<SeatIndex, GameError> {
        if let Some(pending) = &self.pending {
            return Err(GameError::AwaitingDisprove {
                from: self.players[pending.asked].player_id.clone(),
            });
        }
        let seat = self
            .seat_of(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.clone()))?;
        if seat != self.turn.seat {
            return Err(GameError::NotCurrentTurnHolder(player.clone()));
        }
        Ok(seat)
    }

    fn check_allowed(&self, player: &PlayerId, action: ActionType) -> Result<(), GameError> {
        let can_move = !self.board.movement_options(player).is_empty();
        if self.turn.allows(action, self.board.is_in_room(player), can_move) {
            Ok(())
        } else {
            Err(GameError::InvalidActionForTurnState { action })
        }
    }

    fn check_turn_action(&self, player: &PlayerId, action: ActionType) -> Result<SeatIndex, GameError> {
        let seat = self.check_turn_holder(player)?;
        self.check_allowed(player, action)?;
        Ok(seat)
    }

    fn record(&mut self, player: &PlayerId, action: ActionType) {
        if action.is_user_initiated() {
            self.turn.record(action);
        }
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player.clone(), action, self.turn.turn_id, sequence));
    }

    /// Hand the turn to the next active seat, or end the game in a draw.
    fn advance_turn(&mut self) -> Vec<Outbound> {
        let seat_count = self.players.seat_count();
        for _ in 0..seat_count {
            self.turn_index += 1;
            let seat = SeatIndex::new((self.turn_index as usize % seat_count) as u8);
            let state = &mut self.players[seat];
            if state.active {
                let entered_by_suggestion = std::mem::take(&mut state.moved_by_suggestion);
                self.turn = Turn::new(self.turn_index, seat, entered_by_suggestion);
                info!(player = %self.current_player(), turn_id = self.turn_index, "turn started");
                return vec![self.your_turn()];
            }
        }

        info!("every seat eliminated, game drawn");
        self.result = Some(GameResult::Draw);
        vec![Outbound::broadcast(Event::EndGame { winner: None })]
    }

    fn your_turn(&self) -> Outbound {
        Outbound::broadcast(Event::YourTurn {
            turn_id: self.turn.turn_id,
            player_id: self.current_player().clone(),
        })
    }

    // === Disprove ring ===

    /// Seats that may be asked to disprove.
    fn ring_eligibility(&self) -> impl Fn(SeatIndex) -> bool + '_ {
        move |seat| self.config.eliminated_seats_disprove || self.players[seat].active
    }

    fn request_disprove(&self, pending: &PendingDisprove) -> Outbound {
        let asked = self.players[pending.asked].player_id.clone();
        debug!(player = %asked, "disprove requested");
        Outbound::to_player(asked, Event::RequestDisprove(pending.suggestion.clone()))
    }

    fn nobody_disproved(&self, suggestion: Suggestion) -> Outbound {
        info!(player = %suggestion.player_id, "nobody could disprove");
        Outbound::broadcast(Event::Disproved {
            player_id: suggestion.player_id.clone(),
            disproof: Disproof::NoCard,
            suggestion,
        })
    }

    /// Apply a reply from the asked seat, already validated.
    fn resolve_reply(&mut self, card: Option<Card>, now: Instant) -> Vec<Outbound> {
        let Some(mut pending) = self.pending.take() else {
            return Vec::new();
        };
        let revealer = self.players[pending.asked].player_id.clone();
        self.record(&revealer, ActionType::Disprove);

        match card {
            Some(card) => {
                let suggester = pending.suggestion.player_id.clone();
                info!(player = %revealer, "suggestion disproved");
                let revealed = Event::Disproved {
                    player_id: revealer.clone(),
                    disproof: Disproof::Revealed(card),
                    suggestion: pending.suggestion.clone(),
                };
                let withheld = Event::Disproved {
                    player_id: revealer.clone(),
                    disproof: Disproof::Withheld,
                    suggestion: pending.suggestion,
                };
                vec![
                    Outbound::to_player(suggester.clone(), revealed.clone()),
                    Outbound::to_player(revealer.clone(), revealed),
                    Outbound::new(Recipient::AllExcept(vec![suggester, revealer]), withheld),
                ]
            }
            None => {
                debug!(player = %revealer, "no card");
                let seat_count = self.players.seat_count();
                if pending.advance(seat_count, self.ring_eligibility(), now) {
                    let out = vec![self.request_disprove(&pending)];
                    self.pending = Some(pending);
                    out
                } else {
                    vec![self.nobody_disproved(pending.suggestion)]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Character, Guess, Location, Weapon};
    use crate::protocol::events_for;

    fn scarlet() -> PlayerId {
        PlayerId::new(Character::Scarlet, "sam")
    }

    fn plum() -> PlayerId {
        PlayerId::new(Character::Plum, "pat")
    }

    fn two_player_game() -> GameManager {
        GameManager::new(TableConfig::new(3), vec![scarlet(), plum()]).unwrap()
    }

    #[test]
    fn test_player_count_limits() {
        let err = GameManager::new(TableConfig::new(1), vec![scarlet()]).unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount(1));
    }

    #[test]
    fn test_duplicate_character_rejected() {
        let twin = PlayerId::new(Character::Scarlet, "other");
        let err = GameManager::new(TableConfig::new(1), vec![scarlet(), twin.clone()]).unwrap_err();
        assert!(matches!(err, GameError::DuplicateCharacter(_)));
    }

    #[test]
    fn test_seats_follow_character_order() {
        let game = GameManager::new(TableConfig::new(1), vec![plum(), scarlet()]).unwrap();

        assert_eq!(game.seat_of(&scarlet()), Some(SeatIndex::new(0)));
        assert_eq!(game.seat_of(&plum()), Some(SeatIndex::new(1)));
        assert_eq!(game.current_player(), &scarlet());
    }

    #[test]
    fn test_begin_events() {
        let game = two_player_game();
        let out = game.begin();

        assert!(matches!(out[0].event, Event::StartGame(_)));
        let sam = scarlet();
        let scarlet_events: Vec<_> = events_for(&out, &sam).collect();
        // StartGame, own hand, YourTurn
        assert_eq!(scarlet_events.len(), 3);
        assert!(matches!(
            out.last().map(|o| &o.event),
            Some(Event::YourTurn { turn_id: 0, .. })
        ));
    }

    #[test]
    fn test_not_current_turn_holder() {
        let mut game = two_player_game();
        let err = game.handle(Command::EndTurn { player_id: plum() }).unwrap_err();
        assert_eq!(err, GameError::NotCurrentTurnHolder(plum()));
    }

    #[test]
    fn test_unknown_player() {
        let mut game = two_player_game();
        let stranger = PlayerId::new(Character::Green, "gus");
        let err = game.handle(Command::EndTurn { player_id: stranger.clone() }).unwrap_err();
        assert_eq!(err, GameError::UnknownPlayer(stranger));
    }

    #[test]
    fn test_lobby_commands_rejected_in_game() {
        let mut game = two_player_game();
        let err = game
            .handle(Command::JoinGame { nickname: "late".into() })
            .unwrap_err();
        assert_eq!(err, GameError::GameInProgress);
    }

    #[test]
    fn test_move_then_second_move_rejected() {
        let mut game = two_player_game();
        // Scarlet (0, 3) -> Hall
        game.handle(Command::Move { player_id: scarlet(), to: Coordinate::new(0, 2) })
            .unwrap();

        let err = game
            .handle(Command::Move { player_id: scarlet(), to: Coordinate::new(0, 3) })
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidActionForTurnState { action: ActionType::Move }
        );
    }

    #[test]
    fn test_move_to_distant_space_rejected() {
        let mut game = two_player_game();
        let err = game
            .handle(Command::Move { player_id: scarlet(), to: Coordinate::new(4, 4) })
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove(MoveError::NotAdjacent {
                from: Coordinate::new(0, 3),
                to: Coordinate::new(4, 4),
            })
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_suggest_from_hallway_rejected() {
        let mut game = two_player_game();
        let suggestion = Suggestion::new(
            scarlet(),
            Guess::new(Character::Plum, Weapon::Rope, Location::Hall),
        );

        let err = game.handle(Command::Suggest(suggestion)).unwrap_err();
        assert_eq!(
            err,
            GameError::MalformedSuggestionTarget {
                player: scarlet(),
                named: Location::Hall,
                standing: SuggestionStanding::Hallway,
            }
        );
    }

    #[test]
    fn test_history_records_actions() {
        let mut game = two_player_game();
        game.handle(Command::Move { player_id: scarlet(), to: Coordinate::new(0, 4) })
            .unwrap();
        game.handle(Command::EndTurn { player_id: scarlet() }).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action, ActionType::Move);
        assert_eq!(history[1].action, ActionType::EndTurn);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].turn_id, 0);
        assert_eq!(game.turn_index(), 1);
    }

    #[test]
    fn test_history_serializes_for_replay() {
        let mut game = two_player_game();
        game.handle(Command::Move { player_id: scarlet(), to: Coordinate::new(0, 4) })
            .unwrap();
        game.handle(Command::EndTurn { player_id: scarlet() }).unwrap();

        let json = serde_json::to_string(game.history()).unwrap();
        let replayed: Vector<ActionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(&replayed, game.history());
    }

    #[test]
    fn test_available_actions_only_for_turn_holder() {
        let game = two_player_game();
        assert!(game.available_actions(&plum()).is_empty());
        assert_eq!(
            game.available_actions(&scarlet()).as_slice(),
            &[ActionType::Move, ActionType::Accuse, ActionType::EndTurn]
        );
    }
}
