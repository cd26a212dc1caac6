use std::collections::{BTreeMap, VecDeque};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::errors::GameError;
use crate::events::{EventSink, GameEvent};
use crate::game::RoundState;
use crate::logger::{format_game_id, today, ActionRecord, GameRecord};
use crate::player::{PlayerAction, SeatId};
use crate::rules::GameSettings;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// One room: the seat registry, the current game and its outbound events.
///
/// Commands are processed one at a time to completion; callers serialize
/// access per room. Rejected commands change nothing and emit nothing; they
/// are logged and returned as `Err`.
///
/// # Examples
///
/// ```
/// use runfast_engine::engine::Engine;
/// use runfast_engine::rules::GameSettings;
///
/// let mut engine = Engine::new(GameSettings::default(), Some(12345));
/// engine.register_seat(0, "alice").unwrap();
/// engine.register_seat(1, "bob").unwrap();
/// engine.register_seat(2, "carol").unwrap();
/// engine.start_game().unwrap();
///
/// let state = engine.state().unwrap();
/// assert_eq!(state.hand_of(0).unwrap().len(), 16);
/// assert_eq!(engine.drain_events().len(), 3);
/// ```
#[derive(Debug)]
pub struct Engine {
    settings: GameSettings,
    seed: u64,
    /// seat -> player handle, iterated in seat order
    seats: BTreeMap<SeatId, String>,
    state: Option<RoundState>,
    outbox: VecDeque<GameEvent>,
    record: Option<GameRecord>,
    games_started: u32,
}

impl Engine {
    pub fn new(settings: GameSettings, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            settings,
            seed,
            seats: BTreeMap::new(),
            state: None,
            outbox: VecDeque::new(),
            record: None,
            games_started: 0,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed of the next game dealt in this room: the room seed for the
    /// first game, then one more for each game started since.
    pub fn next_game_seed(&self) -> u64 {
        self.seed.wrapping_add(u64::from(self.games_started))
    }

    pub fn register_seat(&mut self, seat: SeatId, handle: impl Into<String>) -> Result<(), GameError> {
        if self.is_in_progress() {
            return Err(GameError::GameInProgress);
        }
        if self.seats.contains_key(&seat) {
            return Err(GameError::SeatTaken { seat });
        }
        let handle = handle.into();
        tracing::debug!(seat, handle = %handle, "seat registered");
        self.seats.insert(seat, handle);
        Ok(())
    }

    pub fn unregister_seat(&mut self, seat: SeatId) -> Result<String, GameError> {
        if self.is_in_progress() {
            return Err(GameError::GameInProgress);
        }
        self.seats
            .remove(&seat)
            .ok_or(GameError::SeatNotRegistered { seat })
    }

    pub fn seated(&self) -> Vec<SeatId> {
        self.seats.keys().copied().collect()
    }

    pub fn handle_of(&self, seat: SeatId) -> Option<&str> {
        self.seats.get(&seat).map(String::as_str)
    }

    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    pub fn is_in_progress(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.is_finished())
    }

    /// Deals a new game to the registered seats, replacing any previous one.
    /// With fewer than two seats nothing is created and the old game stays.
    ///
    /// Each game gets its own seed (see [`Engine::next_game_seed`]), stored in
    /// the record so the deal can be reproduced from it alone.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let seated = self.seated();
        let game_seed = self.next_game_seed();
        let mut rng = ChaCha20Rng::seed_from_u64(game_seed);
        let (state, events) = match RoundState::start(self.settings, &seated, &mut rng) {
            Ok(started) => started,
            Err(e) => {
                tracing::warn!(seated = seated.len(), error = %e, "game start aborted");
                return Err(e);
            }
        };
        self.games_started += 1;
        let dealt = seated
            .iter()
            .map(|&s| state.hand_of(s).map(<[Card]>::to_vec).unwrap_or_default())
            .collect();
        self.record = Some(GameRecord {
            game_id: format_game_id(&today(), self.games_started),
            seed: Some(game_seed),
            settings: self.settings,
            seats: seated.clone(),
            dealt,
            starting_seat: state.current_turn(),
            actions: Vec::new(),
            winner: None,
            ts: None,
            meta: None,
        });
        tracing::info!(
            seats = seated.len(),
            starting_seat = state.current_turn(),
            deck = ?self.settings.deck_variant,
            "game started"
        );
        self.state = Some(state);
        self.outbox.extend(events);
        Ok(())
    }

    pub fn play_cards(&mut self, seat: SeatId, cards: &[Card]) -> Result<(), GameError> {
        self.handle(seat, PlayerAction::Play(cards.to_vec()))
    }

    pub fn pass(&mut self, seat: SeatId) -> Result<(), GameError> {
        self.handle(seat, PlayerAction::Pass)
    }

    /// Runs one command through the authority checks and the state machine.
    pub fn handle(&mut self, seat: SeatId, action: PlayerAction) -> Result<(), GameError> {
        let Some(state) = self.state.as_mut() else {
            tracing::warn!(seat, "command rejected: no game in progress");
            return Err(GameError::NoGameInProgress);
        };
        let result = match &action {
            PlayerAction::Play(cards) => state.play_cards(seat, cards),
            PlayerAction::Pass => state.pass(seat),
        };
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(seat, action = ?action, reason = %e, "command rejected");
                return Err(e);
            }
        };

        let kind = events.iter().find_map(|e| match e {
            GameEvent::MovePlayed { kind, .. } => Some(*kind),
            _ => None,
        });
        tracing::debug!(seat, action = ?action, kind = ?kind, "command accepted");
        let winner = state.winner();
        if let Some(record) = self.record.as_mut() {
            record.actions.push(ActionRecord { seat, action, kind });
            record.winner = winner;
        }
        if let Some(winner) = winner {
            tracing::info!(winner, "game finished");
        }
        self.outbox.extend(events);
        Ok(())
    }

    /// Takes all pending events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.outbox.drain(..).collect()
    }

    /// Hands all pending events to `sink` in emission order.
    pub fn deliver_events(&mut self, sink: &mut dyn EventSink) {
        for event in self.outbox.drain(..) {
            sink.deliver(event);
        }
    }

    pub fn record(&self) -> Option<&GameRecord> {
        self.record.as_ref()
    }

    pub fn take_record(&mut self) -> Option<GameRecord> {
        self.record.take()
    }
}
