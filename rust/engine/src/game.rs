use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::authority;
use crate::cards::Card;
use crate::deck::{build_deck, deal, shuffle};
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::hand::{classify, Hand};
use crate::player::{Seat, SeatId};
use crate::rules::{can_beat, starting_seat, GameSettings};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    Finished { winner: SeatId },
}

/// Per-room turn and round state for one game.
///
/// Every mutating call either succeeds and returns the events it produced, or
/// fails with a [`GameError`] and leaves the state exactly as it was.
#[derive(Debug, Clone)]
pub struct RoundState {
    settings: GameSettings,
    /// Seats in fixed turn order.
    seats: Vec<Seat>,
    current_turn: SeatId,
    /// Hand currently standing in the open round; `None` means free lead.
    leading_hand: Option<Hand>,
    round_leader: Option<SeatId>,
    phase: GamePhase,
}

impl RoundState {
    /// Builds, shuffles and deals a deck per `settings` for `seated`, in that order.
    pub fn start<R: Rng + ?Sized>(
        settings: GameSettings,
        seated: &[SeatId],
        rng: &mut R,
    ) -> Result<(Self, Vec<GameEvent>), GameError> {
        if seated.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                seated: seated.len(),
            });
        }
        let deck = shuffle(build_deck(settings.deck_variant), rng);
        let hands = deal(&deck, seated.len());
        Self::from_hands(settings, seated, hands)
    }

    /// Starts a game from already dealt hands; `hands[i]` belongs to `seated[i]`.
    pub fn from_hands(
        settings: GameSettings,
        seated: &[SeatId],
        hands: Vec<Vec<Card>>,
    ) -> Result<(Self, Vec<GameEvent>), GameError> {
        if seated.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                seated: seated.len(),
            });
        }
        if hands.len() != seated.len() {
            return Err(GameError::HandCountMismatch {
                seated: seated.len(),
                hands: hands.len(),
            });
        }
        let current_turn = starting_seat(settings.first_turn, seated, &hands);
        let events = seated
            .iter()
            .zip(hands.iter())
            .map(|(&seat, cards)| GameEvent::HandDealt {
                seat,
                cards: cards.clone(),
            })
            .collect();
        let seats = seated
            .iter()
            .zip(hands)
            .map(|(&id, cards)| Seat::new(id, cards))
            .collect();
        let state = Self {
            settings,
            seats,
            current_turn,
            leading_hand: None,
            round_leader: None,
            phase: GamePhase::InProgress,
        };
        Ok((state, events))
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn seated(&self) -> Vec<SeatId> {
        self.seats.iter().map(Seat::id).collect()
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }

    pub fn hand_of(&self, id: SeatId) -> Option<&[Card]> {
        self.seat(id).map(Seat::hand)
    }

    pub fn current_turn(&self) -> SeatId {
        self.current_turn
    }

    pub fn leading_hand(&self) -> Option<&Hand> {
        self.leading_hand.as_ref()
    }

    pub fn round_leader(&self) -> Option<SeatId> {
        self.round_leader
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    pub fn winner(&self) -> Option<SeatId> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            GamePhase::InProgress => None,
        }
    }

    /// Whether the seat to act is free to lead any valid hand.
    pub fn is_free_lead(&self) -> bool {
        self.leading_hand.is_none()
    }

    fn index_of(&self, id: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| s.id() == id)
    }

    /// Plays `cards` for `seat`.
    ///
    /// The move must classify as valid and, unless the seat is re-leading its
    /// own unbeaten hand, beat the leading hand. On success the cards leave
    /// the seat's hand and either the game finishes or the turn advances.
    pub fn play_cards(&mut self, seat: SeatId, cards: &[Card]) -> Result<Vec<GameEvent>, GameError> {
        authority::authorize_play(self, seat, cards)?;
        let hand = classify(cards, self.settings.three_as_bomb);
        if !hand.is_valid() {
            return Err(GameError::InvalidMove);
        }
        if let Some(leading) = &self.leading_hand {
            if self.round_leader != Some(seat) && !can_beat(leading, &hand) {
                return Err(GameError::DoesNotBeat);
            }
        }
        let idx = self
            .index_of(seat)
            .ok_or(GameError::SeatNotRegistered { seat })?;
        self.seats[idx]
            .remove_cards(cards)
            .map_err(|card| GameError::CardNotOwned { seat, card })?;

        let mut events = vec![GameEvent::MovePlayed {
            seat,
            cards: hand.cards.clone(),
            kind: hand.kind,
        }];
        self.leading_hand = Some(hand);
        self.round_leader = Some(seat);

        if self.seats[idx].is_empty() {
            self.phase = GamePhase::Finished { winner: seat };
            events.push(GameEvent::GameFinished { winner: seat });
            return Ok(events);
        }
        self.advance_turn();
        Ok(events)
    }

    /// Passes for `seat`. The round leader, or any seat with a free lead, must play.
    pub fn pass(&mut self, seat: SeatId) -> Result<Vec<GameEvent>, GameError> {
        authority::authorize_turn(self, seat)?;
        if self.leading_hand.is_none() || self.round_leader == Some(seat) {
            return Err(GameError::CannotPass { seat });
        }
        self.advance_turn();
        Ok(vec![GameEvent::MovePassed { seat }])
    }

    /// Moves the turn to the next seat; the round closes when it reaches the leader.
    fn advance_turn(&mut self) {
        let idx = self.index_of(self.current_turn).unwrap_or(0);
        let next = self.seats[(idx + 1) % self.seats.len()].id();
        self.current_turn = next;
        if self.round_leader == Some(next) && self.leading_hand.take().is_some() {
            tracing::debug!(leader = next, "round closed, leader is free to lead");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn three_seat_game() -> RoundState {
        let hands = vec![cards("3H 5H 5S 9C"), cards("4D 6D KH"), cards("7C 8C JD")];
        let (state, _) = RoundState::from_hands(GameSettings::default(), &[0, 1, 2], hands).unwrap();
        state
    }

    #[test]
    fn advance_wraps_around_seated_order() {
        let mut state = three_seat_game();
        state.play_cards(0, &cards("3H")).unwrap();
        state.play_cards(1, &cards("KH")).unwrap();
        assert_eq!(state.current_turn(), 2);
        state.pass(2).unwrap();
        assert_eq!(state.current_turn(), 0);
        assert_eq!(state.leading_hand().map(|h| h.strength), Some(13));
    }

    #[test]
    fn rejected_play_leaves_state_untouched() {
        let mut state = three_seat_game();
        let before = state.hand_of(0).unwrap().to_vec();
        assert_eq!(
            state.play_cards(0, &cards("3H 9C")),
            Err(GameError::InvalidMove)
        );
        assert_eq!(state.hand_of(0).unwrap(), before.as_slice());
        assert_eq!(state.current_turn(), 0);
        assert!(state.leading_hand().is_none());
    }

    #[test]
    fn free_lead_cannot_pass() {
        let mut state = three_seat_game();
        assert_eq!(state.pass(0), Err(GameError::CannotPass { seat: 0 }));
    }
}
