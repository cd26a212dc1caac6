use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Stable seat index assigned before a game starts.
pub type SeatId = usize;

/// A command a seated player can submit on their turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the listed cards from hand
    Play(Vec<Card>),
    /// Decline to beat the leading hand
    Pass,
}

/// A seat and its server-authoritative hand.
/// The hand is filled once at deal time and only shrinks afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Seat {
    id: SeatId,
    hand: Vec<Card>,
}

impl Seat {
    pub fn new(id: SeatId, hand: Vec<Card>) -> Self {
        Self { id, hand }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// First card of `cards` the hand cannot cover, matching one for one.
    /// Submitting the same card twice needs two copies in hand.
    pub fn first_missing(&self, cards: &[Card]) -> Option<Card> {
        let mut pool = self.hand.clone();
        for c in cards {
            match pool.iter().position(|h| h == c) {
                Some(i) => {
                    pool.swap_remove(i);
                }
                None => return Some(*c),
            }
        }
        None
    }

    pub fn holds(&self, cards: &[Card]) -> bool {
        self.first_missing(cards).is_none()
    }

    /// Removes one copy of each card. Callers check [`Seat::holds`] first;
    /// a card the hand lacks is an error and leaves the hand untouched.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), Card> {
        if let Some(missing) = self.first_missing(cards) {
            return Err(missing);
        }
        for c in cards {
            if let Some(i) = self.hand.iter().position(|h| h == c) {
                self.hand.remove(i);
            }
        }
        Ok(())
    }
}
