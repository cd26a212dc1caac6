//! Outbound domain events.
//!
//! The state machine returns events instead of notifying anyone itself; an
//! [`EventSink`] implemented by the hosting transport delivers them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::MoveKind;
use crate::player::SeatId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    HandDealt {
        seat: SeatId,
        cards: Vec<Card>,
    },
    MovePlayed {
        seat: SeatId,
        cards: Vec<Card>,
        kind: MoveKind,
    },
    MovePassed {
        seat: SeatId,
    },
    GameFinished {
        winner: SeatId,
    },
}

/// Who an event is addressed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Point-to-point, only this seat may see it
    Seat(SeatId),
    /// Everyone in the room
    Room,
}

impl GameEvent {
    pub fn recipient(&self) -> Recipient {
        match self {
            GameEvent::HandDealt { seat, .. } => Recipient::Seat(*seat),
            _ => Recipient::Room,
        }
    }
}

/// Delivery seam for the transport layer. Events arrive in emission order and
/// are handed over exactly once; retrying is the sink's business.
pub trait EventSink {
    fn deliver(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn deliver(&mut self, event: GameEvent) {
        self.push(event);
    }
}
