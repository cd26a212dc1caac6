use thiserror::Error;

use crate::cards::Card;
use crate::player::SeatId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Need at least 2 seated players, have {seated}")]
    NotEnoughPlayers { seated: usize },
    #[error("Got {hands} hands for {seated} seated players")]
    HandCountMismatch { seated: usize, hands: usize },
    #[error("Seat {seat} is already taken")]
    SeatTaken { seat: SeatId },
    #[error("Seat {seat} is not registered")]
    SeatNotRegistered { seat: SeatId },
    #[error("Seats cannot change while a game is in progress")]
    GameInProgress,
    #[error("No game in progress")]
    NoGameInProgress,
    #[error("Game already finished")]
    GameFinished,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: SeatId, actual: SeatId },
    #[error("Seat {seat} does not hold {card}")]
    CardNotOwned { seat: SeatId, card: Card },
    #[error("Cards do not form a valid move")]
    InvalidMove,
    #[error("Move does not beat the leading hand")]
    DoesNotBeat,
    #[error("Seat {seat} must lead and cannot pass")]
    CannotPass { seat: SeatId },
}

impl GameError {
    /// Structural errors abort a start attempt; every other error is a rejected command.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            GameError::NotEnoughPlayers { .. } | GameError::HandCountMismatch { .. }
        )
    }
}
