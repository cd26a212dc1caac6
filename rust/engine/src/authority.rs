//! Server-side guard for client commands.
//!
//! Runs before the state machine sees a command and never mutates anything.

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::RoundState;
use crate::player::SeatId;

/// The game is running, the seat is seated, and it is that seat's turn.
pub fn authorize_turn(state: &RoundState, seat: SeatId) -> Result<(), GameError> {
    if state.is_finished() {
        return Err(GameError::GameFinished);
    }
    if state.seat(seat).is_none() {
        return Err(GameError::SeatNotRegistered { seat });
    }
    let expected = state.current_turn();
    if seat != expected {
        return Err(GameError::NotPlayersTurn {
            expected,
            actual: seat,
        });
    }
    Ok(())
}

/// [`authorize_turn`] plus ownership: every submitted card must be in the
/// seat's true hand, matched one for one by suit and rank.
pub fn authorize_play(state: &RoundState, seat: SeatId, cards: &[Card]) -> Result<(), GameError> {
    authorize_turn(state, seat)?;
    let owner = state
        .seat(seat)
        .ok_or(GameError::SeatNotRegistered { seat })?;
    match owner.first_missing(cards) {
        Some(card) => Err(GameError::CardNotOwned { seat, card }),
        None => Ok(()),
    }
}
