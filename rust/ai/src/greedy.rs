//! Greedy AI: empties its hand as fast as the table allows.

use runfast_engine::game::RoundState;
use runfast_engine::hand::{Hand, MoveKind};
use runfast_engine::player::{PlayerAction, SeatId};

use crate::{choose_with, AIOpponent};

/// Plays the move that sheds the most cards, lowest strength among equals.
/// Bombs are only used when no other move is available.
#[derive(Debug, Clone, Default)]
pub struct GreedyAI;

impl GreedyAI {
    pub fn new() -> Self {
        Self
    }
}

fn longest(moves: &[Hand]) -> Option<&Hand> {
    moves.iter().min_by_key(|h| {
        (
            h.kind == MoveKind::Bomb,
            std::cmp::Reverse(h.len()),
            h.strength,
        )
    })
}

impl AIOpponent for GreedyAI {
    fn get_action(&self, state: &RoundState, seat: SeatId) -> PlayerAction {
        choose_with(state, seat, longest)
    }

    fn name(&self) -> &str {
        "GreedyAI"
    }
}
