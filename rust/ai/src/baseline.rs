//! Baseline AI: always answers with the cheapest legal move.

use runfast_engine::game::RoundState;
use runfast_engine::player::{PlayerAction, SeatId};

use crate::moves::cheapest;
use crate::{choose_with, AIOpponent};

/// Reference opponent for simulations.
///
/// Leads and responds with the lowest-strength move it holds, keeping bombs
/// until nothing else beats the table. Passes when it cannot beat the
/// leading hand. Fully deterministic, so simulations replay from their seed.
///
/// # Example
///
/// ```rust
/// use runfast_ai::baseline::BaselineAI;
/// use runfast_ai::AIOpponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(&self, state: &RoundState, seat: SeatId) -> PlayerAction {
        choose_with(state, seat, cheapest)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
