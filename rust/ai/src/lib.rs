//! # runfast-ai: Computer Opponents for Run Fast
//!
//! Provides move-picking strategies that play through the same command
//! surface as human seats. Every strategy only proposes moves found by
//! [`moves::candidate_moves`], so the engine never rejects them.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`moves`] - Legal-move search over a hand
//! - [`baseline`] - Plays the cheapest legal move
//! - [`greedy`] - Sheds as many cards per move as it can
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use runfast_ai::{create_ai, AIOpponent};
//! use runfast_engine::engine::Engine;
//! use runfast_engine::rules::GameSettings;
//!
//! let ai = create_ai("baseline").expect("known ai");
//!
//! let mut engine = Engine::new(GameSettings::default(), Some(42));
//! engine.register_seat(0, "north").unwrap();
//! engine.register_seat(1, "south").unwrap();
//! engine.start_game().unwrap();
//!
//! let state = engine.state().unwrap();
//! let seat = state.current_turn();
//! let action = ai.get_action(state, seat);
//! engine.handle(seat, action).unwrap();
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - Lowest-strength move, bombs held back
//! - `"greedy"` - Longest move first

use runfast_engine::game::RoundState;
use runfast_engine::hand::Hand;
use runfast_engine::player::{PlayerAction, SeatId};

pub mod baseline;
pub mod greedy;
pub mod moves;

/// Names accepted by [`create_ai`].
pub const AVAILABLE_AIS: &[&str] = &["baseline", "greedy"];

/// Interface for computer-controlled seats.
///
/// # Example Implementation
///
/// ```rust
/// use runfast_ai::AIOpponent;
/// use runfast_engine::game::RoundState;
/// use runfast_engine::player::{PlayerAction, SeatId};
///
/// struct AlwaysPass;
///
/// impl AIOpponent for AlwaysPass {
///     fn get_action(&self, _state: &RoundState, _seat: SeatId) -> PlayerAction {
///         PlayerAction::Pass
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysPass"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Picks the next action for `seat`.
    ///
    /// Only meaningful when it is `seat`'s turn; otherwise the result is a
    /// pass that the engine will reject as out of turn.
    fn get_action(&self, state: &RoundState, seat: SeatId) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Creates an AI opponent by name, `None` for names not in [`AVAILABLE_AIS`].
///
/// ```rust
/// use runfast_ai::create_ai;
///
/// assert_eq!(create_ai("greedy").unwrap().name(), "GreedyAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "greedy" => Some(Box::new(greedy::GreedyAI::new())),
        _ => None,
    }
}

/// Hand `seat` has to beat, `None` on a free lead or when re-leading its own
/// unbeaten hand.
pub(crate) fn hand_to_beat(state: &RoundState, seat: SeatId) -> Option<&Hand> {
    if state.round_leader() == Some(seat) {
        return None;
    }
    state.leading_hand()
}

/// Shared move loop: list candidates, let `pick` choose, otherwise pass.
pub(crate) fn choose_with<F>(state: &RoundState, seat: SeatId, pick: F) -> PlayerAction
where
    F: for<'a> Fn(&'a [Hand]) -> Option<&'a Hand>,
{
    if state.is_finished() || state.current_turn() != seat {
        return PlayerAction::Pass;
    }
    let Some(hand) = state.hand_of(seat) else {
        return PlayerAction::Pass;
    };
    let leading = hand_to_beat(state, seat);
    let moves = moves::candidate_moves(hand, leading, state.settings().three_as_bomb);
    match pick(&moves) {
        Some(m) => PlayerAction::Play(m.cards.clone()),
        None => PlayerAction::Pass,
    }
}
