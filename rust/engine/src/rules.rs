use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::deck::DeckVariant;
use crate::hand::{Hand, MoveKind};
use crate::player::SeatId;

/// How the first seat to act is chosen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstTurnRule {
    /// The holder of the Three of Hearts leads.
    #[default]
    Heart3,
    /// Declared but without defined semantics; starts at seat 0.
    Rotate,
    /// Declared but without defined semantics; starts at seat 0.
    Winner,
}

/// Per-game configuration, fixed for the game's duration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    pub deck_variant: DeckVariant,
    pub first_turn: FirstTurnRule,
    /// Triple Aces count as the strongest bomb.
    pub three_as_bomb: bool,
}

pub const HEART_THREE: Card = Card::new(Suit::Hearts, Rank::Three);

/// Picks the seat that acts first from freshly dealt hands.
///
/// `hands[i]` belongs to `seated[i]`. Under [`FirstTurnRule::Heart3`] the
/// holder of the Three of Hearts starts; in every other case, including a
/// deal where nobody holds it, the first seat starts.
pub fn starting_seat(rule: FirstTurnRule, seated: &[SeatId], hands: &[Vec<Card>]) -> SeatId {
    let first = seated.first().copied().unwrap_or(0);
    match rule {
        FirstTurnRule::Heart3 => hands
            .iter()
            .position(|h| h.contains(&HEART_THREE))
            .and_then(|i| seated.get(i).copied())
            .unwrap_or(first),
        FirstTurnRule::Rotate | FirstTurnRule::Winner => first,
    }
}

/// Whether `curr` may be played on top of `prev`.
///
/// Bombs beat every non-bomb and lower bombs. Otherwise only a hand of the
/// same kind and size with strictly greater strength wins.
///
/// # Examples
///
/// ```
/// use runfast_engine::cards::parse_cards;
/// use runfast_engine::hand::classify;
/// use runfast_engine::rules::can_beat;
///
/// let pair = classify(&parse_cards("5H 5S").unwrap(), false);
/// let higher = classify(&parse_cards("9D 9C").unwrap(), false);
/// let straight = classify(&parse_cards("3H 4H 5D 6C 7S").unwrap(), false);
/// assert!(can_beat(&pair, &higher));
/// assert!(!can_beat(&pair, &straight));
/// ```
pub fn can_beat(prev: &Hand, curr: &Hand) -> bool {
    match (prev.kind, curr.kind) {
        (_, MoveKind::Invalid) => false,
        (MoveKind::Bomb, MoveKind::Bomb) => curr.strength > prev.strength,
        (_, MoveKind::Bomb) => true,
        (MoveKind::Bomb, _) => false,
        (p, c) => p == c && prev.cards.len() == curr.cards.len() && curr.strength > prev.strength,
    }
}
