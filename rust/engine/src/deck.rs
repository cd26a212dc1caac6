use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, Card, Rank, Suit};

/// Which cards make up the deck for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckVariant {
    /// 48 cards: the full deck minus Two of Diamonds, Clubs, Hearts and the Ace of Spades.
    #[default]
    Standard48,
    /// All 52 cards.
    Standard52,
}

const STANDARD48_EXCLUDED: [Card; 4] = [
    Card::new(Suit::Diamonds, Rank::Two),
    Card::new(Suit::Clubs, Rank::Two),
    Card::new(Suit::Hearts, Rank::Two),
    Card::new(Suit::Spades, Rank::Ace),
];

impl DeckVariant {
    pub fn card_count(self) -> usize {
        match self {
            DeckVariant::Standard48 => 48,
            DeckVariant::Standard52 => 52,
        }
    }
}

/// Enumerates the deck in a fixed suit-major order. No shuffling happens here.
pub fn build_deck(variant: DeckVariant) -> Vec<Card> {
    let mut v = Vec::with_capacity(variant.card_count());
    for &s in &all_suits() {
        for &r in &all_ranks() {
            let c = Card::new(s, r);
            if variant == DeckVariant::Standard48 && STANDARD48_EXCLUDED.contains(&c) {
                continue;
            }
            v.push(c);
        }
    }
    v
}

/// Fisher–Yates shuffle over the supplied RNG. The output holds exactly the input cards.
pub fn shuffle<R: Rng + ?Sized>(mut deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    deck.shuffle(rng);
    deck
}

/// Deals round-robin: card `i` goes to seat `i % seat_count`.
/// Lower seats receive the remainder. Returns no hands when `seat_count` is zero.
pub fn deal(deck: &[Card], seat_count: usize) -> Vec<Vec<Card>> {
    if seat_count == 0 {
        return Vec::new();
    }
    let mut hands = vec![Vec::with_capacity(deck.len() / seat_count + 1); seat_count];
    for (i, &c) in deck.iter().enumerate() {
        hands[i % seat_count].push(c);
    }
    hands
}
