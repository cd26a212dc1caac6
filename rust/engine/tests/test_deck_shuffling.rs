use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use runfast_engine::cards::{Card, Rank, Suit};
use runfast_engine::deck::{build_deck, deal, shuffle, DeckVariant};

fn sorted(mut v: Vec<Card>) -> Vec<Card> {
    v.sort();
    v
}

#[test]
fn standard52_has_52_unique_cards() {
    let deck = build_deck(DeckVariant::Standard52);
    assert_eq!(deck.len(), 52);
    let set: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn standard48_drops_three_twos_and_the_spade_ace() {
    let deck = build_deck(DeckVariant::Standard48);
    assert_eq!(deck.len(), 48);
    for excluded in [
        Card::new(Suit::Diamonds, Rank::Two),
        Card::new(Suit::Clubs, Rank::Two),
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Spades, Rank::Ace),
    ] {
        assert!(!deck.contains(&excluded), "{} must be excluded", excluded);
    }
    assert!(deck.contains(&Card::new(Suit::Spades, Rank::Two)));
    let set: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(set.len(), 48);
}

#[test]
fn shuffle_preserves_the_multiset() {
    for seed in 0..20u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let deck = build_deck(DeckVariant::Standard48);
        let shuffled = shuffle(deck.clone(), &mut rng);
        assert_eq!(sorted(shuffled), sorted(deck));
    }
    // duplicates survive too
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let dup = vec![Card::new(Suit::Hearts, Rank::Five); 3];
    assert_eq!(shuffle(dup.clone(), &mut rng), dup);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut r1 = ChaCha20Rng::seed_from_u64(12345);
    let mut r2 = ChaCha20Rng::seed_from_u64(12345);
    let a = shuffle(build_deck(DeckVariant::Standard52), &mut r1);
    let b = shuffle(build_deck(DeckVariant::Standard52), &mut r2);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut r1 = ChaCha20Rng::seed_from_u64(1);
    let mut r2 = ChaCha20Rng::seed_from_u64(2);
    let a = shuffle(build_deck(DeckVariant::Standard52), &mut r1);
    let b = shuffle(build_deck(DeckVariant::Standard52), &mut r2);
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn three_seats_split_48_evenly() {
    let deck = build_deck(DeckVariant::Standard48);
    let hands = deal(&deck, 3);
    assert!(hands.iter().all(|h| h.len() == 16));
    let all: Vec<Card> = hands.into_iter().flatten().collect();
    assert_eq!(sorted(all), sorted(deck));
}
