use runfast_engine::cards::{parse_cards, Card, Rank};
use runfast_engine::hand::{classify, MoveKind, RESERVED_AAA_BOMB_STRENGTH};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn kind_of(s: &str) -> (MoveKind, i32) {
    let h = classify(&cards(s), false);
    (h.kind, h.strength)
}

#[test]
fn singles_and_pairs() {
    assert_eq!(kind_of("2S"), (MoveKind::Single, Rank::Two.weight()));
    assert_eq!(kind_of("7H 7S"), (MoveKind::Pair, 7));
    assert_eq!(kind_of("7H 8S").0, MoveKind::Invalid);
}

#[test]
fn empty_set_is_invalid() {
    assert_eq!(classify(&[], false).kind, MoveKind::Invalid);
}

#[test]
fn triplet_and_ace_bomb() {
    assert_eq!(kind_of("9H 9S 9D"), (MoveKind::Triplet, 9));
    assert_eq!(kind_of("AH AC AD"), (MoveKind::Triplet, 14));
    let bomb = classify(&cards("AH AC AD"), true);
    assert_eq!(bomb.kind, MoveKind::Bomb);
    assert_eq!(bomb.strength, RESERVED_AAA_BOMB_STRENGTH);
    // only aces are promoted
    assert_eq!(classify(&cards("KH KC KD"), true).kind, MoveKind::Triplet);
    assert_eq!(kind_of("9H 9S 8D").0, MoveKind::Invalid);
}

#[test]
fn four_of_a_kind_is_a_bomb() {
    assert_eq!(kind_of("6H 6S 6D 6C"), (MoveKind::Bomb, 6));
    assert!(RESERVED_AAA_BOMB_STRENGTH > Rank::Two.weight());
}

#[test]
fn four_unequal_cards_can_still_be_pairs() {
    assert_eq!(kind_of("5H 5S 6D 6C"), (MoveKind::ConsecutivePairs, 6));
    assert_eq!(kind_of("5H 5S 7D 7C").0, MoveKind::Invalid);
    assert_eq!(kind_of("5H 6S 7D 8C").0, MoveKind::Invalid);
}

#[test]
fn triple_wins_over_straight_shape_for_five_cards() {
    assert_eq!(kind_of("3H 3S 3D 7C 9C"), (MoveKind::TripletWithTwo, 3));
    assert_eq!(kind_of("3H 3S 3D 4C 5C"), (MoveKind::TripletWithTwo, 3));
    assert_eq!(kind_of("8H 8S 8D 8C KC"), (MoveKind::TripletWithTwo, 8));
    // wings are unconstrained
    assert_eq!(kind_of("JH JS JD 2S 3C"), (MoveKind::TripletWithTwo, 11));
}

#[test]
fn straights() {
    assert_eq!(kind_of("3H 4S 5D 6C 7C"), (MoveKind::Straight, 7));
    assert_eq!(kind_of("10H JS QD KC AC"), (MoveKind::Straight, 14));
    assert_eq!(kind_of("3H 4S 5D 6C 7C 8H 9H"), (MoveKind::Straight, 9));
    assert_eq!(kind_of("JS QD KC AC 2S").0, MoveKind::Invalid);
    assert_eq!(kind_of("3H 4S 5D 6C 8C").0, MoveKind::Invalid);
}

#[test]
fn consecutive_pairs() {
    assert_eq!(
        kind_of("3H 3S 4D 4C 5C 5H"),
        (MoveKind::ConsecutivePairs, 5)
    );
    assert_eq!(kind_of("KH KS AD AC 2S 2H").0, MoveKind::Invalid);
    assert_eq!(kind_of("3H 3S 4D 4C 6C 6H").0, MoveKind::Invalid);
}

#[test]
fn airplanes() {
    assert_eq!(
        kind_of("5H 5S 5D 6H 6S 6D 9C 10C JC QC"),
        (MoveKind::Airplane, 6)
    );
    // wings may themselves be pairs or a third triple
    assert_eq!(
        kind_of("5H 5S 5D 6H 6S 6D 9C 9D 9H 3C"),
        (MoveKind::Airplane, 6)
    );
    // non-consecutive bodies are not an airplane
    assert_eq!(kind_of("5H 5S 5D 7H 7S 7D 9C 10C JC QC").0, MoveKind::Invalid);
}

#[test]
fn airplane_body_cannot_use_twos() {
    let h = classify(&cards("AH AC AD 2S 2H 2D 3C 4C 5C 6C"), false);
    assert_eq!(h.kind, MoveKind::Invalid);
}

#[test]
fn four_with_three() {
    assert_eq!(kind_of("9H 9S 9D 9C 3C 5D 7H"), (MoveKind::FourWithThree, 9));
    assert_eq!(kind_of("9H 9S 9D 8C 3C 5D 7H").0, MoveKind::Invalid);
}

#[test]
fn classification_is_idempotent() {
    for s in [
        "3H 3S 3D 7C 9C",
        "5H 5S 6D 6C",
        "3H 4S 5D 6C 7C",
        "9H 9S 9D 9C 3C 5D 7H",
        "7H 8S",
    ] {
        let a = classify(&cards(s), true);
        let b = classify(&cards(s), true);
        assert_eq!((a.kind, a.strength), (b.kind, b.strength), "{}", s);
    }
}

#[test]
fn input_order_does_not_matter() {
    let a = classify(&cards("7C 3H 5D 4S 6C"), false);
    let b = classify(&cards("3H 4S 5D 6C 7C"), false);
    assert_eq!(a, b);
}
