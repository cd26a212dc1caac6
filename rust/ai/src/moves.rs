//! Legal-move search over a seat's hand.
//!
//! Builds one representative card set per shape and rank from the hand,
//! classifies it with the engine and keeps the ones that may be played on top
//! of the leading hand.

use std::collections::{BTreeMap, HashSet};

use runfast_engine::cards::{Card, Rank};
use runfast_engine::hand::{classify, Hand, MoveKind};
use runfast_engine::rules::can_beat;

const TWO: i32 = Rank::Two as i32;

/// Every distinct playable move from `hand`.
///
/// With no leading hand any valid move is listed; otherwise only moves that
/// beat `leading`. Duplicates by (kind, strength, size) are dropped. Wings are
/// filled with the lowest cards outside the body.
pub fn candidate_moves(hand: &[Card], leading: Option<&Hand>, three_as_bomb: bool) -> Vec<Hand> {
    let groups = group_by_weight(hand);
    let mut raw: Vec<Vec<Card>> = Vec::new();

    for cards in groups.values() {
        for size in 1..=cards.len().min(4) {
            raw.push(cards[..size].to_vec());
        }
        if cards.len() >= 3 {
            raw.push(with_wings(&cards[..3], hand, 2));
        }
        if cards.len() == 4 {
            raw.push(with_wings(cards, hand, 3));
        }
    }
    raw.extend(runs(&groups, 1, 5));
    raw.extend(runs(&groups, 2, 2));
    for body in runs(&groups, 3, 2) {
        let n = body.len() / 3;
        raw.push(with_wings(&body, hand, 2 * n));
    }

    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|cards| classify(&cards, three_as_bomb))
        .filter(Hand::is_valid)
        .filter(|h| leading.is_none_or(|prev| can_beat(prev, h)))
        .filter(|h| seen.insert((h.kind, h.strength, h.len())))
        .collect()
}

fn group_by_weight(hand: &[Card]) -> BTreeMap<i32, Vec<Card>> {
    let mut groups: BTreeMap<i32, Vec<Card>> = BTreeMap::new();
    for &c in hand {
        groups.entry(c.weight()).or_default().push(c);
    }
    for cards in groups.values_mut() {
        cards.sort();
    }
    groups
}

/// Consecutive runs of `per` cards per weight, at least `min_len` weights long,
/// never touching Two.
fn runs(groups: &BTreeMap<i32, Vec<Card>>, per: usize, min_len: usize) -> Vec<Vec<Card>> {
    let weights: Vec<i32> = groups
        .iter()
        .filter(|(w, cards)| **w != TWO && cards.len() >= per)
        .map(|(w, _)| *w)
        .collect();
    let mut out = Vec::new();
    for start in 0..weights.len() {
        let mut end = start;
        while end + 1 < weights.len() && weights[end + 1] == weights[end] + 1 {
            end += 1;
            let len = end - start + 1;
            if len >= min_len {
                let cards = weights[start..=end]
                    .iter()
                    .flat_map(|w| groups[w][..per].iter().copied())
                    .collect();
                out.push(cards);
            }
        }
    }
    out
}

/// `body` plus the `count` lowest cards of `hand` not already in it.
/// Returns the body unchanged when the hand is too short, which then
/// classifies as whatever the body alone is.
fn with_wings(body: &[Card], hand: &[Card], count: usize) -> Vec<Card> {
    let mut rest: Vec<Card> = hand.iter().copied().filter(|c| !body.contains(c)).collect();
    rest.sort_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));
    if rest.len() < count {
        return body.to_vec();
    }
    let mut cards = body.to_vec();
    cards.extend_from_slice(&rest[..count]);
    cards
}

/// Fewest bombs first, then lowest strength, then most cards.
pub fn cheapest(moves: &[Hand]) -> Option<&Hand> {
    moves.iter().min_by_key(|h| {
        (
            h.kind == MoveKind::Bomb,
            h.strength,
            std::cmp::Reverse(h.len()),
        )
    })
}
