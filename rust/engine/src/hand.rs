use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, MAX_RANK_WEIGHT};

/// Shape of a played card set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Invalid,
    Single,
    Pair,
    Triplet,
    TripletWithTwo,
    FourWithThree,
    Straight,
    ConsecutivePairs,
    Airplane,
    Bomb,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Invalid => "invalid",
            MoveKind::Single => "single",
            MoveKind::Pair => "pair",
            MoveKind::Triplet => "triplet",
            MoveKind::TripletWithTwo => "triplet_with_two",
            MoveKind::FourWithThree => "four_with_three",
            MoveKind::Straight => "straight",
            MoveKind::ConsecutivePairs => "consecutive_pairs",
            MoveKind::Airplane => "airplane",
            MoveKind::Bomb => "bomb",
        };
        f.write_str(name)
    }
}

/// Strength of a triple-Ace bomb. Sits above every four-of-a-kind.
pub const RESERVED_AAA_BOMB_STRENGTH: i32 = MAX_RANK_WEIGHT + 1;

/// A classified card set. `strength` only compares hands of the same kind and size.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub kind: MoveKind,
    pub strength: i32,
    pub cards: Vec<Card>,
}

impl Hand {
    fn new(kind: MoveKind, strength: i32, cards: Vec<Card>) -> Self {
        Self {
            kind,
            strength,
            cards,
        }
    }

    fn invalid(cards: Vec<Card>) -> Self {
        Self::new(MoveKind::Invalid, 0, cards)
    }

    pub fn is_valid(&self) -> bool {
        self.kind != MoveKind::Invalid
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

const TWO_WEIGHT: i32 = Rank::Two as i32;

/// Classifies `cards` into a move.
///
/// Rules are tried in a fixed order and the first match wins, so a five-card
/// set holding a triple is always a triplet with two, never a straight.
/// The returned hand keeps the cards sorted ascending by weight.
pub fn classify(cards: &[Card], three_as_bomb: bool) -> Hand {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));
    let weights: Vec<i32> = sorted.iter().map(Card::weight).collect();
    let groups = group_weights(&weights);
    let len = sorted.len();

    match len {
        0 => return Hand::invalid(sorted),
        1 => return Hand::new(MoveKind::Single, weights[0], sorted),
        2 => {
            return if weights[0] == weights[1] {
                Hand::new(MoveKind::Pair, weights[0], sorted)
            } else {
                Hand::invalid(sorted)
            };
        }
        3 => {
            if groups.len() != 1 {
                return Hand::invalid(sorted);
            }
            return if three_as_bomb && sorted[0].rank == Rank::Ace {
                Hand::new(MoveKind::Bomb, RESERVED_AAA_BOMB_STRENGTH, sorted)
            } else {
                Hand::new(MoveKind::Triplet, weights[0], sorted)
            };
        }
        4 if groups.len() == 1 => return Hand::new(MoveKind::Bomb, weights[0], sorted),
        5 => {
            if let Some(&(w, _)) = groups.iter().find(|(_, count)| *count >= 3) {
                return Hand::new(MoveKind::TripletWithTwo, w, sorted);
            }
            if let Some(high) = straight_high(&weights) {
                return Hand::new(MoveKind::Straight, high, sorted);
            }
        }
        _ => {}
    }

    if len >= 4 && len % 2 == 0 {
        if let Some(high) = consecutive_pairs_high(&weights) {
            return Hand::new(MoveKind::ConsecutivePairs, high, sorted);
        }
    }
    if len >= 5 {
        if let Some(high) = straight_high(&weights) {
            return Hand::new(MoveKind::Straight, high, sorted);
        }
    }
    if len % 5 == 0 {
        if let Some(high) = airplane_high(&groups, len / 5) {
            return Hand::new(MoveKind::Airplane, high, sorted);
        }
    }
    if len == 7 {
        if let Some(&(w, _)) = groups.iter().find(|(_, count)| *count == 4) {
            return Hand::new(MoveKind::FourWithThree, w, sorted);
        }
    }
    Hand::invalid(sorted)
}

/// `(weight, count)` runs of an ascending weight list.
fn group_weights(sorted_weights: &[i32]) -> Vec<(i32, usize)> {
    let mut groups: Vec<(i32, usize)> = Vec::new();
    for &w in sorted_weights {
        match groups.last_mut() {
            Some((last, count)) if *last == w => *count += 1,
            _ => groups.push((w, 1)),
        }
    }
    groups
}

fn straight_high(sorted_weights: &[i32]) -> Option<i32> {
    if sorted_weights.contains(&TWO_WEIGHT) {
        return None;
    }
    let consecutive = sorted_weights.windows(2).all(|w| w[1] == w[0] + 1);
    if consecutive {
        sorted_weights.last().copied()
    } else {
        None
    }
}

fn consecutive_pairs_high(sorted_weights: &[i32]) -> Option<i32> {
    if sorted_weights.contains(&TWO_WEIGHT) {
        return None;
    }
    let pairs: Vec<&[i32]> = sorted_weights.chunks(2).collect();
    if pairs.iter().any(|p| p.len() != 2 || p[0] != p[1]) {
        return None;
    }
    let rising = pairs.windows(2).all(|w| w[1][0] == w[0][0] + 1);
    if rising {
        pairs.last().map(|p| p[0])
    } else {
        None
    }
}

/// Highest body weight among windows of `n` consecutive triples.
/// When several windows qualify the highest one is taken.
fn airplane_high(groups: &[(i32, usize)], n: usize) -> Option<i32> {
    if n == 0 {
        return None;
    }
    let triples: Vec<i32> = groups
        .iter()
        .filter(|(w, count)| *count >= 3 && *w != TWO_WEIGHT)
        .map(|(w, _)| *w)
        .collect();
    if triples.len() < n {
        return None;
    }
    triples
        .windows(n)
        .rev()
        .find(|win| win.windows(2).all(|p| p[1] == p[0] + 1))
        .and_then(|win| win.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_serialized_form() {
        for kind in [MoveKind::TripletWithTwo, MoveKind::ConsecutivePairs, MoveKind::Bomb] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn groups_runs_of_equal_weights() {
        assert_eq!(
            group_weights(&[3, 3, 3, 7, 9]),
            vec![(3, 3), (7, 1), (9, 1)]
        );
    }

    #[test]
    fn airplane_picks_highest_window() {
        let groups = [(4, 3), (5, 3), (6, 3)];
        assert_eq!(airplane_high(&groups, 2), Some(6));
        assert_eq!(airplane_high(&[(4, 3), (6, 3)], 2), None);
    }

    #[test]
    fn pairs_must_rise_by_one() {
        assert_eq!(consecutive_pairs_high(&[3, 3, 4, 4]), Some(4));
        assert_eq!(consecutive_pairs_high(&[3, 3, 5, 5]), None);
        assert_eq!(consecutive_pairs_high(&[3, 3, 3, 4]), None);
    }
}
