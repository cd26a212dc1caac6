use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four suits.
/// Declaration order is the display tie-break: Spades sort highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Rank of a card in Run Fast order: Three is the lowest, Two the highest.
/// The discriminant is the rank's weight used by hand classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 3 (weight 3)
    Three = 3,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
    /// Two (15), above Ace
    Two,
}

/// Weight of the highest rank. Reserved strengths are derived from it.
pub const MAX_RANK_WEIGHT: i32 = Rank::Two as i32;

impl Rank {
    pub fn weight(self) -> i32 {
        self as i32
    }

    pub fn from_weight(w: i32) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.weight() == w)
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A single playing card. Two cards are the same card iff suit and rank match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Three through Two)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn weight(&self) -> i32 {
        self.rank.weight()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("card text is empty")]
    Empty,
    #[error("unknown rank in {0:?}")]
    UnknownRank(String),
    #[error("unknown suit in {0:?}")]
    UnknownSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `3H`, `10S`, `TS`, `qd`, `2C` style text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let suit_ch = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_text = chars.as_str().to_ascii_uppercase();
        if rank_text.is_empty() {
            return Err(ParseCardError::UnknownRank(text.to_string()));
        }
        let suit = match suit_ch.to_ascii_uppercase() {
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::UnknownSuit(text.to_string())),
        };
        let rank = match rank_text.as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            _ => return Err(ParseCardError::UnknownRank(text.to_string())),
        };
        Ok(Card { suit, rank })
    }
}

/// Parses a whitespace or comma separated list of cards.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ]
}

/// Sorts cards for a hand view: highest weight first, then highest suit.
pub fn sort_for_display(cards: &mut [Card]) {
    cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
