use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DeckError;

/// One of the four suits of a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Every suit in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn is_black(self) -> bool {
        !self.is_red()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw rank as it appears on the wire: numeric ranks are integers and
/// court cards are names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankValue {
    Numeric(i64),
    Symbolic(String),
}

impl fmt::Display for RankValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankValue::Numeric(n) => write!(f, "{}", n),
            RankValue::Symbolic(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RankValue {
    fn from(v: i32) -> Self {
        RankValue::Numeric(i64::from(v))
    }
}

impl From<i64> for RankValue {
    fn from(v: i64) -> Self {
        RankValue::Numeric(v)
    }
}

impl From<&str> for RankValue {
    fn from(v: &str) -> Self {
        RankValue::Symbolic(v.to_string())
    }
}

impl From<String> for RankValue {
    fn from(v: String) -> Self {
        RankValue::Symbolic(v)
    }
}

/// Rank of a card from Two through Ace.
///
/// The discriminant minus one is the rank-ordering key: Two is 1 and Ace is
/// 13. Suits never take part in rank ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Every rank by ascending ordering key.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
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
    ];

    /// Order in which ranks are laid down when a deck is built: numbers
    /// ascending, then court names alphabetically. This puts the Queen of
    /// Spades on top of an unshuffled deck.
    pub const BUILD_ORDER: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
        Rank::Jack,
        Rank::King,
        Rank::Queen,
    ];

    /// Rank-ordering key, 1 (Two) through 13 (Ace).
    pub fn key(self) -> u8 {
        self as u8 - 1
    }

    pub fn value(self) -> RankValue {
        match self {
            Rank::Jack => RankValue::Symbolic("Jack".into()),
            Rank::Queen => RankValue::Symbolic("Queen".into()),
            Rank::King => RankValue::Symbolic("King".into()),
            Rank::Ace => RankValue::Symbolic("Ace".into()),
            numeric => RankValue::Numeric(i64::from(numeric as u8)),
        }
    }

    pub fn from_value(value: &RankValue) -> Option<Rank> {
        match value {
            RankValue::Numeric(n) => Rank::ALL
                .into_iter()
                .take(9)
                .find(|r| i64::from(*r as u8) == *n),
            RankValue::Symbolic(s) => match s.as_str() {
                "Jack" => Some(Rank::Jack),
                "Queen" => Some(Rank::Queen),
                "King" => Some(Rank::King),
                "Ace" => Some(Rank::Ace),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A playing card. Immutable once built.
///
/// Equality between two cards needs both rank and suit to match, while
/// [`Card::compare`] looks at rank alone. Two cards of the same rank and
/// different suits therefore compare as `Ordering::Equal` yet are not `==`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from raw values, rejecting anything outside the fixed
    /// rank and suit tables.
    pub fn try_new(rank: impl Into<RankValue>, suit: &str) -> Result<Self, DeckError> {
        let rank = rank.into();
        match (Rank::from_value(&rank), Suit::from_name(suit)) {
            (Some(r), Some(s)) => Ok(Self::new(r, s)),
            _ => Err(DeckError::InvalidCard {
                rank: rank.to_string(),
                suit: suit.to_string(),
            }),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn is_black(&self) -> bool {
        self.suit.is_black()
    }

    /// Orders this card against a card or bare rank by rank-ordering key.
    pub fn compare(&self, other: impl Into<Comparand>) -> Result<Ordering, DeckError> {
        let other = other.into().rank_key()?;
        Ok(self.rank.key().cmp(&other))
    }

    /// Equality against a card (rank and suit) or a bare rank (rank only).
    pub fn equals(&self, other: impl Into<Comparand>) -> Result<bool, DeckError> {
        match other.into() {
            Comparand::Card(card) => Ok(*self == card),
            rank => Ok(self.rank.key() == rank.rank_key()?),
        }
    }
}

impl PartialEq<Rank> for Card {
    fn eq(&self, other: &Rank) -> bool {
        self.rank == *other
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = DeckError;

    /// Parses the display form, e.g. `Queen of Spades` or `10 of Hearts`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeckError::InvalidCard {
            rank: s.trim().to_string(),
            suit: String::new(),
        };
        let (rank, suit) = s.trim().split_once(" of ").ok_or_else(invalid)?;
        let rank = match rank.trim().parse::<i64>() {
            Ok(n) => RankValue::Numeric(n),
            Err(_) => RankValue::Symbolic(rank.trim().to_string()),
        };
        Card::try_new(rank, suit.trim())
    }
}

/// Anything a card may be compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparand {
    Card(Card),
    Numeric(i64),
    Symbolic(String),
}

impl Comparand {
    fn rank_key(&self) -> Result<u8, DeckError> {
        let value = match self {
            Comparand::Card(card) => return Ok(card.rank.key()),
            Comparand::Numeric(n) => RankValue::Numeric(*n),
            Comparand::Symbolic(s) => RankValue::Symbolic(s.clone()),
        };
        Rank::from_value(&value)
            .map(Rank::key)
            .ok_or_else(|| DeckError::InvalidComparison(value.to_string()))
    }
}

impl From<Card> for Comparand {
    fn from(card: Card) -> Self {
        Comparand::Card(card)
    }
}

impl From<&Card> for Comparand {
    fn from(card: &Card) -> Self {
        Comparand::Card(*card)
    }
}

impl From<Rank> for Comparand {
    fn from(rank: Rank) -> Self {
        rank.value().into()
    }
}

impl From<RankValue> for Comparand {
    fn from(value: RankValue) -> Self {
        match value {
            RankValue::Numeric(n) => Comparand::Numeric(n),
            RankValue::Symbolic(s) => Comparand::Symbolic(s),
        }
    }
}

impl From<i32> for Comparand {
    fn from(v: i32) -> Self {
        Comparand::Numeric(i64::from(v))
    }
}

impl From<i64> for Comparand {
    fn from(v: i64) -> Self {
        Comparand::Numeric(v)
    }
}

impl From<&str> for Comparand {
    fn from(v: &str) -> Self {
        Comparand::Symbolic(v.to_string())
    }
}

impl From<String> for Comparand {
    fn from(v: String) -> Self {
        Comparand::Symbolic(v)
    }
}

/// `n` interleaved 52-card sets: suits outer, ranks inner, each rank/suit
/// pair repeated `n` times in a row.
pub(crate) fn full_deck(n: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * n);
    for &s in &Suit::ALL {
        for &r in &Rank::BUILD_ORDER {
            v.extend(std::iter::repeat_n(Card::new(r, s), n));
        }
    }
    v
}
