use std::collections::BTreeMap;
use std::fmt;

use crate::cards::Card;
use crate::codec;
use crate::errors::DeckError;

/// Name of the pile used when no pile is named.
pub const DEFAULT_PILE: &str = "discard";

/// One card or several, in the order they were drawn or are to be pushed.
///
/// Draws of exactly one card come back as [`Cards::One`]; everything else is
/// [`Cards::Many`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cards {
    One(Card),
    Many(Vec<Card>),
}

impl Cards {
    pub fn from_vec(mut cards: Vec<Card>) -> Self {
        if cards.len() == 1 {
            if let Some(card) = cards.pop() {
                return Cards::One(card);
            }
        }
        Cards::Many(cards)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[Card] {
        match self {
            Cards::One(card) => std::slice::from_ref(card),
            Cards::Many(cards) => cards,
        }
    }

    pub fn into_vec(self) -> Vec<Card> {
        match self {
            Cards::One(card) => vec![card],
            Cards::Many(cards) => cards,
        }
    }

    /// The single card, if exactly one was drawn.
    pub fn single(&self) -> Option<Card> {
        match self {
            Cards::One(card) => Some(*card),
            Cards::Many(_) => None,
        }
    }
}

impl From<Card> for Cards {
    fn from(card: Card) -> Self {
        Cards::One(card)
    }
}

impl From<Vec<Card>> for Cards {
    fn from(cards: Vec<Card>) -> Self {
        Cards::Many(cards)
    }
}

impl From<&[Card]> for Cards {
    fn from(cards: &[Card]) -> Self {
        Cards::Many(cards.to_vec())
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Named LIFO card piles. The default pile always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    piles: BTreeMap<String, Vec<Card>>,
}

impl Default for Pile {
    fn default() -> Self {
        Self::new()
    }
}

impl Pile {
    pub fn new() -> Self {
        let mut piles = BTreeMap::new();
        piles.insert(DEFAULT_PILE.to_string(), Vec::new());
        Self { piles }
    }

    /// Rebuild from existing named piles, adding the default pile if absent.
    pub fn from_piles(mut piles: BTreeMap<String, Vec<Card>>) -> Self {
        piles.entry(DEFAULT_PILE.to_string()).or_default();
        Self { piles }
    }

    /// Append cards to the end of the named pile, creating it on first use.
    pub fn push(&mut self, cards: impl Into<Cards>, into: Option<&str>) {
        let name = into.unwrap_or(DEFAULT_PILE);
        let cards = cards.into();
        tracing::debug!(pile = name, count = cards.len(), "pushing cards onto pile");
        self.piles
            .entry(name.to_string())
            .or_default()
            .extend(cards);
    }

    /// Push encoded card records. Every record is decoded before anything is
    /// pushed, so one bad record rejects the whole discard.
    pub fn push_encoded(
        &mut self,
        records: &[serde_json::Value],
        into: Option<&str>,
    ) -> Result<(), DeckError> {
        let cards = records
            .iter()
            .map(|record| {
                codec::decode_card(record).map_err(|_| DeckError::InvalidDiscard(record.to_string()))
            })
            .collect::<Result<Vec<Card>, DeckError>>()?;
        self.push(cards, into);
        Ok(())
    }

    /// Remove the last `n` cards of the named pile, most recent first.
    pub fn draw(&mut self, n: usize, from: Option<&str>) -> Result<Cards, DeckError> {
        let name = from.unwrap_or(DEFAULT_PILE);
        let pile = self
            .piles
            .get_mut(name)
            .ok_or_else(|| DeckError::NoSuchPile(name.to_string()))?;
        if pile.is_empty() || n > pile.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                available: pile.len(),
            });
        }
        let mut drawn = pile.split_off(pile.len() - n);
        drawn.reverse();
        tracing::debug!(pile = name, count = n, remaining = pile.len(), "drew from pile");
        Ok(Cards::from_vec(drawn))
    }

    /// Live contents of the named pile, bottom first. Unknown names are empty.
    pub fn show(&self, name: Option<&str>) -> &[Card] {
        self.piles
            .get(name.unwrap_or(DEFAULT_PILE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count_of(&self, name: Option<&str>) -> usize {
        self.show(name).len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.piles.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.piles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Card])> {
        self.piles
            .iter()
            .map(|(name, cards)| (name.as_str(), cards.as_slice()))
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Piles:")?;
        for (name, cards) in self.iter() {
            writeln!(f, "'{}'", name)?;
            if cards.is_empty() {
                writeln!(f, "\t* (Nothing here)")?;
            }
            for card in cards {
                writeln!(f, "\t* {}", card)?;
            }
        }
        Ok(())
    }
}
