use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;
use crate::pile::{Cards, Pile};
use crate::store::DeckId;

/// Parameters of a single draw.
///
/// `from_pile` takes precedence over `till`, which takes precedence over
/// `count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub count: usize,
    pub till: Option<Card>,
    pub from_pile: Option<String>,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            count: 1,
            till: None,
            from_pile: None,
        }
    }
}

impl DrawRequest {
    pub fn count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn till(card: Card) -> Self {
        Self {
            till: Some(card),
            ..Self::default()
        }
    }

    pub fn from_pile(count: usize, name: impl Into<String>) -> Self {
        Self {
            count,
            from_pile: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Largest number of 52-card sets a single deck may hold.
pub const MAX_SETS: usize = 1024;

/// A draw pile plus its discard piles.
///
/// The top of the deck is the end of the card sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    pile: Pile,
    id: Option<DeckId>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Build `n` interleaved 52-card sets, shuffled when `shuffle` is set.
    pub fn new(n: usize, shuffle: bool) -> Result<Self, DeckError> {
        Self::new_with_seed(n, shuffle, rand::random())
    }

    /// As [`Deck::new`], with shuffles driven by `seed`.
    ///
    /// The seed lives only in this instance and is not part of the stored
    /// record. A deck rebuilt by [`Deck::from_parts`] or decoded from a store
    /// shuffles from fresh entropy.
    pub fn new_with_seed(n: usize, shuffle: bool, seed: u64) -> Result<Self, DeckError> {
        if !(1..=MAX_SETS).contains(&n) {
            return Err(DeckError::InvalidMultiplicity(n));
        }
        let mut deck = Self {
            cards: full_deck(n),
            pile: Pile::new(),
            id: None,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        if shuffle {
            deck.shuffle();
        }
        Ok(deck)
    }

    /// Reassemble a deck from decoded parts. The card order is kept as given
    /// and later shuffles use a freshly seeded generator.
    pub fn from_parts(cards: Vec<Card>, pile: Pile) -> Self {
        Self {
            cards,
            pile,
            id: None,
            rng: ChaCha20Rng::seed_from_u64(rand::random()),
        }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// The draw pile, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Identity assigned by a store.
    pub fn id(&self) -> Result<&DeckId, DeckError> {
        self.id.as_ref().ok_or(DeckError::NoIdentity)
    }

    pub(crate) fn raw_id(&self) -> Option<&DeckId> {
        self.id.as_ref()
    }

    pub(crate) fn set_id(&mut self, id: Option<DeckId>) {
        self.id = id;
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(deck_id = ?self.id, count = self.cards.len(), "shuffled deck");
    }

    /// Pop `n` cards off the top. Fails without touching the deck when it is
    /// empty or holds fewer than `n` cards.
    pub fn draw(&mut self, n: usize) -> Result<Cards, DeckError> {
        self.ensure_cards(n)?;
        let mut drawn = self.cards.split_off(self.cards.len() - n);
        drawn.reverse();
        tracing::debug!(deck_id = ?self.id, drawn = n, remaining = self.cards.len(), "drew cards");
        Ok(Cards::from_vec(drawn))
    }

    /// Pop cards until `till` has been popped.
    ///
    /// When no card in the deck equals `till`, every remaining card is
    /// returned and the deck is left empty.
    pub fn draw_till(&mut self, till: &Card) -> Result<Cards, DeckError> {
        self.ensure_cards(1)?;
        let start = match self.cards.iter().rposition(|c| c == till) {
            Some(index) => index,
            None => {
                tracing::debug!(deck_id = ?self.id, till = %till, "target card not in deck, draining");
                0
            }
        };
        let mut drawn = self.cards.split_off(start);
        drawn.reverse();
        tracing::debug!(deck_id = ?self.id, drawn = drawn.len(), remaining = self.cards.len(), "drew till target");
        Ok(Cards::from_vec(drawn))
    }

    pub fn draw_with(&mut self, request: &DrawRequest) -> Result<Cards, DeckError> {
        if let Some(name) = request.from_pile.as_deref() {
            return self.pile.draw(request.count, Some(name));
        }
        match &request.till {
            Some(card) => self.draw_till(card),
            None => self.draw(request.count),
        }
    }

    pub fn discard(&mut self, cards: impl Into<Cards>, into: Option<&str>) {
        self.pile.push(cards, into);
    }

    pub fn discard_encoded(
        &mut self,
        records: &[serde_json::Value],
        into: Option<&str>,
    ) -> Result<(), DeckError> {
        self.pile.push_encoded(records, into)
    }

    fn ensure_cards(&self, n: usize) -> Result<(), DeckError> {
        if !self.has_cards() || n > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("Count: {}", self.count());
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "*".repeat(header.len()))?;
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}\t{}", i + 1, card)?;
        }
        Ok(())
    }
}
