//! Lossless conversion between cards, piles and decks and their stored
//! records.
//!
//! The record shape is the storage format and must stay stable:
//!
//! ```json
//! {
//!   "cards": [{"rank": 10, "suit": "Hearts"}, {"rank": "Queen", "suit": "Spades"}],
//!   "pile": {"discard": [], "hand": [{"rank": 2, "suit": "Clubs"}]},
//!   "count": 2,
//!   "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427"
//! }
//! ```
//!
//! `id` is omitted for decks that were never persisted. On decode `count` is
//! recomputed from `cards`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cards::{Card, RankValue};
use crate::deck::Deck;
use crate::errors::DeckError;
use crate::pile::Pile;
use crate::store::DeckId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub rank: RankValue,
    pub suit: String,
}

pub type PileRecord = BTreeMap<String, Vec<CardRecord>>;

/// A stored deck. A null `pile` reads as a deck that never discarded
/// anything, whichever path the record is loaded through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    pub cards: Vec<CardRecord>,
    #[serde(deserialize_with = "null_as_empty")]
    pub pile: PileRecord,
    #[serde(default)]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeckId>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<PileRecord, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PileRecord>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn encode_card(card: &Card) -> CardRecord {
    CardRecord {
        rank: card.rank().value(),
        suit: card.suit().name().to_string(),
    }
}

pub fn encode_pile(pile: &Pile) -> PileRecord {
    pile.iter()
        .map(|(name, cards)| (name.to_string(), cards.iter().map(encode_card).collect()))
        .collect()
}

pub fn encode_deck(deck: &Deck) -> DeckRecord {
    DeckRecord {
        cards: deck.cards().iter().map(encode_card).collect(),
        pile: encode_pile(deck.pile()),
        count: deck.count(),
        id: deck.raw_id().cloned(),
    }
}

pub fn decode_card_record(record: &CardRecord) -> Result<Card, DeckError> {
    Card::try_new(record.rank.clone(), &record.suit).map_err(|e| DeckError::Decode(e.to_string()))
}

pub fn decode_pile_record(record: &PileRecord) -> Result<Pile, DeckError> {
    let mut piles = BTreeMap::new();
    for (name, cards) in record {
        let cards = cards
            .iter()
            .map(decode_card_record)
            .collect::<Result<Vec<Card>, DeckError>>()?;
        piles.insert(name.clone(), cards);
    }
    Ok(Pile::from_piles(piles))
}

pub fn decode_deck_record(record: &DeckRecord) -> Result<Deck, DeckError> {
    let cards = record
        .cards
        .iter()
        .map(decode_card_record)
        .collect::<Result<Vec<Card>, DeckError>>()?;
    let pile = decode_pile_record(&record.pile)?;
    let mut deck = Deck::from_parts(cards, pile);
    deck.set_id(record.id.clone());
    Ok(deck)
}

pub fn decode_card(value: &Value) -> Result<Card, DeckError> {
    let record: CardRecord = parse(value, "card")?;
    decode_card_record(&record)
}

pub fn decode_pile(value: &Value) -> Result<Pile, DeckError> {
    let record: PileRecord = parse(value, "pile")?;
    decode_pile_record(&record)
}

/// Decode a deck record. Both `cards` and `pile` must be present.
pub fn decode_deck(value: &Value) -> Result<Deck, DeckError> {
    let object = value
        .as_object()
        .ok_or_else(|| DeckError::Decode("deck record must be an object".into()))?;
    for key in ["cards", "pile"] {
        if !object.contains_key(key) {
            return Err(DeckError::Decode(format!("deck record is missing `{}`", key)));
        }
    }
    let record: DeckRecord = parse(value, "deck")?;
    decode_deck_record(&record)
}

pub fn to_json(deck: &Deck) -> Result<String, DeckError> {
    serde_json::to_string(&encode_deck(deck)).map_err(|e| DeckError::Decode(e.to_string()))
}

pub fn from_json(s: &str) -> Result<Deck, DeckError> {
    let value: Value = serde_json::from_str(s).map_err(|e| DeckError::Decode(e.to_string()))?;
    decode_deck(&value)
}

fn parse<T: serde::de::DeserializeOwned>(value: &Value, what: &str) -> Result<T, DeckError> {
    T::deserialize(value).map_err(|e| DeckError::Decode(format!("invalid {} record: {}", what, e)))
}

impl Deck {
    pub fn encode(&self) -> DeckRecord {
        encode_deck(self)
    }

    pub fn decode(value: &Value) -> Result<Deck, DeckError> {
        decode_deck(value)
    }
}
