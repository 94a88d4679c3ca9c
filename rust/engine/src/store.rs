//! Persistence seam. The engine never touches durable storage itself; an
//! adapter implements [`DeckStore`] and the lifecycle helpers on [`Deck`]
//! move encoded records through it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{decode_deck_record, DeckRecord};
use crate::deck::Deck;
use crate::errors::DeckError;

/// Opaque identity a store assigns to a persisted deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random (UUID v4) identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeckId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Keyed storage of encoded decks, one record per identity.
pub trait DeckStore {
    /// Fails with [`DeckError::NotFound`] when nothing is stored under `id`.
    fn load(&self, id: &DeckId) -> Result<DeckRecord, DeckError>;

    fn save(&mut self, id: &DeckId, record: &DeckRecord) -> Result<(), DeckError>;

    /// Fails with [`DeckError::NotFound`] when nothing is stored under `id`.
    fn delete(&mut self, id: &DeckId) -> Result<(), DeckError>;

    fn generate_id(&self) -> DeckId {
        DeckId::generate()
    }
}

/// Store that keeps records in a map for the life of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<DeckId, DeckRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DeckStore for MemoryStore {
    fn load(&self, id: &DeckId) -> Result<DeckRecord, DeckError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| DeckError::NotFound(id.to_string()))
    }

    fn save(&mut self, id: &DeckId, record: &DeckRecord) -> Result<(), DeckError> {
        self.records.insert(id.clone(), record.clone());
        Ok(())
    }

    fn delete(&mut self, id: &DeckId) -> Result<(), DeckError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DeckError::NotFound(id.to_string()))
    }
}

impl Deck {
    /// Build a new deck and persist it under a fresh identity.
    pub fn create_in<S: DeckStore + ?Sized>(
        store: &mut S,
        n: usize,
        shuffle: bool,
    ) -> Result<Deck, DeckError> {
        Deck::new(n, shuffle)?.insert_into(store)
    }

    /// Give this deck a fresh identity from `store` and save it there.
    pub fn insert_into<S: DeckStore + ?Sized>(mut self, store: &mut S) -> Result<Deck, DeckError> {
        let id = store.generate_id();
        self.set_id(Some(id.clone()));
        store.save(&id, &self.encode())?;
        tracing::info!(deck_id = %id, count = self.count(), "created deck");
        Ok(self)
    }

    /// Load a persisted deck and attach its identity.
    pub fn get<S: DeckStore + ?Sized>(store: &S, id: &DeckId) -> Result<Deck, DeckError> {
        let record = store.load(id)?;
        let mut deck = decode_deck_record(&record)?;
        deck.set_id(Some(id.clone()));
        Ok(deck)
    }

    pub fn save<S: DeckStore + ?Sized>(&self, store: &mut S) -> Result<(), DeckError> {
        let id = self.id()?;
        store.save(id, &self.encode())?;
        tracing::debug!(deck_id = %id, count = self.count(), "saved deck");
        Ok(())
    }

    /// Remove the stored record and forget this deck's identity.
    pub fn delete<S: DeckStore + ?Sized>(&mut self, store: &mut S) -> Result<(), DeckError> {
        let id = self.id()?.clone();
        store.delete(&id)?;
        self.set_id(None);
        tracing::info!(deck_id = %id, "deleted deck");
        Ok(())
    }
}
