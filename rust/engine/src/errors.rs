use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Invalid card: rank {rank}, suit {suit}")]
    InvalidCard { rank: String, suit: String },
    #[error("Cannot compare a card against {0}")]
    InvalidComparison(String),
    #[error("Not enough cards: requested {requested}, available {available}")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("No such pile: {0}")]
    NoSuchPile(String),
    #[error("Only cards may be discarded: {0}")]
    InvalidDiscard(String),
    #[error("Cannot decode record: {0}")]
    Decode(String),
    #[error("Deck has no identity; persist it through a store first")]
    NoIdentity,
    #[error("No deck with id {0}")]
    NotFound(String),
    #[error("Deck multiplicity must be between 1 and {max} (got {0})", max = crate::deck::MAX_SETS)]
    InvalidMultiplicity(usize),
    #[error("Store failure: {0}")]
    Store(String),
}

impl DeckError {
    /// Stable machine-readable name of the condition, for adapters that map
    /// errors onto their own transport.
    pub fn code(&self) -> &'static str {
        match self {
            DeckError::InvalidCard { .. } => "invalid_card",
            DeckError::InvalidComparison(_) => "invalid_comparison",
            DeckError::NotEnoughCards { .. } => "not_enough_cards",
            DeckError::NoSuchPile(_) => "no_such_pile",
            DeckError::InvalidDiscard(_) => "invalid_discard",
            DeckError::Decode(_) => "decode_error",
            DeckError::NoIdentity => "no_identity",
            DeckError::NotFound(_) => "not_found",
            DeckError::InvalidMultiplicity(_) => "invalid_multiplicity",
            DeckError::Store(_) => "store_error",
        }
    }
}
