//! # deckhand-engine: Persisted Card Deck Core
//!
//! A deck of playing cards that can be built from several 52-card sets,
//! shuffled, drawn from (by count or until a target card), discarded into
//! named piles, and round-tripped through a stable record format for
//! storage.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and rank comparison
//! - [`pile`] - Named LIFO discard piles
//! - [`deck`] - The draw pile, its discard piles and draw semantics
//! - [`codec`] - Encoding to and decoding from stored records
//! - [`store`] - Persistence seam and an in-memory store
//! - [`errors`] - Error types for deck operations
//!
//! ## Quick Start
//!
//! ```rust
//! use deckhand_engine::cards::{Card, Rank, Suit};
//! use deckhand_engine::deck::Deck;
//!
//! // An unshuffled deck always has the Queen of Spades on top
//! let mut deck = Deck::new(1, false).unwrap();
//! let top = deck.draw(1).unwrap();
//! assert_eq!(top.single(), Some(Card::new(Rank::Queen, Suit::Spades)));
//!
//! let hand = deck.draw(7).unwrap();
//! deck.discard(hand, Some("hand"));
//! assert_eq!(deck.count(), 44);
//! assert_eq!(deck.pile().count_of(Some("hand")), 7);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use deckhand_engine::deck::Deck;
//! use deckhand_engine::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let mut deck = Deck::create_in(&mut store, 2, true).unwrap();
//! deck.draw(3).unwrap();
//! deck.save(&mut store).unwrap();
//!
//! let reloaded = Deck::get(&store, deck.id().unwrap()).unwrap();
//! assert_eq!(reloaded.count(), 101);
//! ```

pub mod cards;
pub mod codec;
pub mod deck;
pub mod errors;
pub mod pile;
pub mod store;
