//! Shuffle command handler.

use std::io::Write;

use deckhand_engine::deck::Deck;
use deckhand_engine::store::{DeckId, DeckStore};

use crate::error::CliError;

/// Shuffle the remaining draw pile of a stored deck. Discard piles keep their
/// order.
pub fn handle_shuffle_command(
    store: &mut dyn DeckStore,
    id: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = Deck::get(&*store, &DeckId::from(id))?;
    deck.shuffle();
    deck.save(store)?;
    writeln!(out, "Shuffled {} ({} cards)", id, deck.count())?;
    Ok(())
}
