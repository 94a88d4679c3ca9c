//! Delete command handler.

use std::io::Write;

use deckhand_engine::deck::Deck;
use deckhand_engine::store::{DeckId, DeckStore};

use crate::error::CliError;

pub fn handle_delete_command(
    store: &mut dyn DeckStore,
    id: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = Deck::get(&*store, &DeckId::from(id))?;
    deck.delete(store)?;
    writeln!(out, "Deleted {}", id)?;
    Ok(())
}
