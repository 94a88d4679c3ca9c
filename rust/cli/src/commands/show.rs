//! Show command handler.

use std::io::Write;

use deckhand_engine::deck::Deck;
use deckhand_engine::store::{DeckId, DeckStore};

use crate::error::CliError;
use crate::ui;

/// Print the full record of a stored deck.
pub fn handle_show_command(
    store: &mut dyn DeckStore,
    id: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let deck = Deck::get(&*store, &DeckId::from(id))?;
    ui::write_json(out, &deck.encode())?;
    Ok(())
}
