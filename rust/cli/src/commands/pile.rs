//! Pile command handler.

use std::io::Write;

use deckhand_engine::codec::encode_card;
use deckhand_engine::deck::Deck;
use deckhand_engine::errors::DeckError;
use deckhand_engine::pile::DEFAULT_PILE;
use deckhand_engine::store::{DeckId, DeckStore};
use serde_json::json;

use crate::error::CliError;
use crate::ui;

/// Print `{"pile": name, "cards": [...]}` for one pile of a stored deck,
/// bottom card first.
pub fn handle_pile_command(
    store: &mut dyn DeckStore,
    id: &str,
    name: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let deck = Deck::get(&*store, &DeckId::from(id))?;
    let name = name.unwrap_or(DEFAULT_PILE);
    if !deck.pile().contains(name) {
        return Err(DeckError::NoSuchPile(name.to_string()).into());
    }
    let cards: Vec<_> = deck.pile().show(Some(name)).iter().map(encode_card).collect();
    ui::write_json(out, &json!({ "pile": name, "cards": cards }))?;
    Ok(())
}
