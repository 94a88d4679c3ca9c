//! Draw command handler.

use std::io::Write;

use deckhand_engine::cards::Card;
use deckhand_engine::codec::encode_card;
use deckhand_engine::deck::{Deck, DrawRequest};
use deckhand_engine::store::{DeckId, DeckStore};
use serde_json::json;

use crate::error::CliError;
use crate::ui;

/// Draw from a stored deck (or one of its piles), save it, and print
/// `{"cards": [...]}` in draw order.
///
/// A failed draw leaves the stored deck untouched.
pub fn handle_draw_command(
    store: &mut dyn DeckStore,
    id: &str,
    count: u32,
    till: Option<&str>,
    from_pile: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let till = till.map(str::parse::<Card>).transpose()?;
    let mut deck = Deck::get(&*store, &DeckId::from(id))?;
    let request = DrawRequest {
        count: count as usize,
        till,
        from_pile: from_pile.map(str::to_string),
    };
    let drawn = deck.draw_with(&request)?;
    deck.save(store)?;

    let cards: Vec<_> = drawn.as_slice().iter().map(encode_card).collect();
    ui::write_json(out, &json!({ "cards": cards }))?;
    Ok(())
}
