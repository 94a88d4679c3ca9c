//! Discard command handler.

use std::io::Write;

use deckhand_engine::cards::Card;
use deckhand_engine::codec::encode_card;
use deckhand_engine::deck::Deck;
use deckhand_engine::pile::DEFAULT_PILE;
use deckhand_engine::store::{DeckId, DeckStore};
use serde_json::{json, Value};

use crate::error::CliError;
use crate::ui;

/// Discard cards into a pile of a stored deck, save it, and print the pile.
///
/// Cards come from repeated `--card` values and/or a `--cards-json` array;
/// `--card` values are pushed first. Nothing is pushed unless every card is
/// valid.
pub fn handle_discard_command(
    store: &mut dyn DeckStore,
    id: &str,
    cards: &[String],
    cards_json: Option<&str>,
    into: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if cards.is_empty() && cards_json.is_none() {
        return Err(CliError::InvalidInput(
            "nothing to discard: pass --card or --cards-json".into(),
        ));
    }
    let mut records = cards
        .iter()
        .map(|c| -> Result<Value, CliError> {
            let card: Card = c.parse()?;
            Ok(serde_json::to_value(encode_card(&card))?)
        })
        .collect::<Result<Vec<Value>, CliError>>()?;
    if let Some(text) = cards_json {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(extra)) => records.extend(extra),
            Ok(_) => {
                return Err(CliError::InvalidInput(
                    "--cards-json must be a JSON array".into(),
                ));
            }
            Err(e) => return Err(CliError::InvalidInput(format!("--cards-json: {}", e))),
        }
    }

    let mut deck = Deck::get(&*store, &DeckId::from(id))?;
    deck.discard_encoded(&records, into)?;
    deck.save(store)?;

    let name = into.unwrap_or(DEFAULT_PILE);
    let pile: Vec<_> = deck.pile().show(Some(name)).iter().map(encode_card).collect();
    ui::write_json(out, &json!({ "pile": name, "cards": pile }))?;
    Ok(())
}
