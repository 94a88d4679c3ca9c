//! Create command handler.

use std::io::Write;

use deckhand_engine::deck::Deck;
use deckhand_engine::store::DeckStore;

use crate::config::Config;
use crate::error::CliError;
use crate::ui;

/// Build a deck of `count` 52-card sets, persist it and print its record.
///
/// The deck is shuffled unless `no_shuffle` is set or the configuration turns
/// shuffling off. A `--seed` flag wins over a configured seed.
pub fn handle_create_command(
    store: &mut dyn DeckStore,
    config: &Config,
    count: u32,
    no_shuffle: bool,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let shuffle = config.shuffle && !no_shuffle;
    let n = count as usize;
    let deck = match seed.or(config.seed) {
        Some(seed) => Deck::new_with_seed(n, shuffle, seed)?,
        None => Deck::new(n, shuffle)?,
    };
    let deck = deck.insert_into(store)?;
    ui::write_json(out, &deck.encode())?;
    Ok(())
}
