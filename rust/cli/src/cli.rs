//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deckhand_engine::deck::MAX_SETS;

#[derive(Parser, Debug)]
#[command(
    name = "deckhand",
    version,
    about = "Create, draw from and discard into persisted card decks"
)]
pub struct DeckhandCli {
    /// Directory holding deck records (overrides DECKHAND_STORE_DIR)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a deck of one or more 52-card sets and print its record
    Create {
        /// Number of 52-card sets
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=MAX_SETS as i64)
        )]
        count: u32,
        /// Keep the canonical order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a deck's record
    Show { id: String },
    /// Draw cards from the deck or from one of its piles
    Draw {
        id: String,
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            conflicts_with = "till"
        )]
        count: u32,
        /// Keep drawing until this card (e.g. "Queen of Spades") comes up
        #[arg(long, conflicts_with = "from_pile")]
        till: Option<String>,
        /// Draw from the named pile instead of the deck
        #[arg(long)]
        from_pile: Option<String>,
    },
    /// Discard cards into a pile
    Discard {
        id: String,
        /// A card such as "10 of Hearts"; repeatable
        #[arg(long = "card")]
        cards: Vec<String>,
        /// JSON array of {"rank", "suit"} records
        #[arg(long)]
        cards_json: Option<String>,
        /// Target pile (defaults to "discard")
        #[arg(long)]
        into: Option<String>,
    },
    /// Print the contents of a pile
    Pile {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Shuffle the remaining cards of a deck
    Shuffle { id: String },
    /// Delete a deck
    Delete { id: String },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
