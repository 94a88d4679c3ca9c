//! # deckhand CLI Library
//!
//! Command-line front end for the deckhand deck engine. Decks are stored as
//! one JSON record per deck in a store directory and addressed by the id
//! printed when they are created.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["deckhand", "create", "--count", "2"];
//! let code = deckhand_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `create`: Create a deck and print its record
//! - `show`: Print a deck's record
//! - `draw`: Draw by count, until a card, or from a pile
//! - `discard`: Discard cards into a pile
//! - `pile`: Print one pile
//! - `shuffle`: Shuffle the remaining draw pile
//! - `delete`: Delete a deck
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod store;
pub mod ui;

use cli::{Commands, DeckhandCli};
use commands::{
    handle_cfg_command, handle_create_command, handle_delete_command, handle_discard_command,
    handle_draw_command, handle_pile_command, handle_show_command, handle_shuffle_command,
};
pub use error::CliError;
use store::FileStore;

const COMMANDS: &[&str] = &[
    "create", "show", "draw", "discard", "pile", "shuffle", "delete", "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DeckhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    match dispatch(cli, out) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cli: DeckhandCli, out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?.with_store_override(cli.store);
    let settings = &resolved.config;
    let open_store = || FileStore::open(&settings.store_dir);

    match cli.cmd {
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Create {
            count,
            no_shuffle,
            seed,
        } => handle_create_command(&mut open_store()?, settings, count, no_shuffle, seed, out),
        Commands::Show { id } => handle_show_command(&mut open_store()?, &id, out),
        Commands::Draw {
            id,
            count,
            till,
            from_pile,
        } => handle_draw_command(
            &mut open_store()?,
            &id,
            count,
            till.as_deref(),
            from_pile.as_deref(),
            out,
        ),
        Commands::Discard {
            id,
            cards,
            cards_json,
            into,
        } => handle_discard_command(
            &mut open_store()?,
            &id,
            &cards,
            cards_json.as_deref(),
            into.as_deref(),
            out,
        ),
        Commands::Pile { id, name } => {
            handle_pile_command(&mut open_store()?, &id, name.as_deref(), out)
        }
        Commands::Shuffle { id } => handle_shuffle_command(&mut open_store()?, &id, out),
        Commands::Delete { id } => handle_delete_command(&mut open_store()?, &id, out),
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "Usage: deckhand [--store DIR] <command> [options]\n");
            let _ = writeln!(err, "Commands:");
            for c in COMMANDS {
                let _ = writeln!(err, "  {}", c);
            }
            let _ = writeln!(err, "\nFor full help, run: deckhand --help");
            exit_code::ERROR
        }
    }
}
