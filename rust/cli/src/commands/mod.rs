//! Command handler modules for the deckhand CLI.
//!
//! Every handler follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - The deck store is injected as `&mut dyn DeckStore`, so handlers run
//!   against the file store in production and a memory store in tests
//! - Output streams (`&mut dyn Write`) are passed as parameters
//! - Errors propagate through the `CliError` enum

mod cfg;
mod create;
mod delete;
mod discard;
mod draw;
mod pile;
mod shuffle;
mod show;

pub use cfg::handle_cfg_command;
pub use create::handle_create_command;
pub use delete::handle_delete_command;
pub use discard::handle_discard_command;
pub use draw::handle_draw_command;
pub use pile::handle_pile_command;
pub use shuffle::handle_shuffle_command;
pub use show::handle_show_command;
