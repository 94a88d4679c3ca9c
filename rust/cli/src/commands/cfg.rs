//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file, env or cli).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "store_dir": {
//!     "value": ".deckhand",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::ConfigResolved;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "store_dir": {
            "value": config.store_dir,
            "source": sources.store_dir,
        },
        "shuffle": {
            "value": config.shuffle,
            "source": sources.shuffle,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    ui::write_json(out, &display)?;
    Ok(())
}
