//! Configuration command handler.
//!
//! Prints every configuration value with its source (`default`, `file` or
//! `env`) as pretty JSON:
//!
//! ```json
//! {
//!   "seats": { "value": 3, "source": "default" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::display_warning(err, "check RUNFAST_CONFIG and RUNFAST_* variables")?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "seats": { "value": config.seats, "source": sources.seats },
        "deck": { "value": config.deck, "source": sources.deck },
        "first_turn": { "value": config.first_turn, "source": sources.first_turn },
        "three_as_bomb": { "value": config.three_as_bomb, "source": sources.three_as_bomb },
        "ai": { "value": config.ai, "source": sources.ai },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
