//! # Run Fast CLI Library
//!
//! Command-line driver for the Run Fast rules engine: deal and classify
//! cards, run self-play simulations between computer opponents, and
//! summarize or re-verify the recorded games.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, executes the subcommand and returns the exit
//! code. Output streams are injected so commands can be driven from tests.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = runfast_cli::run(["runfast", "classify", "5H", "5S"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("pair"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `cfg`: Display the resolved configuration with sources
//! - `deal`: Deal one game for inspection
//! - `classify`: Classify a card set into a move kind and strength
//! - `sim`: Self-play games and optionally record them as JSONL
//! - `stats`: Aggregate JSONL game records
//! - `verify`: Replay game records through the engine
//! - `rng`: Print a seeded RNG sample

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, RunfastCli};
use commands::{
    handle_cfg_command, handle_classify_command, handle_deal_command, handle_rng_command,
    handle_sim_command, handle_stats_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

/// Parses `args` and runs the selected subcommand.
///
/// Returns `0` on success, `2` on errors and `130` when interrupted.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RunfastCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let command = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal { seed, seats } => handle_deal_command(seed, seats, out),
        Commands::Classify {
            cards,
            three_as_bomb,
        } => handle_classify_command(&cards, three_as_bomb, out),
        Commands::Sim {
            games,
            seats,
            seed,
            ai,
            output,
        } => handle_sim_command(games, seats, seed, ai, output, out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Verify { input } => match input {
            Some(path) => handle_verify_command(path, out, err),
            None => Err(CliError::InvalidInput("input required".to_string())),
        },
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(command, error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            e.exit_code()
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Run Fast CLI")?;
    writeln!(err, "Usage: runfast <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: runfast --help")
}
