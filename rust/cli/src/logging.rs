//! Diagnostic logging for the `runfast` binary.
//!
//! The engine reports game starts, accepted moves and rejected commands as
//! `tracing` events. The binary routes them to stderr, filtered by
//! `RUNFAST_LOG` (same syntax as `RUST_LOG`, default `warn`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RUNFAST_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
