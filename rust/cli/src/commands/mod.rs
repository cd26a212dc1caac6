//! Command handler modules for the `runfast` CLI.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_<command>_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write`.

mod cfg;
mod classify;
mod deal;
mod rng;
mod sim;
mod stats;
mod verify;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use verify::handle_verify_command;
