//! Command-line argument definitions for the `runfast` binary.

use clap::{Parser, Subcommand};

/// Run Fast rules engine driver.
#[derive(Parser, Debug)]
#[command(name = "runfast", version, about = "Run Fast rules engine CLI")]
pub struct RunfastCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Deal one game and print every seat's hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        seats: Option<usize>,
    },
    /// Classify a card set, e.g. `runfast classify 3H 3S 3D 7C 9C`
    Classify {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Count triple Aces as the top bomb
        #[arg(long)]
        three_as_bomb: bool,
    },
    /// Play games between computer opponents
    Sim {
        #[arg(long)]
        games: u64,
        #[arg(long)]
        seats: Option<usize>,
        /// Base seed; game i is dealt from seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Append game records (JSONL) to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize game records from a JSONL file or directory
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Replay game records through the engine and check them
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Print a ChaCha20 sample for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Cfg => "cfg",
            Commands::Deal { .. } => "deal",
            Commands::Classify { .. } => "classify",
            Commands::Sim { .. } => "sim",
            Commands::Stats { .. } => "stats",
            Commands::Verify { .. } => "verify",
            Commands::Rng { .. } => "rng",
        }
    }
}

pub const COMMANDS: &[&str] = &["cfg", "deal", "classify", "sim", "stats", "verify", "rng"];
