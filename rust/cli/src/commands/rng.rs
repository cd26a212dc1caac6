//! Random number generator verification command.
//!
//! Prints the first values of the ChaCha20 stream for a seed together with
//! the head of the deck that seed shuffles, so a deal can be checked by hand.

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use runfast_engine::cards::format_cards;
use runfast_engine::deck::{build_deck, shuffle, DeckVariant};
use std::io::Write;

pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let deck = shuffle(build_deck(DeckVariant::Standard48), &mut rng);
    writeln!(out, "Deck head: {}", format_cards(&deck[..8]))?;
    Ok(())
}
