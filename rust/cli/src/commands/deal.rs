//! Deal command handler.
//!
//! Deals one game to the configured number of seats and prints each seat's
//! hand in display order, plus the seat that acts first.

use crate::config;
use crate::error::CliError;
use crate::ui;
use runfast_engine::engine::Engine;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    seats: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(n) = seats {
        cfg.seats = n;
    }
    config::validate(&cfg)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut engine = Engine::new(cfg.settings(), Some(seed));
    for seat in 0..cfg.seats {
        engine.register_seat(seat, format!("seat{}", seat))?;
    }
    engine.start_game()?;
    let state = engine
        .state()
        .ok_or_else(|| CliError::Engine("no game after start".into()))?;

    writeln!(out, "Seed: {}", seed)?;
    for seat in state.seated() {
        let hand = state.hand_of(seat).unwrap_or_default();
        writeln!(out, "{}", ui::seat_line(seat, hand))?;
    }
    writeln!(out, "Starting seat: {}", state.current_turn())?;
    Ok(())
}
