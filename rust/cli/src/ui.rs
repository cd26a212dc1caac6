//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// `seat 2: 2S AH KD ...` with cards in display order.
pub fn seat_line(seat: usize, cards: &[runfast_engine::cards::Card]) -> String {
    let mut sorted = cards.to_vec();
    runfast_engine::cards::sort_for_display(&mut sorted);
    format!("seat {}: {}", seat, runfast_engine::cards::format_cards(&sorted))
}
