use std::io::Write;

use runfast_engine::cards::{format_cards, parse_cards};
use runfast_engine::hand::classify;

use crate::error::CliError;

/// Prints `<kind> <strength> <cards>` for the given card tokens.
/// An invalid set is still printed, then reported as an error.
pub fn handle_classify_command(
    cards: &[String],
    three_as_bomb: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let hand = classify(&cards, three_as_bomb);
    writeln!(
        out,
        "{} {} [{}]",
        hand.kind,
        hand.strength,
        format_cards(&hand.cards)
    )?;
    if !hand.is_valid() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a playable move",
            format_cards(&cards)
        )));
    }
    Ok(())
}
