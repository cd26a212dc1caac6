//! Record verification: replays each game record through the engine.
//!
//! A record passes when
//! - its seed, settings and seats reproduce the recorded deal and starting
//!   seat (records without a seed start from the recorded deal instead),
//! - the deal accounts for every card of the deck exactly once,
//! - every recorded action is accepted in order,
//! - the replayed winner equals the recorded one.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use runfast_engine::deck::build_deck;
use runfast_engine::game::RoundState;
use runfast_engine::logger::GameRecord;
use runfast_engine::player::PlayerAction;

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_record_files, read_text_auto};
use crate::ui;

pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut checked = 0usize;
    let mut failures: Vec<BatchValidationError<String>> = Vec::new();

    for file in collect_record_files(path) {
        let name = file.display().to_string();
        let content = read_text_auto(&file.to_string_lossy())
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", name, e)))?;
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            checked += 1;
            let outcome = serde_json::from_str::<GameRecord>(line)
                .map_err(|e| format!("unreadable record: {}", e))
                .and_then(|rec| verify_record(&rec));
            if let Err(message) = outcome {
                failures.push(BatchValidationError {
                    item_context: format!("{}:{}", name, i + 1),
                    message,
                });
            }
        }
    }

    for failure in &failures {
        ui::write_error(err, &failure.to_string())?;
    }
    if failures.is_empty() {
        writeln!(out, "Verify: OK ({} games)", checked)?;
        Ok(())
    } else {
        writeln!(out, "Verify: FAIL ({} of {} games)", failures.len(), checked)?;
        Err(CliError::InvalidInput(format!(
            "{} record(s) failed verification",
            failures.len()
        )))
    }
}

/// Replays one record, returning the first discrepancy.
pub(crate) fn verify_record(rec: &GameRecord) -> Result<(), String> {
    if rec.dealt.len() != rec.seats.len() {
        return Err(format!(
            "{} hands dealt for {} seats",
            rec.dealt.len(),
            rec.seats.len()
        ));
    }
    check_conservation(rec)?;

    let (mut state, _) = match rec.seed {
        Some(seed) => {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            RoundState::start(rec.settings, &rec.seats, &mut rng)
        }
        None => RoundState::from_hands(rec.settings, &rec.seats, rec.dealt.clone()),
    }
    .map_err(|e| format!("cannot start game: {}", e))?;

    for (&seat, dealt) in rec.seats.iter().zip(&rec.dealt) {
        if state.hand_of(seat) != Some(dealt.as_slice()) {
            return Err(format!("seat {} was not dealt the recorded hand", seat));
        }
    }
    if state.current_turn() != rec.starting_seat {
        return Err(format!(
            "starting seat {} does not match replayed {}",
            rec.starting_seat,
            state.current_turn()
        ));
    }

    for (n, act) in rec.actions.iter().enumerate() {
        let result = match &act.action {
            PlayerAction::Play(cards) => state.play_cards(act.seat, cards),
            PlayerAction::Pass => state.pass(act.seat),
        };
        result.map_err(|e| format!("action {} by seat {} rejected: {}", n + 1, act.seat, e))?;
    }

    if state.winner() != rec.winner {
        return Err(format!(
            "winner {:?} does not match replayed {:?}",
            rec.winner,
            state.winner()
        ));
    }
    Ok(())
}

/// The dealt hands hold each card of the configured deck exactly once.
fn check_conservation(rec: &GameRecord) -> Result<(), String> {
    let deck = build_deck(rec.settings.deck_variant);
    let mut seen = HashSet::new();
    for card in rec.dealt.iter().flatten() {
        if !deck.contains(card) {
            return Err(format!("{} is not part of the deck", card));
        }
        if !seen.insert(*card) {
            return Err(format!("{} was dealt twice", card));
        }
    }
    if seen.len() != deck.len() {
        return Err(format!("{} of {} cards dealt", seen.len(), deck.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sim::play_game;
    use runfast_ai::AIOpponent;
    use runfast_ai::baseline::BaselineAI;
    use runfast_engine::engine::Engine;
    use runfast_engine::rules::GameSettings;

    fn simulated() -> GameRecord {
        play_game(GameSettings::default(), 3, 5, &BaselineAI::new()).unwrap()
    }

    #[test]
    fn simulated_game_verifies() {
        assert_eq!(verify_record(&simulated()), Ok(()));
    }

    #[test]
    fn seedless_record_replays_from_deal() {
        let mut rec = simulated();
        rec.seed = None;
        assert_eq!(verify_record(&rec), Ok(()));
    }

    #[test]
    fn wrong_winner_is_reported() {
        let mut rec = simulated();
        let winner = rec.winner.unwrap();
        rec.winner = Some((winner + 1) % 3);
        assert!(verify_record(&rec).unwrap_err().contains("winner"));
    }

    #[test]
    fn tampered_deal_is_reported() {
        let mut rec = simulated();
        let card = rec.dealt[0][0];
        rec.dealt[1][0] = card;
        assert!(verify_record(&rec).unwrap_err().contains("dealt twice"));
    }

    #[test]
    fn dropped_action_is_reported() {
        let mut rec = simulated();
        rec.actions.remove(0);
        assert!(verify_record(&rec).is_err());
    }

    #[test]
    fn later_games_in_one_room_verify() {
        let ai = BaselineAI::new();
        let mut engine = Engine::new(GameSettings::default(), Some(7));
        for seat in 0..3 {
            engine.register_seat(seat, ai.name()).unwrap();
        }
        let mut records = Vec::new();
        for _ in 0..2 {
            engine.start_game().unwrap();
            while let Some(state) = engine.state().filter(|s| !s.is_finished()) {
                let seat = state.current_turn();
                let action = ai.get_action(state, seat);
                engine.handle(seat, action).unwrap();
            }
            records.push(engine.take_record().unwrap());
        }
        assert_eq!(records[1].seed, Some(8));
        for rec in &records {
            assert_eq!(verify_record(rec), Ok(()));
        }
    }
}
