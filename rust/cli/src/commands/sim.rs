//! Simulation command: self-play between computer opponents.
//!
//! Every seat is driven by the same AI. Game `i` runs in a fresh room seeded
//! with `seed + i`, so any single game can be replayed from its record.
//!
//! # Environment Variables
//!
//! - `RUNFAST_SIM_BREAK_AFTER`: stop after N games as if interrupted (for testing)

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use runfast_ai::{create_ai, AIOpponent, AVAILABLE_AIS};
use runfast_engine::engine::Engine;
use runfast_engine::logger::{GameLogger, GameRecord};
use runfast_engine::rules::GameSettings;

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Upper bound on commands per game; a game that runs longer is reported as
/// an engine error instead of looping forever.
const MAX_ACTIONS_PER_GAME: usize = 2_000;

#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    games: u64,
    seats: Option<usize>,
    seed: Option<u64>,
    ai: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let mut cfg = config::load()?;
    if let Some(n) = seats {
        cfg.seats = n;
    }
    if let Some(name) = ai {
        cfg.ai = name;
    }
    config::validate(&cfg)?;
    let opponent = create_ai(&cfg.ai).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown ai '{}', expected one of: {}",
            cfg.ai,
            AVAILABLE_AIS.join(", ")
        ))
    })?;

    let mut logger = match output.as_deref() {
        Some(path) => Some(open_logger(path)?),
        None => None,
    };
    let break_after = std::env::var("RUNFAST_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let settings = cfg.settings();
    let mut wins: BTreeMap<usize, u64> = (0..cfg.seats).map(|s| (s, 0)).collect();

    for i in 0..games {
        if break_after == Some(i) {
            writeln!(out, "Interrupted: saved {}/{}", i, games)?;
            return Err(CliError::Interrupted(format!("stopped after {} games", i)));
        }
        let mut record = play_game(settings, cfg.seats, base_seed.wrapping_add(i), &*opponent)?;
        if let Some(winner) = record.winner {
            *wins.entry(winner).or_default() += 1;
        }
        if let Some(logger) = logger.as_mut() {
            record.game_id = logger.next_id();
            record.meta = Some(serde_json::json!({ "ai": opponent.name() }));
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated: {} games", games)?;
    for (seat, n) in &wins {
        writeln!(out, "seat {}: {} wins", seat, n)?;
    }
    if logger.is_none() {
        ui::display_warning(err, "no --output given, records were not saved")?;
    }
    Ok(())
}

fn open_logger(path: &str) -> Result<GameLogger, CliError> {
    let path = PathBuf::from(path);
    ensure_parent_dir(&path).map_err(CliError::InvalidInput)?;
    let existing = std::fs::read_to_string(&path)
        .map(|s| s.lines().filter(|l| !l.trim().is_empty()).count())
        .unwrap_or(0);
    let mut logger = GameLogger::append(&path)?;
    logger.resume_from(existing as u32);
    Ok(logger)
}

/// Plays one complete game in a fresh room and returns its record.
pub(crate) fn play_game(
    settings: GameSettings,
    seats: usize,
    seed: u64,
    ai: &dyn AIOpponent,
) -> Result<GameRecord, CliError> {
    let mut engine = Engine::new(settings, Some(seed));
    for seat in 0..seats {
        engine.register_seat(seat, ai.name())?;
    }
    engine.start_game()?;

    for _ in 0..MAX_ACTIONS_PER_GAME {
        let Some(state) = engine.state().filter(|s| !s.is_finished()) else {
            break;
        };
        let seat = state.current_turn();
        let action = ai.get_action(state, seat);
        engine.handle(seat, action)?;
        engine.drain_events();
    }
    if engine.is_in_progress() {
        return Err(CliError::Engine(format!(
            "game with seed {} did not finish within {} actions",
            seed, MAX_ACTIONS_PER_GAME
        )));
    }
    engine
        .take_record()
        .ok_or_else(|| CliError::Engine("game record missing".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use runfast_ai::baseline::BaselineAI;

    #[test]
    fn baseline_games_always_finish() {
        for seed in 0..20 {
            for seats in 2..=4 {
                let record = play_game(GameSettings::default(), seats, seed, &BaselineAI::new())
                    .unwrap();
                let winner = record.winner.unwrap();
                assert!(winner < seats);
                assert!(record.plays() > 0);
            }
        }
    }

    #[test]
    fn games_replay_from_seed() {
        let ai = BaselineAI::new();
        let a = play_game(GameSettings::default(), 3, 99, &ai).unwrap();
        let b = play_game(GameSettings::default(), 3, 99, &ai).unwrap();
        assert_eq!(a.dealt, b.dealt);
        assert_eq!(a.actions, b.actions);
    }
}
