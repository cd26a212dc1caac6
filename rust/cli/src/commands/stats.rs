//! Statistics aggregation over JSONL game records.
//!
//! Reads a file or a directory tree of `.jsonl` / `.jsonl.zst` records and
//! reports the number of games, wins per seat and the mean number of plays
//! and actions per game. Unparseable lines are counted and reported.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use runfast_engine::logger::GameRecord;

use crate::error::CliError;
use crate::io_utils::{collect_record_files, read_text_auto};
use crate::ui;

#[derive(Default)]
struct StatsState {
    games: u64,
    unfinished: u64,
    wins: BTreeMap<usize, u64>,
    plays: u64,
    actions: u64,
    skipped: u64,
    corrupted: u64,
}

impl StatsState {
    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: GameRecord = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(_) => {
                    // a torn final line is an interrupted write, not corruption
                    if i == lines.len() - 1 && !has_trailing_nl {
                        self.skipped += 1;
                    } else {
                        self.corrupted += 1;
                    }
                    continue;
                }
            };
            self.games += 1;
            self.plays += rec.plays() as u64;
            self.actions += rec.actions.len() as u64;
            match rec.winner {
                Some(w) => *self.wins.entry(w).or_default() += 1,
                None => self.unfinished += 1,
            }
        }
    }

    fn mean(&self, total: u64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            total as f64 / self.games as f64
        }
    }
}

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        for file in collect_record_files(path) {
            match read_text_auto(&file.to_string_lossy()) {
                Ok(content) => state.consume(&content),
                Err(_) => state.corrupted += 1,
            }
        }
    } else {
        let content = read_text_auto(&input)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
        state.consume(&content);
    }

    if state.corrupted > 0 {
        ui::display_warning(err, &format!("Skipped {} corrupted record(s)", state.corrupted))?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.games == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let wins: BTreeMap<String, u64> = state
        .wins
        .iter()
        .map(|(seat, n)| (seat.to_string(), *n))
        .collect();
    let summary = serde_json::json!({
        "games": state.games,
        "unfinished": state.unfinished,
        "wins": wins,
        "mean_plays": state.mean(state.plays),
        "mean_actions": state.mean(state.actions),
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runfast_engine::logger::ActionRecord;
    use runfast_engine::player::PlayerAction;
    use runfast_engine::rules::GameSettings;

    fn record(winner: Option<usize>, plays: usize) -> String {
        let rec = GameRecord {
            game_id: "20250101-000001".into(),
            seed: Some(1),
            settings: GameSettings::default(),
            seats: vec![0, 1],
            dealt: vec![vec![], vec![]],
            starting_seat: 0,
            actions: (0..plays)
                .map(|i| ActionRecord {
                    seat: i % 2,
                    action: PlayerAction::Play(vec![]),
                    kind: None,
                })
                .collect(),
            winner,
            ts: None,
            meta: None,
        };
        serde_json::to_string(&rec).unwrap()
    }

    fn stats_of(content: &str) -> (Result<(), CliError>, String, String) {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp, content.as_bytes()).unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_stats_command(path, &mut out, &mut err);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_stats_empty_file() {
        let (res, out, _) = stats_of("");
        assert!(res.is_ok());
        assert!(out.contains("\"games\": 0"));
    }

    #[test]
    fn counts_wins_and_mean_plays() {
        let content = format!(
            "{}\n{}\n{}\n",
            record(Some(0), 4),
            record(Some(1), 2),
            record(None, 0)
        );
        let (res, out, _) = stats_of(&content);
        assert!(res.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["games"], 3);
        assert_eq!(json["unfinished"], 1);
        assert_eq!(json["wins"]["0"], 1);
        assert_eq!(json["wins"]["1"], 1);
        assert_eq!(json["mean_plays"], 2.0);
    }

    #[test]
    fn test_stats_corrupted_record() {
        let content = format!("{}\n{{invalid json}}\n{}\n", record(Some(0), 1), record(Some(1), 1));
        let (res, out, err) = stats_of(&content);
        assert!(res.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["games"], 2);
        assert!(err.contains("corrupted"));
    }

    #[test]
    fn torn_final_line_is_discarded() {
        let content = format!("{}\n{{\"game_id\":", record(Some(0), 1));
        let (res, _, err) = stats_of(&content);
        assert!(res.is_ok());
        assert!(err.contains("incomplete final line"));
    }

    #[test]
    fn test_stats_nonexistent_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_stats_command("/nonexistent/games.jsonl".into(), &mut out, &mut err);
        assert!(res.is_err());
    }
}
