use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::MoveKind;
use crate::player::{PlayerAction, SeatId};
use crate::rules::GameSettings;

/// One accepted command in a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted
    pub seat: SeatId,
    /// The accepted action, cards as submitted
    pub action: PlayerAction,
    /// Classified kind for plays, `None` for passes
    #[serde(default)]
    pub kind: Option<MoveKind>,
}

/// Complete record of one game: enough to replay it from its own seed.
/// Serialized to JSONL, one game per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for shuffling
    pub seed: Option<u64>,
    pub settings: GameSettings,
    /// Seats in turn order
    pub seats: Vec<SeatId>,
    /// Hands as dealt, `dealt[i]` belongs to `seats[i]`
    pub dealt: Vec<Vec<Card>>,
    pub starting_seat: SeatId,
    /// Chronological list of accepted actions
    pub actions: Vec<ActionRecord>,
    pub winner: Option<SeatId>,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    pub fn plays(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a.action, PlayerAction::Play(_)))
            .count()
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub fn today() -> String {
    Utc::now().format("%Y%m%d").to_string()
}

/// Appends game records to a JSONL file and issues sequential game ids.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    /// Opens the file at `path` for appending, creating it if missing.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: today(),
            seq: 0,
        })
    }

    /// A logger that writes nowhere, with a fixed date for id generation.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    /// Continue numbering after `seq` already-written games.
    pub fn resume_from(&mut self, seq: u32) {
        self.seq = seq;
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
