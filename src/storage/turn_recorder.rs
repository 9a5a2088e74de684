// Persistent turn recording as JSON lines, for offline replay
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::BotResult;
use crate::models::{GameMap, Move};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub recorded_at: DateTime<Utc>,
    pub map: GameMap,
    pub moves: Vec<Move>,
}

pub struct TurnRecorder {
    storage_path: String,
    file: File,
    turns_written: u32,
}

impl TurnRecorder {
    /// Start a new recording at `storage_path`, replacing any previous one
    pub fn create(storage_path: &str) -> BotResult<Self> {
        if let Some(parent) = Path::new(storage_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(storage_path)?;

        Ok(Self {
            storage_path: storage_path.to_string(),
            file,
            turns_written: 0,
        })
    }

    pub fn record(&mut self, turn: u32, map: &GameMap, moves: &[Move]) -> BotResult<()> {
        let record = TurnRecord {
            turn,
            recorded_at: Utc::now(),
            map: map.clone(),
            moves: moves.to_vec(),
        };

        let line = serde_json::to_string(&record)?;
        writeln!(self.file, "{}", line)?;
        self.turns_written += 1;
        Ok(())
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }

    pub fn turns_written(&self) -> u32 {
        self.turns_written
    }
}

/// Read every turn of a recording, in the order it was written
pub fn load_recording(path: &str) -> BotResult<Vec<TurnRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }

    Ok(records)
}
