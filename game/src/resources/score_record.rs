use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "Guest";
const RECORD_FILE: &str = "score_record.json";

/// The single per-device score record.
#[derive(Resource, Reflect, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[reflect(Resource)]
#[serde(default)]
pub struct ScoreRecord {
    pub local_high_score: u64,
    /// Last known best score across all players, cached from the cloud.
    pub global_high_score: u64,
    pub username: String,
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self {
            local_high_score: 0,
            global_high_score: 0,
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOutcome {
    pub new_local_best: bool,
    pub new_global_best: bool,
}

impl RunOutcome {
    pub fn changed(&self) -> bool {
        self.new_local_best || self.new_global_best
    }
}

impl ScoreRecord {
    /// Folds a finished run into the record. Both high scores only ever go up.
    pub fn record_run(&mut self, score: u64) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        if score > self.local_high_score {
            self.local_high_score = score;
            outcome.new_local_best = true;
        }
        if score > self.global_high_score {
            self.global_high_score = score;
            outcome.new_global_best = true;
        }
        outcome
    }

    pub fn observe_global(&mut self, best: u64) -> bool {
        if best > self.global_high_score {
            self.global_high_score = best;
            true
        } else {
            false
        }
    }

    /// Blank names are ignored.
    pub fn set_username(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == self.username {
            return false;
        }
        self.username = trimmed.to_string();
        true
    }
}

/// File-backed storage for [`ScoreRecord`].
#[derive(Resource, Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl Default for ScoreStore {
    fn default() -> Self {
        let dir = ProjectDirs::from("com", "skyclimber", "Sky Climber")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::at(dir.join(RECORD_FILE))
    }
}

impl ScoreStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record, creating and persisting a fresh one on first launch.
    pub fn load_or_create(&self) -> anyhow::Result<ScoreRecord> {
        if self.path.exists() {
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read {}", self.path.display()))?;
            let record = serde_json::from_str(&raw)
                .with_context(|| format!("corrupt score record at {}", self.path.display()))?;
            return Ok(record);
        }

        let record = ScoreRecord::default();
        self.save(&record)?;
        Ok(record)
    }

    pub fn save(&self, record: &ScoreRecord) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(record).context("failed to encode score record")?;
        fs::write(&tmp, data).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
