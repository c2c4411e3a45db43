use anyhow::Context;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const VISIBLE_ROWS: usize = 10;
pub const PLACEHOLDER_NAME: &str = "---";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub highscore: i64,
}

/// The whole cloud-hosted leaderboard object. It is always read and written in full.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardDocument {
    pub players: Vec<LeaderboardEntry>,
}

impl LeaderboardDocument {
    /// Lenient parse: an empty body or `null` is an empty board and malformed player
    /// rows are skipped.
    pub fn from_slice(bytes: &[u8]) -> anyhow::Result<Self> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self::default());
        }

        let raw: serde_json::Value =
            serde_json::from_slice(bytes).context("leaderboard body is not JSON")?;

        let mut players = Vec::new();
        if let Some(rows) = raw.get("players").and_then(|v| v.as_array()) {
            for row in rows {
                if let (Some(name), Some(highscore)) = (
                    row.get("name").and_then(|v| v.as_str()),
                    row.get("highscore").and_then(|v| v.as_i64()),
                ) {
                    players.push(LeaderboardEntry { name: name.to_string(), highscore });
                }
            }
        }

        Ok(Self { players })
    }

    pub fn to_json_bytes(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec(self).context("failed to encode leaderboard")
    }

    /// Raises `name`'s entry to `score` or appends it. Existing scores are never lowered.
    pub fn upsert(&mut self, name: &str, score: u64) -> bool {
        let score = i64::try_from(score).unwrap_or(i64::MAX);
        match self.players.iter_mut().find(|p| p.name == name) {
            Some(entry) if entry.highscore >= score => false,
            Some(entry) => {
                entry.highscore = score;
                true
            }
            None => {
                self.players.push(LeaderboardEntry { name: name.to_string(), highscore: score });
                true
            }
        }
    }

    /// Highest score on the board. Negative rows count as zero.
    pub fn best(&self) -> Option<u64> {
        self.players.iter().map(|p| p.highscore).max().map(|best| best.max(0) as u64)
    }

    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut rows = self.players.clone();
        rows.sort_by(|a, b| b.highscore.cmp(&a.highscore).then_with(|| a.name.cmp(&b.name)));
        rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum LeaderboardStatus {
    #[default]
    Pending,
    Live,
    Offline,
}

/// What the menus show. Refreshed from the cloud on every visit to the main menu.
#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct Leaderboard {
    pub entries: Vec<(String, i64)>,
    pub status: LeaderboardStatus,
}

impl Leaderboard {
    pub fn apply(&mut self, document: &LeaderboardDocument) {
        self.entries = document
            .ranked()
            .into_iter()
            .map(|entry| (entry.name, entry.highscore))
            .collect();
        self.status = LeaderboardStatus::Live;
    }

    pub fn mark_offline(&mut self) {
        self.status = LeaderboardStatus::Offline;
    }

    /// Exactly `rows` lines, topped up with placeholders.
    pub fn padded(&self, rows: usize) -> Vec<(String, i64)> {
        let mut out: Vec<(String, i64)> = self.entries.iter().take(rows).cloned().collect();
        while out.len() < rows {
            out.push((PLACEHOLDER_NAME.to_string(), 0));
        }
        out
    }
}
