use bevy::prelude::*;

pub const DEFAULT_OBJECT_KEY: &str = "data.json";

/// Location of the cloud leaderboard object. Baked in at build time from `.env`.
#[derive(Resource, Debug, Clone)]
pub struct LeaderboardConfig {
    pub base_url: Option<String>,
    pub object_key: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("LEADERBOARD_URL")
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            object_key: option_env!("LEADERBOARD_KEY")
                .unwrap_or(DEFAULT_OBJECT_KEY)
                .to_string(),
        }
    }
}

impl LeaderboardConfig {
    pub fn object_url(&self) -> Option<String> {
        let base = self.base_url.as_deref()?;
        Some(format!("{}/{}", base.trim_end_matches('/'), self.object_key.trim_start_matches('/')))
    }
}
