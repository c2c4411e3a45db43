pub mod audio_settings;
pub mod climb_input;
pub mod climb_settings;
pub mod contacts;
pub mod leaderboard;
pub mod leaderboard_channel;
pub mod leaderboard_config;
pub mod platform_spawner;
pub mod player_profile;
pub mod reset_target;
pub mod score;
pub mod score_record;
pub mod session_time;
pub mod spawn_settings;
