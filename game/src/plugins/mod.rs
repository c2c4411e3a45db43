pub mod audio;
pub mod camera;
pub mod debug;
pub mod defaults;
pub mod game;
pub mod hud;
pub mod input;
pub mod leaderboard;
pub mod menu;
pub mod pause;
pub mod physics;
pub mod platforms;
pub mod player;
pub mod records;
pub mod reset;
