use bevy::prelude::*;

#[derive(Component)]
pub struct MainMenuRoot;

#[derive(Component)]
pub struct StartButton;

#[derive(Component)]
pub struct ShowLeaderboardButton;

#[derive(Component)]
pub struct CloseLeaderboardButton;

#[derive(Component)]
pub struct ExitButton;

#[derive(Component)]
pub struct LeaderboardPanel;

#[derive(Component)]
pub struct LeaderboardList;

#[derive(Component)]
pub struct LeaderboardStatusText;

#[derive(Component)]
pub struct UsernameInputText;

#[derive(Component)]
pub struct MenuHighScoreText;

#[derive(Component)]
pub struct GameOverRoot;

#[derive(Component)]
pub struct RestartButton;

#[derive(Component)]
pub struct MainMenuButton;

#[derive(Component)]
pub struct GlobalHighScoreText;

#[derive(Component)]
pub struct PauseRoot;

#[derive(Component)]
pub struct ResumeButton;

#[derive(Component)]
pub struct VolumeDownButton;

#[derive(Component)]
pub struct VolumeUpButton;

#[derive(Component)]
pub struct VolumeText;

#[derive(Component)]
pub struct ScoreHud;

#[derive(Component)]
pub struct ScoreHudText;

#[derive(Component)]
pub struct PauseButton;

#[derive(Component)]
pub struct TapHintText;
