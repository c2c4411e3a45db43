use bevy::prelude::*;
use crate::prelude::*;

/// State entered once `GameState::Resetting` has cleared the previous run.
#[derive(Resource)]
pub struct ResetTarget(pub GameState);

impl Default for ResetTarget {
    fn default() -> Self {
        Self(GameState::MainMenu)
    }
}
