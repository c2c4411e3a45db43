use bevy::prelude::*;

/// Platforms cleared in the current run.
#[derive(Resource, Default, Reflect, Debug)]
#[reflect(Resource)]
pub struct Score {
    pub current: u32,
}

#[derive(Message)]
pub struct ScoreMessage(pub u32);
