use bevy::prelude::*;

/// Anything that belongs to a single run and is despawned on reset.
#[derive(Component)]
pub struct RunEntity;

#[derive(Component)]
pub struct Backdrop;
