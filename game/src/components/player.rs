use bevy::prelude::*;

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct Player {
    pub velocity: Vec2,
    pub size: Vec2,
    /// False until the first tap; the player idles on the floor until then.
    pub launched: bool,
}

impl Player {
    pub fn new(size: Vec2) -> Self {
        Self { velocity: Vec2::ZERO, size, launched: false }
    }

    pub fn feet(&self, center_y: f32) -> f32 {
        center_y - self.size.y / 2.0
    }
}
