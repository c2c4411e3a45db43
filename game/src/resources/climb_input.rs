use bevy::prelude::*;

/// Frame-level intent gathered from touches, mouse and keyboard.
#[derive(Resource, Default, Reflect, Debug)]
#[reflect(Resource)]
pub struct ClimbInput {
    /// A press began this frame outside of any UI button.
    pub tapped: bool,
    /// World x the player is being dragged toward, while a pointer is held.
    pub steer_target: Option<f32>,
    /// Keyboard steering in -1..=1.
    pub steer_axis: f32,
    pub toggle_pause: bool,
}
