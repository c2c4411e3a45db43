use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::camera::FollowCamera;
use crate::resources::climb_input::ClimbInput;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<ClimbInput>()
        .register_type::<ClimbInput>()
        .add_systems(Update, gather_input);
}

/// Folds touch, mouse and keyboard into [`ClimbInput`]. Presses that land on UI buttons
/// are left to the UI.
pub(crate) fn gather_input(
    mut input: ResMut<ClimbInput>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<FollowCamera>>,
    q_buttons: Query<&Interaction, With<Button>>,
) {
    let over_ui = q_buttons.iter().any(|interaction| *interaction != Interaction::None);

    let pressed_now = mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed();
    input.tapped = keys.just_pressed(KeyCode::Space) || (pressed_now && !over_ui);
    input.toggle_pause = keys.just_pressed(KeyCode::Escape) || keys.just_pressed(KeyCode::KeyP);

    let mut axis = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) { axis -= 1.0; }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) { axis += 1.0; }
    input.steer_axis = axis;

    let pointer = if let Some(pos) = touches.first_pressed_position() {
        Some(pos)
    } else if mouse.pressed(MouseButton::Left) {
        q_window.single().ok().and_then(|window| window.cursor_position())
    } else {
        None
    };

    input.steer_target = match (pointer, q_camera.single()) {
        (Some(pos), Ok((camera, cam_transform))) if !over_ui => camera
            .viewport_to_world_2d(cam_transform, pos)
            .ok()
            .map(|world| world.x),
        _ => None,
    };
}
