use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::prelude::*;
use crate::components::camera::FollowCamera;
use crate::components::player::Player;
use crate::components::session::Backdrop;
use crate::resources::climb_settings::ClimbSettings;

pub(crate) fn plugin(app: &mut App) {
    app
        .add_systems(Startup, spawn_camera)
        .add_systems(Update, fit_scene_to_window)
        .add_systems(Update, (follow_player, sync_backdrop)
            .chain()
            .after(crate::plugins::physics::physics_step)
            .run_if(in_state(GameState::Playing)));
}

fn spawn_camera(mut commands: Commands, settings: Res<ClimbSettings>) {
    commands.spawn((
        FollowCamera,
        Camera2d,
        Transform::from_xyz(0.0, settings.camera_start_y, 0.0),
    ));
}

/// World units per pixel that keep the whole scene on screen, letterboxing the spare axis.
pub fn fit_scale(scene: Vec2, window: Vec2) -> f32 {
    (scene.x / window.x).max(scene.y / window.y)
}

fn fit_scene_to_window(
    settings: Res<ClimbSettings>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_cam: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(window) = q_window.single() else { return; };
    let Ok(mut transform) = q_cam.single_mut() else { return; };
    if window.width() <= 0.0 || window.height() <= 0.0 { return; }

    let scale = fit_scale(settings.scene_size, window.size());
    if (transform.scale.x - scale).abs() > f32::EPSILON {
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

fn follow_player(
    time: Res<Time>,
    settings: Res<ClimbSettings>,
    q_player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut q_cam: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(player) = q_player.single() else { return; };
    let Ok(mut cam) = q_cam.single_mut() else { return; };

    cam.translation.y = settings.follow_camera(cam.translation.y, player.translation.y, time.delta_secs());
}

fn sync_backdrop(
    q_cam: Query<&Transform, With<FollowCamera>>,
    mut q_backdrop: Query<&mut Transform, (With<Backdrop>, Without<FollowCamera>)>,
) {
    let Ok(cam) = q_cam.single() else { return; };
    for mut transform in q_backdrop.iter_mut() {
        transform.translation.y = cam.translation.y;
    }
}
