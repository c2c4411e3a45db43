use bevy::prelude::*;

use crate::prelude::*;
use crate::components::session::Backdrop;
use crate::resources::climb_settings::ClimbSettings;
use crate::resources::session_time::SessionTime;

const BACKDROP_SIZE: Vec2 = Vec2::new(750.0, 2000.0);
const BACKDROP_COLOR: Color = Color::srgb(0.55, 0.78, 0.95);
const WALL_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);
const WALL_WIDTH: f32 = 4.0;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_state::<GameState>()
        .register_type::<GameState>()
        .init_resource::<SessionTime>()
        .register_type::<SessionTime>()
        .add_systems(Startup, spawn_backdrop)
        .add_systems(Update, track_session_time.run_if(in_state(GameState::Playing)));
}

/// Sky panel plus the two side walls, all riding along with the camera.
fn spawn_backdrop(mut commands: Commands, settings: Res<ClimbSettings>) {
    commands
        .spawn((
            Backdrop,
            Sprite::from_color(BACKDROP_COLOR, BACKDROP_SIZE),
            Transform::from_xyz(0.0, settings.camera_start_y, -10.0),
        ))
        .with_children(|parent| {
            for side in [-1.0, 1.0] {
                parent.spawn((
                    Sprite::from_color(WALL_COLOR, Vec2::new(WALL_WIDTH, BACKDROP_SIZE.y)),
                    Transform::from_xyz(side * settings.wall_x, 0.0, 0.5),
                ));
            }
        });
}

fn track_session_time(time: Res<Time>, mut session_time: ResMut<SessionTime>) {
    session_time.elapsed += time.delta_secs();
}
