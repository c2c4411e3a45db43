use bevy::prelude::*;

use crate::prelude::*;
use crate::components::camera::FollowCamera;
use crate::components::session::RunEntity;
use crate::resources::climb_input::ClimbInput;
use crate::resources::climb_settings::ClimbSettings;
use crate::resources::platform_spawner::PlatformSpawner;
use crate::resources::reset_target::ResetTarget;
use crate::resources::score::Score;
use crate::resources::session_time::SessionTime;
use crate::resources::spawn_settings::SpawnSettings;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<ResetTarget>()
        .add_systems(OnEnter(GameState::Resetting), reset_run);
}

/// Clears every trace of the last run, then moves on to whatever asked for the reset.
fn reset_run(
    mut commands: Commands,
    climb: Res<ClimbSettings>,
    spawn: Res<SpawnSettings>,
    target: Res<ResetTarget>,
    mut score: ResMut<Score>,
    mut spawner: ResMut<PlatformSpawner>,
    mut session_time: ResMut<SessionTime>,
    mut input: ResMut<ClimbInput>,
    q_run: Query<Entity, With<RunEntity>>,
    mut q_cam: Query<&mut Transform, With<FollowCamera>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for entity in q_run.iter() {
        commands.entity(entity).despawn();
    }

    score.current = 0;
    spawner.reset(&spawn);
    *session_time = SessionTime::default();
    *input = ClimbInput::default();

    if let Ok(mut cam) = q_cam.single_mut() {
        cam.translation.y = climb.camera_start_y;
    }

    info!("run reset, heading to {:?}", target.0);
    next_state.set(target.0.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn reset_clears_the_run_and_enters_target() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<GameState>()
            .init_resource::<ClimbSettings>()
            .init_resource::<SpawnSettings>()
            .init_resource::<ClimbInput>()
            .insert_resource(ResetTarget(GameState::Playing))
            .insert_resource(Score { current: 9 })
            .insert_resource(PlatformSpawner { next_y: 4200.0, total_blocks: 30 })
            .insert_resource(SessionTime { elapsed: 75.0 })
            .add_plugins(plugin);

        let cam = app.world_mut().spawn((FollowCamera, Transform::from_xyz(0.0, 3100.0, 0.0))).id();
        let platform = app.world_mut().spawn((RunEntity, Transform::default())).id();
        let hud = app.world_mut().spawn(RunEntity).id();
        app.world_mut().resource_mut::<ClimbInput>().tapped = true;

        app.world_mut().resource_mut::<NextState<GameState>>().set(GameState::Resetting);
        app.update();
        app.update();

        let world = app.world();
        assert_eq!(*world.resource::<State<GameState>>().get(), GameState::Playing);
        assert_eq!(world.resource::<Score>().current, 0);
        let spawner = world.resource::<PlatformSpawner>();
        assert_eq!(spawner.total_blocks, 0);
        assert_eq!(spawner.next_y, SpawnSettings::default().first_platform_y);
        assert_eq!(world.resource::<SessionTime>().elapsed, 0.0);
        assert!(!world.resource::<ClimbInput>().tapped);
        assert_eq!(world.get::<Transform>(cam).unwrap().translation.y, ClimbSettings::default().camera_start_y);
        assert!(world.get_entity(platform).is_err());
        assert!(world.get_entity(hud).is_err());
    }
}
