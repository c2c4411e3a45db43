use bevy::prelude::*;

use crate::prelude::*;
use crate::components::block::{Block, Oscillator};
use crate::components::camera::FollowCamera;
use crate::components::player::Player;
use crate::components::session::RunEntity;
use crate::components::spring::Spring;
use crate::resources::climb_settings::ClimbSettings;
use crate::resources::platform_spawner::{PlatformPlan, PlatformSpawner};
use crate::resources::score::{Score, ScoreMessage};
use crate::resources::session_time::SessionTime;
use crate::resources::spawn_settings::SpawnSettings;

const BASE_FLOOR_COLOR: Color = Color::srgb(0.3, 0.22, 0.15);
const SPRING_COLOR: Color = Color::srgb(0.95, 0.8, 0.1);

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<SpawnSettings>()
        .init_resource::<PlatformSpawner>()
        .register_type::<SpawnSettings>()
        .register_type::<PlatformSpawner>()
        .register_type::<Block>()
        .register_type::<Oscillator>()
        .register_type::<Spring>()
        .add_systems(OnEnter(GameState::Playing), spawn_base_floor.run_if(not(any_with_component::<Player>)))
        .add_systems(Update, (
            move_platforms,
            animate_springs,
        ).run_if(in_state(GameState::Playing)))
        .add_systems(Update, (
            recycle_offscreen,
            spawn_platforms,
        ).chain()
            .after(crate::plugins::player::resolve_contacts)
            .run_if(in_state(GameState::Playing)));
}

fn spawn_base_floor(mut commands: Commands, settings: Res<ClimbSettings>) {
    let size = settings.base_floor_size();
    commands.spawn((
        RunEntity,
        Block::base_floor(size),
        Sprite::from_color(BASE_FLOOR_COLOR, size),
        Transform::from_xyz(0.0, settings.base_floor_y, 1.0),
    ));
}

fn spawn_platforms(
    mut commands: Commands,
    climb: Res<ClimbSettings>,
    spawn: Res<SpawnSettings>,
    score: Res<Score>,
    session: Res<SessionTime>,
    mut spawner: ResMut<PlatformSpawner>,
    q_blocks: Query<&Block>,
) {
    let live = q_blocks.iter().filter(|block| !block.base_floor).count();
    if live >= spawn.live_blocks { return; }

    let mut rng = rand::rng();
    for _ in live..spawn.live_blocks {
        let plan = spawner.plan_next(&mut rng, &climb, &spawn, score.current, session.second_of_minute());
        spawn_platform(&mut commands, &climb, &spawn, &plan);
    }
}

fn spawn_platform(commands: &mut Commands, climb: &ClimbSettings, spawn: &SpawnSettings, plan: &PlatformPlan) {
    let size = climb.platform_size();
    let mut block = commands.spawn((
        RunEntity,
        Block::platform(size, plan.moving),
        Sprite {
            flip_x: plan.moving,
            ..Sprite::from_color(plan.material.color(), size)
        },
        Transform::from_xyz(plan.position.x, plan.position.y, 1.0),
    ));

    if plan.moving {
        block.insert(Oscillator {
            origin_x: plan.position.x,
            amplitude: climb.scene_size.x / 2.0 - size.x,
            leg_secs: plan.leg_secs,
            elapsed: 0.0,
        });
    }

    if plan.with_spring {
        let spring_size = Vec2::splat(spawn.spring_size);
        commands.spawn((
            RunEntity,
            Spring::new(spring_size),
            Sprite::from_color(SPRING_COLOR, spring_size),
            Transform::from_xyz(plan.position.x, plan.position.y + spawn.spring_lift, 1.0),
        ));
    }
}

pub(crate) fn move_platforms(time: Res<Time>, mut q_blocks: Query<(&mut Oscillator, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut oscillator, mut transform) in q_blocks.iter_mut() {
        oscillator.elapsed += dt;
        transform.translation.x = oscillator.x();
    }
}

fn animate_springs(time: Res<Time>, mut q_springs: Query<(&mut Spring, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut spring, mut transform) in q_springs.iter_mut() {
        let Some(t) = spring.bounce else { continue; };
        let t = t + dt;
        spring.bounce = (t < crate::components::spring::BOUNCE_HALF_SECS * 2.0).then_some(t);
        transform.scale.y = spring.bounce_scale();
    }
}

/// Removes whatever scrolled below the view. A block passed without landing still scores.
/// The base floor stays until the run is reset.
pub(crate) fn recycle_offscreen(
    mut commands: Commands,
    settings: Res<ClimbSettings>,
    q_cam: Query<&Transform, With<FollowCamera>>,
    mut q_blocks: Query<(Entity, &mut Block, &Transform), Without<FollowCamera>>,
    q_springs: Query<(Entity, &Spring, &Transform), (Without<FollowCamera>, Without<Block>)>,
    mut score_msg: MessageWriter<ScoreMessage>,
) {
    let Ok(cam) = q_cam.single() else { return; };
    let camera_y = cam.translation.y;

    for (entity, mut block, transform) in q_blocks.iter_mut() {
        if block.base_floor { continue; }
        if settings.is_below_view(camera_y, transform.translation.y, block.size.y) {
            if block.claim_score() {
                score_msg.write(ScoreMessage(1));
            }
            commands.entity(entity).despawn();
        }
    }

    for (entity, spring, transform) in q_springs.iter() {
        if settings.is_below_view(camera_y, transform.translation.y, spring.size.y) {
            commands.entity(entity).despawn();
        }
    }
}
