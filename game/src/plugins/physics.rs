use bevy::prelude::*;

use crate::prelude::*;
use crate::components::block::Block;
use crate::components::player::Player;
use crate::components::spring::Spring;
use crate::resources::climb_settings::ClimbSettings;
use crate::resources::contacts::{PlatformContact, SpringContact};

/// Longest step integrated in one frame, so a hitch cannot tunnel through a platform.
const MAX_STEP_SECS: f32 = 1.0 / 20.0;

pub(crate) fn plugin(app: &mut App) {
    app
        .add_message::<PlatformContact>()
        .add_message::<SpringContact>();
}

/// One-way landing test: only a downward pass through the top edge counts.
pub fn lands_on(
    prev_feet: f32,
    feet: f32,
    player_x: f32,
    player_half_width: f32,
    block_pos: Vec2,
    block_size: Vec2,
) -> bool {
    if feet >= prev_feet {
        return false;
    }
    let top = block_pos.y + block_size.y / 2.0;
    let overlaps_x = (player_x - block_pos.x).abs() <= player_half_width + block_size.x / 2.0;
    overlaps_x && prev_feet >= top && feet <= top
}

pub fn overlaps(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let reach = (a_size + b_size) / 2.0;
    (a_pos.x - b_pos.x).abs() < reach.x && (a_pos.y - b_pos.y).abs() < reach.y
}

/// Integrates the player and reports contacts. Responses live in the player plugin.
pub(crate) fn physics_step(
    time: Res<Time>,
    settings: Res<ClimbSettings>,
    mut q_player: Query<(&mut Player, &mut Transform)>,
    q_blocks: Query<(Entity, &Block, &Transform), Without<Player>>,
    q_springs: Query<(Entity, &Spring, &Transform), (Without<Player>, Without<Block>)>,
    mut platform_contacts: MessageWriter<PlatformContact>,
    mut spring_contacts: MessageWriter<SpringContact>,
) {
    let Ok((mut player, mut transform)) = q_player.single_mut() else { return; };
    if !player.launched { return; }

    let dt = time.delta_secs().min(MAX_STEP_SECS);
    let prev_feet = player.feet(transform.translation.y);

    player.velocity.y += settings.gravity_for(player.velocity.y) * dt;
    transform.translation.x += player.velocity.x * dt;
    transform.translation.y += player.velocity.y * dt;

    let half_width = player.size.x / 2.0;
    let wall = settings.wall_x - half_width;
    if transform.translation.x.abs() > wall {
        transform.translation.x = transform.translation.x.clamp(-wall, wall);
        player.velocity.x = 0.0;
    }

    let feet = player.feet(transform.translation.y);
    let player_x = transform.translation.x;

    let landing = q_blocks
        .iter()
        .filter(|(_, block, block_trans)| {
            lands_on(prev_feet, feet, player_x, half_width, block_trans.translation.truncate(), block.size)
        })
        .map(|(entity, block, block_trans)| (entity, block.top(block_trans.translation.y)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((entity, top)) = landing {
        transform.translation.y = top + player.size.y / 2.0;
        player.velocity.y = 0.0;
        platform_contacts.write(PlatformContact { block: entity });
    }

    let player_pos = transform.translation.truncate();
    for (entity, spring, spring_trans) in q_springs.iter() {
        if overlaps(player_pos, player.size, spring_trans.translation.truncate(), spring.size) {
            spring_contacts.write(SpringContact { spring: entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORM: Vec2 = Vec2::new(75.0, 30.0);

    #[test]
    fn falling_through_top_edge_lands() {
        // top edge at y = 115
        assert!(lands_on(120.0, 110.0, 0.0, 32.0, Vec2::new(0.0, 100.0), PLATFORM));
    }

    #[test]
    fn rising_passes_through() {
        assert!(!lands_on(110.0, 120.0, 0.0, 32.0, Vec2::new(0.0, 100.0), PLATFORM));
    }

    #[test]
    fn missing_horizontally_does_not_land() {
        assert!(!lands_on(120.0, 110.0, 70.0, 32.0, Vec2::new(0.0, 100.0), PLATFORM));
        assert!(lands_on(120.0, 110.0, 69.0, 32.0, Vec2::new(0.0, 100.0), PLATFORM));
    }

    #[test]
    fn already_below_top_does_not_land() {
        assert!(!lands_on(110.0, 100.0, 0.0, 32.0, Vec2::new(0.0, 100.0), PLATFORM));
    }

    #[derive(Resource, Default)]
    struct Landings(Vec<Entity>);

    fn record_landings(mut contacts: MessageReader<PlatformContact>, mut landings: ResMut<Landings>) {
        landings.0.extend(contacts.read().map(|contact| contact.block));
    }

    fn step_app() -> App {
        let mut app = App::new();
        app.init_resource::<ClimbSettings>()
            .init_resource::<Time>()
            .init_resource::<Landings>()
            .add_message::<PlatformContact>()
            .add_message::<SpringContact>()
            .add_systems(Update, (physics_step, record_landings).chain());
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_secs_f32(1.0 / 60.0));
        app.update();
    }

    fn launched_player(velocity: Vec2) -> Player {
        let mut player = Player::new(Vec2::splat(64.0));
        player.launched = true;
        player.velocity = velocity;
        player
    }

    #[test]
    fn falling_player_lands_and_reports_contact() {
        let mut app = step_app();
        let block = app.world_mut()
            .spawn((Block::platform(PLATFORM, false), Transform::from_xyz(0.0, 100.0, 1.0)))
            .id();
        let player = app.world_mut()
            .spawn((launched_player(Vec2::new(0.0, -600.0)), Transform::from_xyz(0.0, 150.0, 2.0)))
            .id();

        step(&mut app);

        assert_eq!(app.world().resource::<Landings>().0, vec![block]);
        let transform = app.world().get::<Transform>(player).unwrap();
        assert_eq!(transform.translation.y, 115.0 + 32.0);
        assert_eq!(app.world().get::<Player>(player).unwrap().velocity.y, 0.0);
    }

    #[test]
    fn highest_crossed_top_wins() {
        let mut app = step_app();
        app.world_mut().spawn((Block::platform(PLATFORM, false), Transform::from_xyz(0.0, 95.0, 1.0)));
        let upper = app.world_mut()
            .spawn((Block::platform(PLATFORM, false), Transform::from_xyz(20.0, 100.0, 1.0)))
            .id();
        let player = app.world_mut()
            .spawn((launched_player(Vec2::new(0.0, -600.0)), Transform::from_xyz(0.0, 150.0, 2.0)))
            .id();

        step(&mut app);

        assert_eq!(app.world().resource::<Landings>().0, vec![upper]);
        assert_eq!(app.world().get::<Transform>(player).unwrap().translation.y, 147.0);
    }

    #[test]
    fn walls_clamp_and_stop_sideways_motion() {
        let mut app = step_app();
        let player = app.world_mut()
            .spawn((launched_player(Vec2::new(600.0, 0.0)), Transform::from_xyz(300.0, 500.0, 2.0)))
            .id();

        step(&mut app);

        let wall = ClimbSettings::default().wall_x - 32.0;
        assert_eq!(app.world().get::<Transform>(player).unwrap().translation.x, wall);
        assert_eq!(app.world().get::<Player>(player).unwrap().velocity.x, 0.0);
    }

    #[test]
    fn idle_player_does_not_move() {
        let mut app = step_app();
        app.world_mut().spawn((Block::platform(PLATFORM, false), Transform::from_xyz(0.0, 100.0, 1.0)));
        let mut idle = launched_player(Vec2::new(0.0, -600.0));
        idle.launched = false;
        let player = app.world_mut().spawn((idle, Transform::from_xyz(0.0, 150.0, 2.0))).id();

        step(&mut app);

        assert_eq!(app.world().get::<Transform>(player).unwrap().translation.y, 150.0);
        assert!(app.world().resource::<Landings>().0.is_empty());
    }

    #[test]
    fn overlap_is_strict() {
        let size = Vec2::splat(32.0);
        assert!(overlaps(Vec2::ZERO, size, Vec2::new(31.0, 0.0), size));
        assert!(!overlaps(Vec2::ZERO, size, Vec2::new(32.0, 0.0), size));
    }
}
