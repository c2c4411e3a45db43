use bevy::prelude::*;

use crate::prelude::*;
use crate::components::block::Block;
use crate::components::camera::FollowCamera;
use crate::components::player::Player;
use crate::components::session::RunEntity;
use crate::components::spring::Spring;
use crate::resources::climb_input::ClimbInput;
use crate::resources::climb_settings::ClimbSettings;
use crate::resources::contacts::{PlatformContact, SpringContact};
use crate::resources::score::ScoreMessage;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<ClimbSettings>()
        .register_type::<ClimbSettings>()
        .register_type::<Player>()
        .add_systems(OnEnter(GameState::Playing), spawn_player.run_if(not(any_with_component::<Player>)))
        .add_systems(Update, (
            launch_and_steer,
            crate::plugins::physics::physics_step,
            resolve_contacts,
            loss_check,
        ).chain()
            .after(crate::plugins::input::gather_input)
            .after(crate::plugins::platforms::move_platforms)
            .run_if(in_state(GameState::Playing))
            .run_if(any_with_component::<Player>));
}

fn spawn_player(mut commands: Commands, settings: Res<ClimbSettings>) {
    let start = settings.player_start();
    commands.spawn((
        RunEntity,
        Player::new(settings.player_size),
        Sprite::from_color(Color::srgb(0.85, 0.25, 0.3), settings.player_size),
        Transform::from_xyz(start.x, start.y, 2.0),
    ));
}

fn launch_and_steer(
    input: Res<ClimbInput>,
    settings: Res<ClimbSettings>,
    mut q_player: Query<(&mut Player, &Transform)>,
) {
    let Ok((mut player, transform)) = q_player.single_mut() else { return; };

    if input.tapped && !player.launched {
        player.launched = true;
        player.velocity.y = settings.jump_speed;
        info!("first jump");
    }

    if !player.launched { return; }

    player.velocity.x = if let Some(target_x) = input.steer_target {
        ((target_x - transform.translation.x) * settings.steer_gain)
            .clamp(-settings.max_steer_speed, settings.max_steer_speed)
    } else {
        input.steer_axis.clamp(-1.0, 1.0) * settings.max_steer_speed
    };
}

/// Landing chains straight into the next jump; first landing on a block scores it.
pub(crate) fn resolve_contacts(
    settings: Res<ClimbSettings>,
    mut platform_contacts: MessageReader<PlatformContact>,
    mut spring_contacts: MessageReader<SpringContact>,
    mut q_player: Query<&mut Player>,
    mut q_blocks: Query<&mut Block>,
    mut q_springs: Query<&mut Spring>,
    mut score_msg: MessageWriter<ScoreMessage>,
) {
    let Ok(mut player) = q_player.single_mut() else { return; };

    for contact in platform_contacts.read() {
        player.velocity.y = settings.jump_speed;
        if let Ok(mut block) = q_blocks.get_mut(contact.block) {
            if block.claim_score() {
                score_msg.write(ScoreMessage(1));
            }
        }
    }

    for contact in spring_contacts.read() {
        player.velocity.y = settings.spring_jump_speed();
        if let Ok(mut spring) = q_springs.get_mut(contact.spring) {
            if spring.bounce.is_none() {
                spring.bounce = Some(0.0);
                debug!("spring jump");
            }
        }
    }
}

fn loss_check(
    settings: Res<ClimbSettings>,
    q_player: Query<(&Player, &Transform)>,
    q_cam: Query<&Transform, (With<FollowCamera>, Without<Player>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok((player, transform)) = q_player.single() else { return; };
    let Ok(cam) = q_cam.single() else { return; };

    if settings.is_below_view(cam.translation.y, transform.translation.y, player.size.y) {
        info!("player fell out of view at y={:.0}", transform.translation.y);
        next_state.set(GameState::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use crate::resources::score::Score;

    fn contact_app() -> App {
        let mut app = App::new();
        app.init_resource::<ClimbSettings>()
            .init_resource::<Score>()
            .add_message::<PlatformContact>()
            .add_message::<SpringContact>()
            .add_message::<ScoreMessage>()
            .add_systems(Update, (resolve_contacts, crate::plugins::hud::score_event_handler).chain());
        app
    }

    fn land_on(app: &mut App, block: Entity) {
        app.world_mut()
            .resource_mut::<Messages<PlatformContact>>()
            .write(PlatformContact { block });
        app.update();
    }

    #[test]
    fn landing_scores_once_and_jumps() {
        let mut app = contact_app();
        let player = app.world_mut().spawn(Player::new(Vec2::splat(64.0))).id();
        let block = app.world_mut().spawn(Block::platform(Vec2::new(75.0, 30.0), false)).id();

        land_on(&mut app, block);
        land_on(&mut app, block);

        assert_eq!(app.world().resource::<Score>().current, 1);
        assert!(app.world().get::<Block>(block).unwrap().scored);
        let jump = app.world().resource::<ClimbSettings>().jump_speed;
        assert_eq!(app.world().get::<Player>(player).unwrap().velocity.y, jump);
    }

    #[test]
    fn base_floor_bounces_without_scoring() {
        let mut app = contact_app();
        app.world_mut().spawn(Player::new(Vec2::splat(64.0)));
        let floor = app.world_mut().spawn(Block::base_floor(Vec2::new(750.0, 300.0))).id();

        land_on(&mut app, floor);

        assert_eq!(app.world().resource::<Score>().current, 0);
    }

    #[test]
    fn spring_triggers_super_jump() {
        let mut app = contact_app();
        let player = app.world_mut().spawn(Player::new(Vec2::splat(64.0))).id();
        let spring = app.world_mut().spawn(Spring::new(Vec2::splat(32.0))).id();

        app.world_mut()
            .resource_mut::<Messages<SpringContact>>()
            .write(SpringContact { spring });
        app.update();

        let expected = app.world().resource::<ClimbSettings>().spring_jump_speed();
        assert_eq!(app.world().get::<Player>(player).unwrap().velocity.y, expected);
        assert_eq!(app.world().get::<Spring>(spring).unwrap().bounce, Some(0.0));
    }

    fn loss_app(player_y: f32) -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin)
            .init_state::<GameState>()
            .init_resource::<ClimbSettings>()
            .add_systems(Update, loss_check);
        app.world_mut().spawn((FollowCamera, Transform::from_xyz(0.0, 400.0, 0.0)));
        app.world_mut().spawn((Player::new(Vec2::splat(64.0)), Transform::from_xyz(0.0, player_y, 2.0)));
        app.world_mut().resource_mut::<NextState<GameState>>().set(GameState::Playing);
        app.update();
        app
    }

    #[test]
    fn falling_past_the_view_ends_the_run() {
        // 400 - (y - 64) > 667 + 100 once y drops below -303
        let mut app = loss_app(-310.0);
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::GameOver);
    }

    #[test]
    fn staying_in_view_keeps_playing() {
        let mut app = loss_app(-300.0);
        app.update();
        assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::Playing);
    }
}
