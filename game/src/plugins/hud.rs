use bevy::prelude::*;

use crate::prelude::*;
use crate::components::player::Player;
use crate::components::session::RunEntity;
use crate::components::ui::*;
use crate::resources::score::{Score, ScoreMessage};

const SCORE_COLOR: Color = Color::srgb(0.0, 0.39, 0.0);

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<Score>()
        .register_type::<Score>()
        .add_message::<ScoreMessage>()
        .add_systems(OnEnter(GameState::Playing), spawn_score_hud.run_if(not(any_with_component::<ScoreHud>)))
        .add_systems(Update, (
            (score_event_handler, update_score_hud_system).chain(),
            hide_tap_hint_system,
        ).after(crate::plugins::platforms::recycle_offscreen)
            .run_if(in_state(GameState::Playing)));
}

pub(crate) fn score_event_handler(
    mut messages: MessageReader<ScoreMessage>,
    mut score: ResMut<Score>,
) {
    for msg in messages.read() {
        score.current += msg.0;
    }
}

fn spawn_score_hud(mut commands: Commands) {
    commands.spawn((
        ScoreHud,
        RunEntity,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            ..default()
        },
        ZIndex(100),
    ))
    .with_children(|parent| {
        parent.spawn((
            Button,
            PauseButton,
            Interaction::default(),
            Node {
                position_type: PositionType::Absolute,
                top: Val::VMin(4.0),
                right: Val::VMin(4.0),
                width: Val::Px(56.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            BorderRadius::all(Val::Px(10.0)),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("II"),
                TextFont { font_size: 28.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });

        parent.spawn((
            ScoreHudText,
            Text::new("0"),
            TextFont { font_size: 65.0, ..default() },
            TextColor(SCORE_COLOR),
            Node { margin: UiRect::top(Val::VMin(14.0)), ..default() },
        ));

        parent.spawn((
            TapHintText,
            Text::new("TAP TO JUMP"),
            TextFont { font_size: 28.0, ..default() },
            TextColor(Color::WHITE),
            Node { margin: UiRect::top(Val::VMin(30.0)), ..default() },
        ));
    });
}

fn update_score_hud_system(
    score: Res<Score>,
    mut q_text: Query<&mut Text, With<ScoreHudText>>,
) {
    if score.is_changed() {
        if let Ok(mut text) = q_text.single_mut() {
            text.0 = score.current.to_string();
        }
    }
}

fn hide_tap_hint_system(
    q_player: Query<&Player, Changed<Player>>,
    mut q_hint: Query<&mut Visibility, With<TapHintText>>,
) {
    let Ok(player) = q_player.single() else { return; };
    if let Ok(mut vis) = q_hint.single_mut() {
        *vis = if player.launched { Visibility::Hidden } else { Visibility::Inherited };
    }
}
