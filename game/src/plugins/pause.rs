use bevy::prelude::*;

use crate::prelude::*;
use crate::components::ui::*;
use crate::plugins::menu::{spawn_menu_button, ButtonTint};
use crate::resources::audio_settings::AudioSettings;
use crate::resources::climb_input::ClimbInput;
use crate::resources::score_record::ScoreRecord;

const STEP_BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

pub(crate) fn plugin(app: &mut App) {
    app
        .add_systems(Update, enter_pause_system
            .after(crate::plugins::input::gather_input)
            .run_if(in_state(GameState::Playing)))
        .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
        .add_systems(Update, (pause_menu_interaction_system, update_volume_text_system)
            .chain()
            .after(crate::plugins::input::gather_input)
            .run_if(in_state(GameState::Paused)))
        .add_systems(OnExit(GameState::Paused), cleanup_pause_menu);
}

fn enter_pause_system(
    input: Res<ClimbInput>,
    q_pause: Query<&Interaction, (Changed<Interaction>, With<PauseButton>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let pressed = matches!(q_pause.single(), Ok(Interaction::Pressed));
    if pressed || input.toggle_pause {
        next_state.set(GameState::Paused);
    }
}

fn setup_pause_menu(mut commands: Commands, record: Res<ScoreRecord>, audio: Res<AudioSettings>) {
    commands.spawn((
        PauseRoot,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::VMin(3.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.1, 0.25, 0.92)),
        ZIndex(200),
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new(format!("GLOBAL HIGH SCORE: {}", record.global_high_score)),
            TextFont { font_size: 26.0, ..default() },
            TextColor(Color::WHITE),
        ));
        parent.spawn((
            Text::new(format!("YOUR HIGH SCORE: {}", record.local_high_score)),
            TextFont { font_size: 26.0, ..default() },
            TextColor(Color::WHITE),
        ));

        parent.spawn((
            Text::new("MASTER VOLUME"),
            TextFont { font_size: 24.0, ..default() },
            TextColor(Color::WHITE),
            Node { margin: UiRect::top(Val::VMin(4.0)), ..default() },
        ));

        parent.spawn(Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(20.0),
            ..default()
        })
        .with_children(|row| {
            spawn_step_button(row, VolumeDownButton, "-");
            row.spawn((
                VolumeText,
                Text::new(format!("{}", audio.percent())),
                TextFont { font_size: 28.0, ..default() },
                TextColor(Color::WHITE),
                Node { width: Val::Px(70.0), justify_content: JustifyContent::Center, ..default() },
            ));
            spawn_step_button(row, VolumeUpButton, "+");
        });

        spawn_menu_button(parent, ResumeButton, "RESUME", Color::srgb(0.1, 0.35, 0.7));
    });
}

fn spawn_step_button<T: Component>(parent: &mut ChildSpawnerCommands, marker: T, label: &str) {
    parent.spawn((
        Button,
        marker,
        ButtonTint(STEP_BUTTON_COLOR),
        Interaction::default(),
        Node {
            width: Val::Px(56.0),
            height: Val::Px(56.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(STEP_BUTTON_COLOR),
        BorderRadius::all(Val::Px(10.0)),
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont { font_size: 30.0, ..default() },
            TextColor(Color::WHITE),
        ));
    });
}

fn pause_menu_interaction_system(
    input: Res<ClimbInput>,
    mut audio: ResMut<AudioSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    q_resume: Query<&Interaction, (Changed<Interaction>, With<ResumeButton>)>,
    q_down: Query<&Interaction, (Changed<Interaction>, With<VolumeDownButton>)>,
    q_up: Query<&Interaction, (Changed<Interaction>, With<VolumeUpButton>)>,
) {
    if matches!(q_down.single(), Ok(Interaction::Pressed)) {
        audio.nudge(-1);
    }
    if matches!(q_up.single(), Ok(Interaction::Pressed)) {
        audio.nudge(1);
    }

    if matches!(q_resume.single(), Ok(Interaction::Pressed)) || input.toggle_pause {
        next_state.set(GameState::Playing);
    }
}

fn update_volume_text_system(audio: Res<AudioSettings>, mut q_text: Query<&mut Text, With<VolumeText>>) {
    if !audio.is_changed() { return; }
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = audio.percent().to_string();
    }
}

fn cleanup_pause_menu(mut commands: Commands, q_root: Query<Entity, With<PauseRoot>>) {
    for entity in q_root.iter() {
        commands.entity(entity).despawn();
    }
}
