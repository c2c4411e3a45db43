use bevy::prelude::*;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::color::palettes::css::*;

use crate::prelude::*;
use crate::components::ui::*;
use crate::resources::leaderboard::{Leaderboard, LeaderboardStatus, VISIBLE_ROWS};
use crate::resources::player_profile::PlayerProfile;
use crate::resources::reset_target::ResetTarget;
use crate::resources::score::Score;
use crate::resources::score_record::{ScoreRecord, ScoreStore};

const NAME_PLACEHOLDER: &str = "TYPE NAME...";
const BUTTON_HOVER: Color = Color::srgb(0.3, 0.3, 0.3);

pub(crate) fn plugin(app: &mut App) {
    app
        .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
        .add_systems(Update, ui_button_hover_system)
        .add_systems(Update, (
            main_menu_system,
            username_typing_system,
            update_leaderboard_ui_system,
            update_menu_high_score_system,
        ).run_if(in_state(GameState::MainMenu)))
        .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
        .add_systems(OnEnter(GameState::GameOver), setup_game_over_menu.after(crate::plugins::records::finish_run))
        .add_systems(Update, (game_over_interaction_system, update_global_high_score_system)
            .run_if(in_state(GameState::GameOver)))
        .add_systems(OnExit(GameState::GameOver), cleanup_game_over_menu);
}

fn full_screen_column() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        row_gap: Val::VMin(2.0),
        position_type: PositionType::Absolute,
        ..default()
    }
}

fn setup_main_menu(mut commands: Commands, record: Res<ScoreRecord>, profile: Res<PlayerProfile>) {
    commands.spawn((
        MainMenuRoot,
        full_screen_column(),
        BackgroundColor(Color::srgba(0.35, 0.7, 0.95, 0.6)),
        ZIndex(200),
    ))
    .with_children(|menu| {
        menu.spawn((
            Text::new("SKY CLIMBER"),
            TextFont { font_size: 64.0, ..default() },
            TextColor(Color::from(DARK_GREEN)),
        ));

        menu.spawn((
            MenuHighScoreText,
            Text::new(format!("HIGH SCORE: {}", record.local_high_score)),
            TextFont { font_size: 28.0, ..default() },
            TextColor(Color::WHITE),
        ));

        menu.spawn((
            Text::new("Help him climb!"),
            TextFont { font_size: 22.0, ..default() },
            TextColor(Color::WHITE),
            Node { margin: UiRect::bottom(Val::VMin(3.0)), ..default() },
        ));

        menu.spawn((
            Node {
                width: Val::Px(250.0),
                height: Val::Px(50.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(5.0)),
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 1.0)),
        ))
        .with_children(|p| {
            let (label, color) = if profile.username.is_empty() {
                (NAME_PLACEHOLDER.to_string(), Color::from(GRAY))
            } else {
                (profile.username.clone(), Color::WHITE)
            };
            p.spawn((
                UsernameInputText,
                Text::new(label),
                TextFont { font_size: 20.0, ..default() },
                TextColor(color),
            ));
        });

        spawn_menu_button(menu, StartButton, "START", Color::srgb(0.1, 0.5, 0.2));
        spawn_menu_button(menu, ShowLeaderboardButton, "LEADERBOARD", Color::srgb(0.2, 0.2, 0.4));
        spawn_menu_button(menu, ExitButton, "EXIT", Color::srgb(0.4, 0.1, 0.1));

        menu.spawn((
            LeaderboardPanel,
            Interaction::default(),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.95)),
            Visibility::Hidden,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Node {
                    width: Val::Percent(90.0),
                    max_width: Val::Px(500.0),
                    padding: UiRect::all(Val::Px(24.0)),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(10.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                BorderRadius::all(Val::Px(15.0)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new("TOP CLIMBERS"),
                    TextFont { font_size: 32.0, ..default() },
                    TextColor(Color::from(YELLOW)),
                ));
                panel.spawn((
                    LeaderboardStatusText,
                    Text::new(""),
                    TextFont { font_size: 16.0, ..default() },
                    TextColor(Color::from(GRAY)),
                ));
                panel.spawn((
                    LeaderboardList,
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        width: Val::Percent(100.0),
                        ..default()
                    },
                ));
                spawn_menu_button(panel, CloseLeaderboardButton, "BACK", Color::srgb(0.3, 0.3, 0.3));
            });
        });
    });
}

fn spawn_leaderboard_row(parent: &mut ChildSpawnerCommands, rank: usize, name: &str, score: i64) {
    parent.spawn((
        Node {
            display: Display::Flex,
            justify_content: JustifyContent::SpaceBetween,
            width: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(8.0)),
            border: UiRect::bottom(Val::Px(1.0)),
            ..default()
        },
        BorderColor::from(BLACK),
    ))
    .with_children(|row| {
        row.spawn((
            Text::new(format!("{rank}. {name}")),
            TextFont { font_size: 18.0, ..default() },
            TextColor(Color::WHITE),
        ));
        row.spawn((
            Text::new(score.to_string()),
            TextFont { font_size: 18.0, ..default() },
            TextColor(Color::from(LIGHT_CYAN)),
        ));
    });
}

fn main_menu_system(
    mut next_state: ResMut<NextState<GameState>>,
    profile: Res<PlayerProfile>,
    store: Res<ScoreStore>,
    mut record: ResMut<ScoreRecord>,
    q_start: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    q_exit: Query<&Interaction, (Changed<Interaction>, With<ExitButton>)>,
    q_lb_show: Query<&Interaction, (Changed<Interaction>, With<ShowLeaderboardButton>)>,
    q_lb_close: Query<&Interaction, (Changed<Interaction>, With<CloseLeaderboardButton>)>,
    mut q_panel: Query<&mut Visibility, With<LeaderboardPanel>>,
    mut exit_events: MessageWriter<AppExit>,
) {
    let Ok(mut panel_visibility) = q_panel.single_mut() else { return; };

    if *panel_visibility != Visibility::Hidden {
        if let Ok(Interaction::Pressed) = q_lb_close.single() {
            *panel_visibility = Visibility::Hidden;
        }
        return;
    }

    if let Ok(Interaction::Pressed) = q_start.single() {
        if record.set_username(&profile.username) {
            crate::plugins::records::save_record(&store, &record);
        }
        info!("starting run as {}", record.username);
        next_state.set(GameState::Playing);
    }

    if let Ok(Interaction::Pressed) = q_lb_show.single() {
        *panel_visibility = Visibility::Inherited;
    }

    if let Ok(Interaction::Pressed) = q_exit.single() {
        exit_events.write(AppExit::Success);
    }
}

fn username_typing_system(
    mut key_msgs: MessageReader<KeyboardInput>,
    mut profile: ResMut<PlayerProfile>,
    mut q_text: Query<(&mut Text, &mut TextColor), With<UsernameInputText>>,
) {
    let mut changed = false;

    for event in key_msgs.read() {
        if !event.state.is_pressed() { continue; }

        match &event.logical_key {
            Key::Backspace => {
                changed |= profile.username.pop().is_some();
            }
            Key::Character(chars) => {
                changed |= profile.push_chars(chars);
            }
            _ => {}
        }
    }

    if !changed { return; }
    if let Ok((mut text, mut color)) = q_text.single_mut() {
        if profile.username.is_empty() {
            text.0 = NAME_PLACEHOLDER.to_string();
            color.0 = Color::from(GRAY);
        } else {
            text.0 = profile.username.clone();
            color.0 = Color::WHITE;
        }
    }
}

/// Rebuilds the list whenever the board changes, or once after the menu is spawned.
fn update_leaderboard_ui_system(
    mut commands: Commands,
    leaderboard: Res<Leaderboard>,
    q_list: Query<Entity, Added<LeaderboardList>>,
    q_existing: Query<Entity, With<LeaderboardList>>,
    mut q_status: Query<&mut Text, With<LeaderboardStatusText>>,
) {
    let fresh = q_list.single().ok();
    if !leaderboard.is_changed() && fresh.is_none() { return; }
    let Some(list) = fresh.or_else(|| q_existing.single().ok()) else { return; };

    if let Ok(mut status) = q_status.single_mut() {
        status.0 = match leaderboard.status {
            LeaderboardStatus::Pending => "LOADING...".to_string(),
            LeaderboardStatus::Live => String::new(),
            LeaderboardStatus::Offline => "OFFLINE".to_string(),
        };
    }

    commands.entity(list).despawn_children();
    let rows = leaderboard.padded(VISIBLE_ROWS);
    commands.entity(list).with_children(|parent| {
        for (rank, (name, score)) in rows.iter().enumerate() {
            spawn_leaderboard_row(parent, rank + 1, name, *score);
        }
    });
}

fn update_menu_high_score_system(record: Res<ScoreRecord>, mut q_text: Query<&mut Text, With<MenuHighScoreText>>) {
    if !record.is_changed() { return; }
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format!("HIGH SCORE: {}", record.local_high_score);
    }
}

fn cleanup_main_menu(mut commands: Commands, q: Query<Entity, With<MainMenuRoot>>) {
    for entity in q.iter() {
        commands.entity(entity).despawn();
    }
}

fn setup_game_over_menu(mut commands: Commands, score: Res<Score>, record: Res<ScoreRecord>) {
    commands.spawn((
        GameOverRoot,
        full_screen_column(),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
        ZIndex(200),
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("GAME OVER"),
            TextFont { font_size: 64.0, ..default() },
            TextColor(Color::srgb(1.0, 0.2, 0.2)),
        ));
        parent.spawn((
            GlobalHighScoreText,
            Text::new(format!("GLOBAL HIGH SCORE: {}", record.global_high_score)),
            TextFont { font_size: 24.0, ..default() },
            TextColor(Color::from(YELLOW)),
        ));
        parent.spawn((
            Text::new(format!("HIGH SCORE: {}", record.local_high_score)),
            TextFont { font_size: 24.0, ..default() },
            TextColor(Color::WHITE),
        ));
        parent.spawn((
            Text::new(format!("SCORE: {}", score.current)),
            TextFont { font_size: 40.0, ..default() },
            TextColor(Color::WHITE),
            Node { margin: UiRect::bottom(Val::VMin(3.0)), ..default() },
        ));

        spawn_menu_button(parent, RestartButton, "RESTART", Color::srgb(0.1, 0.5, 0.2));
        spawn_menu_button(parent, MainMenuButton, "MAIN MENU", Color::srgb(0.2, 0.2, 0.4));
    });
}

fn game_over_interaction_system(
    mut next_state: ResMut<NextState<GameState>>,
    mut reset_target: ResMut<ResetTarget>,
    q_restart: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    q_menu: Query<&Interaction, (Changed<Interaction>, With<MainMenuButton>)>,
) {
    if let Ok(Interaction::Pressed) = q_restart.single() {
        reset_target.0 = GameState::Playing;
        next_state.set(GameState::Resetting);
    }

    if let Ok(Interaction::Pressed) = q_menu.single() {
        reset_target.0 = GameState::MainMenu;
        next_state.set(GameState::Resetting);
    }
}

fn update_global_high_score_system(record: Res<ScoreRecord>, mut q_text: Query<&mut Text, With<GlobalHighScoreText>>) {
    if !record.is_changed() { return; }
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format!("GLOBAL HIGH SCORE: {}", record.global_high_score);
    }
}

fn cleanup_game_over_menu(mut commands: Commands, q_root: Query<Entity, With<GameOverRoot>>) {
    for entity in q_root.iter() {
        commands.entity(entity).despawn();
    }
}

fn ui_button_hover_system(
    mut q_buttons: Query<(&Interaction, &mut BackgroundColor, &ButtonTint), Changed<Interaction>>,
) {
    for (interaction, mut bg, tint) in q_buttons.iter_mut() {
        bg.0 = match *interaction {
            Interaction::Hovered | Interaction::Pressed => BUTTON_HOVER,
            Interaction::None => tint.0,
        };
    }
}

/// Resting colour of a menu button, restored when the pointer leaves it.
#[derive(Component)]
pub(crate) struct ButtonTint(pub(crate) Color);

pub(crate) fn spawn_menu_button<T: Component>(
    parent: &mut ChildSpawnerCommands,
    marker: T,
    label: &str,
    color: Color,
) {
    parent.spawn((
        Button,
        marker,
        ButtonTint(color),
        Interaction::default(),
        Node {
            width: Val::Px(250.0),
            height: Val::Px(60.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(color),
        BorderRadius::all(Val::Px(10.0)),
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont { font_size: 25.0, ..default() },
            TextColor(Color::WHITE),
        ));
    });
}
