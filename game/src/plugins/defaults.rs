use bevy::{asset::AssetMetaCheck, prelude::*};

const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
const WINDOW_SIZE: (u32, u32) = (390, 844);

/// Portrait window that fills its canvas on web.
fn primary_window() -> Window {
    Window {
        title: "Sky Climber".into(),
        resizable: true,
        resolution: WINDOW_SIZE.into(),
        canvas: Some("#bevy".to_owned()),
        desired_maximum_frame_latency: core::num::NonZero::new(1u32),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        ..default()
    }
}

pub(crate) fn plugin(app: &mut App) {
    let plugins = DefaultPlugins
        .set(AssetPlugin {
            meta_check: AssetMetaCheck::Never,
            ..default()
        })
        .set(WindowPlugin {
            primary_window: Some(primary_window()),
            ..default()
        });

    app.insert_resource(ClearColor(SKY_COLOR)).add_plugins(plugins);
}
