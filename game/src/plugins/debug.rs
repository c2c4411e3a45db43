use bevy::app::App;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins((
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    #[cfg(feature = "dev")]
    {
        use bevy_egui::EguiPlugin;
        use bevy_inspector_egui::quick::ResourceInspectorPlugin;
        use crate::resources::audio_settings::AudioSettings;
        use crate::resources::climb_settings::ClimbSettings;
        use crate::resources::platform_spawner::PlatformSpawner;
        use crate::resources::score_record::ScoreRecord;
        use crate::resources::spawn_settings::SpawnSettings;

        app.add_plugins(EguiPlugin::default());

        app.add_plugins(ResourceInspectorPlugin::<ClimbSettings>::default());
        app.add_plugins(ResourceInspectorPlugin::<SpawnSettings>::default());
        app.add_plugins(ResourceInspectorPlugin::<PlatformSpawner>::default());

        app.add_plugins(ResourceInspectorPlugin::<ScoreRecord>::default());
        app.add_plugins(ResourceInspectorPlugin::<AudioSettings>::default());
    }
}
