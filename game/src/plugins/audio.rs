use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use crate::prelude::*;
use crate::resources::audio_settings::AudioSettings;

const MUSIC_PATH: &str = "audio/bg_sound.ogg";

#[derive(Component)]
pub struct BackgroundMusic;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<AudioSettings>()
        .register_type::<AudioSettings>()
        .add_systems(Startup, start_music)
        .add_systems(Update, apply_volume.run_if(resource_changed::<AudioSettings>))
        .add_systems(OnEnter(GameState::Paused), pause_music)
        .add_systems(OnExit(GameState::Paused), resume_music);
}

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, settings: Res<AudioSettings>) {
    commands.spawn((
        BackgroundMusic,
        AudioPlayer::new(asset_server.load(MUSIC_PATH)),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(settings.master_volume)),
    ));
}

fn apply_volume(settings: Res<AudioSettings>, mut q_sink: Query<&mut AudioSink, With<BackgroundMusic>>) {
    for mut sink in q_sink.iter_mut() {
        sink.set_volume(Volume::Linear(settings.master_volume));
    }
}

fn pause_music(q_sink: Query<&AudioSink, With<BackgroundMusic>>) {
    for sink in q_sink.iter() {
        sink.pause();
    }
}

fn resume_music(q_sink: Query<&AudioSink, With<BackgroundMusic>>) {
    for sink in q_sink.iter() {
        sink.play();
    }
}
