use bevy::prelude::*;

use crate::prelude::*;
use crate::resources::leaderboard_channel::LeaderboardChannel;
use crate::resources::leaderboard_config::LeaderboardConfig;
use crate::resources::player_profile::PlayerProfile;
use crate::resources::score::Score;
use crate::resources::score_record::{ScoreRecord, ScoreStore, DEFAULT_USERNAME};

pub(crate) fn plugin(app: &mut App) {
    let store = ScoreStore::default();
    let record = match store.load_or_create() {
        Ok(record) => {
            info!("loaded score record from {}", store.path().display());
            record
        }
        Err(err) => {
            warn!("falling back to a fresh score record: {err:#}");
            ScoreRecord::default()
        }
    };

    let profile = PlayerProfile {
        username: if record.username == DEFAULT_USERNAME { String::new() } else { record.username.clone() },
    };

    app
        .insert_resource(store)
        .insert_resource(record)
        .insert_resource(profile)
        .register_type::<ScoreRecord>()
        .register_type::<PlayerProfile>()
        .add_systems(OnEnter(GameState::GameOver), finish_run);
}

pub(crate) fn save_record(store: &ScoreStore, record: &ScoreRecord) {
    if let Err(err) = store.save(record) {
        error!("could not save score record: {err:#}");
    }
}

/// Folds the run into the local record and pushes a new personal best to the cloud.
pub(crate) fn finish_run(
    score: Res<Score>,
    store: Res<ScoreStore>,
    mut record: ResMut<ScoreRecord>,
    config: Res<LeaderboardConfig>,
    channel: Res<LeaderboardChannel>,
) {
    let outcome = record.record_run(u64::from(score.current));
    info!("run over with score {} ({:?})", score.current, outcome);

    if outcome.changed() {
        save_record(&store, &record);
    }

    if outcome.new_local_best {
        crate::plugins::leaderboard::push_score(
            &config,
            channel.tx.clone(),
            record.username.clone(),
            record.local_high_score,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish_app(name: &str) -> App {
        let dir = std::env::temp_dir().join(format!("sky_climber_finish_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut app = App::new();
        app.init_resource::<Score>()
            .init_resource::<ScoreRecord>()
            .init_resource::<LeaderboardChannel>()
            .insert_resource(LeaderboardConfig { base_url: None, object_key: "data.json".to_string() })
            .insert_resource(ScoreStore::at(dir.join("score_record.json")))
            .add_systems(Update, finish_run);
        app
    }

    #[test]
    fn new_best_is_saved() {
        let mut app = finish_app("best");
        app.world_mut().resource_mut::<Score>().current = 7;

        app.update();

        let record = app.world().resource::<ScoreRecord>();
        assert_eq!(record.local_high_score, 7);
        assert_eq!(record.global_high_score, 7);
        let saved = app.world().resource::<ScoreStore>().load_or_create().unwrap();
        assert_eq!(saved.local_high_score, 7);
    }

    #[test]
    fn worse_run_does_not_touch_the_file() {
        let mut app = finish_app("worse");
        app.world_mut().resource_mut::<Score>().current = 7;
        app.update();

        let path = app.world().resource::<ScoreStore>().path().to_path_buf();
        std::fs::remove_file(&path).unwrap();

        app.world_mut().resource_mut::<Score>().current = 3;
        app.update();

        assert!(!path.exists());
        assert_eq!(app.world().resource::<ScoreRecord>().local_high_score, 7);
    }
}
