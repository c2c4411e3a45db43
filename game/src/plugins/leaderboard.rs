use std::sync::mpsc::Sender;

use bevy::prelude::*;

use crate::prelude::*;
use crate::resources::leaderboard::{Leaderboard, LeaderboardDocument, LeaderboardStatus};
use crate::resources::leaderboard_channel::{LeaderboardChannel, LeaderboardReply};
use crate::resources::leaderboard_config::LeaderboardConfig;
use crate::resources::score_record::{ScoreRecord, ScoreStore};

const HTTP_NOT_FOUND: u16 = 404;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<Leaderboard>()
        .init_resource::<LeaderboardChannel>()
        .init_resource::<LeaderboardConfig>()
        .register_type::<Leaderboard>()
        .add_systems(OnEnter(GameState::MainMenu), trigger_leaderboard_fetch)
        .add_systems(Update, leaderboard_receiver_system);
}

fn json_headers() -> ehttp::Headers {
    ehttp::Headers::new(&[
        ("Accept", "application/json"),
        ("Content-Type", "application/json"),
    ])
}

/// Turns a GET of the leaderboard object into a document. A missing object is an empty board.
fn read_document(result: ehttp::Result<ehttp::Response>) -> Result<LeaderboardDocument, String> {
    let response = result.map_err(|e| format!("network error: {e}"))?;
    if response.status == HTTP_NOT_FOUND {
        return Ok(LeaderboardDocument::default());
    }
    if !response.ok {
        return Err(format!("fetch failed with status {}", response.status));
    }
    LeaderboardDocument::from_slice(&response.bytes).map_err(|e| format!("{e:#}"))
}

fn fetch_document(url: String, on_done: impl 'static + Send + FnOnce(Result<LeaderboardDocument, String>)) {
    let mut request = ehttp::Request::get(url);
    request.headers = json_headers();
    ehttp::fetch(request, move |result| on_done(read_document(result)));
}

fn trigger_leaderboard_fetch(
    config: Res<LeaderboardConfig>,
    channel: Res<LeaderboardChannel>,
    mut leaderboard: ResMut<Leaderboard>,
) {
    let Some(url) = config.object_url() else {
        warn!("LEADERBOARD_URL not set at build time, leaderboard stays offline");
        leaderboard.mark_offline();
        return;
    };

    leaderboard.status = LeaderboardStatus::Pending;
    let tx = channel.tx.clone();
    fetch_document(url, move |outcome| {
        let reply = match outcome {
            Ok(document) => LeaderboardReply::Fetched(document),
            Err(err) => LeaderboardReply::Failed(err),
        };
        let _ = tx.send(reply);
    });
}

/// Read-modify-write of the whole object: fetch, raise this player's entry, upload.
/// Concurrent writers race and the last upload wins.
pub(crate) fn push_score(config: &LeaderboardConfig, tx: Sender<LeaderboardReply>, name: String, score: u64) {
    let Some(url) = config.object_url() else {
        debug!("no leaderboard url, skipping upload of {score}");
        return;
    };

    let put_url = url.clone();
    fetch_document(url, move |outcome| {
        let mut document = match outcome {
            Ok(document) => document,
            Err(err) => {
                let _ = tx.send(LeaderboardReply::Failed(err));
                return;
            }
        };

        if !document.upsert(&name, score) {
            let _ = tx.send(LeaderboardReply::Fetched(document));
            return;
        }

        let body = match document.to_json_bytes() {
            Ok(body) => body,
            Err(err) => {
                let _ = tx.send(LeaderboardReply::Failed(format!("{err:#}")));
                return;
            }
        };

        let mut request = ehttp::Request::post(put_url, body);
        request.method = "PUT".to_owned();
        request.headers = json_headers();
        ehttp::fetch(request, move |result| {
            let reply = match result {
                Ok(response) if response.ok => LeaderboardReply::Pushed(document),
                Ok(response) => LeaderboardReply::Failed(format!("upload failed with status {}", response.status)),
                Err(err) => LeaderboardReply::Failed(format!("network error: {err}")),
            };
            let _ = tx.send(reply);
        });
    });
}

fn leaderboard_receiver_system(
    channel: Res<LeaderboardChannel>,
    store: Res<ScoreStore>,
    mut leaderboard: ResMut<Leaderboard>,
    mut record: ResMut<ScoreRecord>,
) {
    for reply in channel.drain() {
        match reply {
            LeaderboardReply::Fetched(document) | LeaderboardReply::Pushed(document) => {
                leaderboard.apply(&document);
                info!("leaderboard refreshed with {} players", leaderboard.entries.len());
                if let Some(best) = document.best() {
                    if record.observe_global(best) {
                        crate::plugins::records::save_record(&store, &record);
                    }
                }
            }
            LeaderboardReply::Failed(err) => {
                warn!("leaderboard sync failed: {err}");
                leaderboard.mark_offline();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::leaderboard::LeaderboardEntry;

    fn receiver_app(name: &str) -> App {
        let dir = std::env::temp_dir().join(format!("sky_climber_lb_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut app = App::new();
        app.init_resource::<Leaderboard>()
            .init_resource::<LeaderboardChannel>()
            .init_resource::<ScoreRecord>()
            .insert_resource(ScoreStore::at(dir.join("score_record.json")))
            .add_systems(Update, leaderboard_receiver_system);
        app
    }

    fn send(app: &App, reply: LeaderboardReply) {
        app.world().resource::<LeaderboardChannel>().tx.send(reply).unwrap();
    }

    #[test]
    fn fetched_board_raises_cached_global_best() {
        let mut app = receiver_app("fetched");
        let document = LeaderboardDocument {
            players: vec![
                LeaderboardEntry { name: "alice".to_string(), highscore: 50 },
                LeaderboardEntry { name: "bob".to_string(), highscore: 20 },
            ],
        };
        send(&app, LeaderboardReply::Fetched(document));

        app.update();

        assert_eq!(app.world().resource::<ScoreRecord>().global_high_score, 50);
        let board = app.world().resource::<Leaderboard>();
        assert_eq!(board.status, LeaderboardStatus::Live);
        assert_eq!(board.entries[0], ("alice".to_string(), 50));

        let store = app.world().resource::<ScoreStore>();
        assert_eq!(store.load_or_create().unwrap().global_high_score, 50);
    }

    #[test]
    fn lower_cloud_best_leaves_record_alone() {
        let mut app = receiver_app("lower");
        app.world_mut().resource_mut::<ScoreRecord>().observe_global(80);
        let document = LeaderboardDocument {
            players: vec![LeaderboardEntry { name: "bob".to_string(), highscore: 20 }],
        };
        send(&app, LeaderboardReply::Pushed(document));

        app.update();

        assert_eq!(app.world().resource::<ScoreRecord>().global_high_score, 80);
        assert!(!app.world().resource::<ScoreStore>().path().exists());
    }

    #[test]
    fn failed_reply_marks_board_offline() {
        let mut app = receiver_app("failed");
        send(&app, LeaderboardReply::Failed("timeout".to_string()));

        app.update();

        let board = app.world().resource::<Leaderboard>();
        assert_eq!(board.status, LeaderboardStatus::Offline);
        assert_eq!(board.padded(3).len(), 3);
        assert_eq!(app.world().resource::<ScoreRecord>().global_high_score, 0);
    }
}
