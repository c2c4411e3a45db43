use bevy::prelude::*;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Mutex;

use crate::resources::leaderboard::LeaderboardDocument;

/// Results handed back from `ehttp` callback threads.
#[derive(Debug)]
pub enum LeaderboardReply {
    Fetched(LeaderboardDocument),
    Pushed(LeaderboardDocument),
    Failed(String),
}

#[derive(Resource)]
pub struct LeaderboardChannel {
    pub tx: Sender<LeaderboardReply>,
    pub rx: Mutex<Receiver<LeaderboardReply>>,
}

impl Default for LeaderboardChannel {
    fn default() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self { tx, rx: Mutex::new(rx) }
    }
}

impl LeaderboardChannel {
    pub fn drain(&self) -> Vec<LeaderboardReply> {
        match self.rx.lock() {
            Ok(rx) => rx.try_iter().collect(),
            Err(_) => Vec::new(),
        }
    }
}
