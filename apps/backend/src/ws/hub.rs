//! In-process fan-out of game updates to websocket sessions.

use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::domain::Game;

/// Fresh view of a game after a committed mutation.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct GameBroadcast {
    pub version: i32,
    pub game: Arc<Game>,
}

/// `game_id -> {session token -> recipient}`.
#[derive(Default)]
pub struct GameHub {
    sessions: DashMap<i64, DashMap<Uuid, Recipient<GameBroadcast>>>,
}

impl GameHub {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, game_id: i64, recipient: Recipient<GameBroadcast>) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions
            .entry(game_id)
            .or_default()
            .insert(token, recipient);
        token
    }

    pub fn unregister(&self, game_id: i64, token: Uuid) {
        let now_empty = match self.sessions.get(&game_id) {
            Some(entry) => {
                entry.remove(&token);
                entry.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.sessions.remove_if(&game_id, |_, sessions| sessions.is_empty());
        }
    }

    pub fn session_count(&self, game_id: i64) -> usize {
        self.sessions.get(&game_id).map_or(0, |entry| entry.len())
    }

    pub fn total_sessions(&self) -> usize {
        self.sessions.iter().map(|entry| entry.len()).sum()
    }

    /// Sends the game to every session watching it.
    pub fn publish(&self, game: Game) {
        let game_id = game.id;
        let message = GameBroadcast {
            version: game.version,
            game: Arc::new(game),
        };
        if let Some(entry) = self.sessions.get(&game_id) {
            debug!(game_id, sessions = entry.len(), version = message.version, "Broadcasting game state");
            for recipient in entry.iter() {
                recipient.value().do_send(message.clone());
            }
        }
    }
}
