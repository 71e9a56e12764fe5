mod answer;
mod bank;
mod session;
mod vote;

pub use bank::LoadError;

use crate::config::QuizConfig;
use crate::protocol::WorldMessage;
use crate::types::{Question, Session};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared quiz state. Cheap to clone; countdown tasks hold their own clone.
#[derive(Clone)]
pub struct QuizState {
    pub questions: Arc<RwLock<Vec<Question>>>,
    pub session: Arc<RwLock<Session>>,
    /// Per-question vote counts, one slot per option.
    pub tally: Arc<RwLock<[u32; 4]>>,
    /// Broadcast channel for world-facing output (titles, chat lines, host
    /// commands). The embedding host subscribes; send errors mean nobody is
    /// listening and are ignored.
    pub world_broadcast: broadcast::Sender<WorldMessage>,
    pub config: QuizConfig,
}

impl QuizState {
    pub fn new() -> Self {
        Self::with_config(QuizConfig::default())
    }

    pub fn with_config(config: QuizConfig) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            questions: Arc::new(RwLock::new(Vec::new())),
            session: Arc::new(RwLock::new(Session::default())),
            tally: Arc::new(RwLock::new([0; 4])),
            world_broadcast: tx,
            config,
        }
    }

    /// Send a chat line to the world.
    pub(crate) fn say(&self, text: impl Into<String>) {
        let _ = self.world_broadcast.send(WorldMessage::Chat { text: text.into() });
    }

    /// Show big on-screen text to everyone.
    pub(crate) fn show_title(&self, main: impl Into<String>, sub: impl Into<String>) {
        let _ = self.world_broadcast.send(WorldMessage::Title {
            main: main.into(),
            sub: sub.into(),
        });
    }

    /// Fire-and-forget host command.
    pub(crate) fn execute(&self, command: impl Into<String>) {
        let _ = self.world_broadcast.send(WorldMessage::Execute {
            command: command.into(),
        });
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}
