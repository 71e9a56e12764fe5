//! Runtime configuration, loaded from the environment.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// How often countdown tasks re-check the clock and their cancellation
    /// state. Must stay well under a second so cancellation feels immediate.
    pub poll_interval: Duration,
    /// Name of the world scoreboard objective mirroring vote counts.
    pub scoreboard_objective: String,
    /// Optional question file to load at startup.
    pub questions_file: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(200),
            scoreboard_objective: "quiz_votes".to_string(),
            questions_file: None,
        }
    }
}

impl QuizConfig {
    /// Load config from environment variables, falling back to defaults for
    /// anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let poll_interval = std::env::var("QUIZ_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let scoreboard_objective = std::env::var("QUIZ_SCOREBOARD_OBJECTIVE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.scoreboard_objective);

        let questions_file = std::env::var("QUIZ_QUESTIONS_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            poll_interval,
            scoreboard_objective,
            questions_file,
        }
    }
}
