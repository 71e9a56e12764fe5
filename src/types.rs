use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Scoreboard labels for the four answer options, in option order.
pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// One quiz item: prompt text, up to four labeled options, the correct
/// option, and a time budget (0 = untimed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub text: String,
    /// Always four slots; unused trailing options are empty strings.
    pub options: [String; 4],
    /// 1-based index of the correct option.
    pub correct: u8,
    pub time_limit_secs: u32,
}

impl Question {
    /// Build a question from raw setup input, sanitizing instead of
    /// rejecting: see [`sanitize_correct_option`] and
    /// [`sanitize_time_limit`]. More than four options are truncated, fewer
    /// pad with empty strings.
    pub fn new(text: String, options: Vec<String>, correct: i64, seconds: i64) -> Self {
        let correct = sanitize_correct_option(correct, options.len());
        let time_limit_secs = sanitize_time_limit(seconds);
        let mut opts: [String; 4] = Default::default();
        for (slot, value) in opts.iter_mut().zip(options) {
            *slot = value;
        }
        Self {
            text,
            options: opts,
            correct,
            time_limit_secs,
        }
    }
}

/// Clamp a 1-based correct-option index into `1..=min(option_count, 4)`.
/// Out-of-range values become 1, never an error.
pub fn sanitize_correct_option(correct: i64, option_count: usize) -> u8 {
    let max = option_count.min(4) as i64;
    if correct >= 1 && correct <= max {
        correct as u8
    } else {
        1
    }
}

/// Clamp a time limit to non-negative seconds. Negative input means untimed.
pub fn sanitize_time_limit(seconds: i64) -> u32 {
    seconds.clamp(0, u32::MAX as i64) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    AwaitingAnswer,
    Finished,
}

/// Live state of one quiz run. `current_index` is `Some` only while a
/// question is awaiting an answer and always indexes a live bank entry.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub phase: SessionPhase,
    pub current_index: Option<usize>,
    pub score: u32,
    pub timer_active: bool,
    pub deadline: Option<Instant>,
    /// Bumped every time a question is presented; a countdown task only
    /// acts while its captured epoch still matches.
    pub timer_epoch: u64,
}

impl Session {
    /// Shared elapsed-time predicate used by both the countdown task and the
    /// answer path, so the two race-window checks can never diverge.
    pub fn time_expired(&self) -> bool {
        self.timer_active && self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Back to idle. `timer_epoch` survives the reset so a stale countdown
    /// task can never match a future epoch.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.current_index = None;
        self.score = 0;
        self.timer_active = false;
        self.deadline = None;
    }
}
