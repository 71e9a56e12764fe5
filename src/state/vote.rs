//! Per-question vote tally and its world scoreboard mirror.
//!
//! The local tally resets with every question; the scoreboard objective
//! lives in the world, persists across questions (and across independent
//! quiz instances pointing at the same objective), and is only created and
//! cleared by the explicit operations below.

use super::QuizState;
use crate::types::OPTION_LABELS;

impl QuizState {
    /// Count a submission for `option` (1-4): local tally slot += 1 and the
    /// matching scoreboard label += 1, together. Out-of-range options are a
    /// silent no-op; the chat binding never produces them.
    pub(crate) async fn record_vote(&self, option: u8) {
        let idx = (option as usize).wrapping_sub(1);
        let mut tally = self.tally.write().await;
        if let Some(slot) = tally.get_mut(idx) {
            *slot += 1;
            self.execute(format!(
                "scoreboard players add {} {} 1",
                OPTION_LABELS[idx], self.config.scoreboard_objective
            ));
            tracing::debug!("Vote recorded: option={} count={}", option, *slot);
        }
    }

    /// Vote counts for the current question, one slot per option.
    pub async fn vote_counts(&self) -> [u32; 4] {
        *self.tally.read().await
    }

    pub(crate) async fn reset_tally(&self) {
        *self.tally.write().await = [0; 4];
    }

    /// Create the scoreboard objective and put it on the sidebar. Safe to
    /// call when it already exists; the host ignores the duplicate add.
    pub async fn prepare_scoreboard(&self) {
        let objective = &self.config.scoreboard_objective;
        self.execute(format!("scoreboard objectives add {} dummy", objective));
        self.execute(format!(
            "scoreboard objectives setdisplay sidebar {}",
            objective
        ));
        tracing::info!("Scoreboard objective {} prepared", objective);
    }

    /// Zero all option labels on the scoreboard. This is the only operation
    /// that touches the persistent counters; quiz resets do not.
    pub async fn reset_scoreboard(&self) {
        for label in OPTION_LABELS {
            self.execute(format!(
                "scoreboard players set {} {} 0",
                label, self.config.scoreboard_objective
            ));
        }
        tracing::info!("Scoreboard counters cleared");
    }
}
