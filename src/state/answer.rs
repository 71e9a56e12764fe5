//! Chat-driven answer submission.

use super::QuizState;
use crate::types::SessionPhase;

impl QuizState {
    /// Apply a submitted answer (1-4) against the active question.
    ///
    /// Every answer that arrives while a question is active counts as a vote
    /// for that option (local tally + scoreboard mirror), including answers
    /// that are then rejected as too late. The whole check runs under the
    /// session write lock, so an answer and a timeout can never both claim
    /// the same question.
    pub async fn submit_answer(&self, option: u8) {
        let mut session = self.session.write().await;

        let index = match session.current_index {
            Some(index) if session.phase == SessionPhase::AwaitingAnswer => index,
            _ => {
                drop(session);
                self.say("No active question.");
                return;
            }
        };

        let (question, total) = {
            let questions = self.questions.read().await;
            (questions.get(index).cloned(), questions.len())
        };
        let Some(question) = question else {
            drop(session);
            self.say("No active question.");
            return;
        };

        self.record_vote(option).await;

        // The deadline may slip past before the countdown task's next poll
        // notices; an answer in that window is rejected, not scored.
        if session.time_expired() {
            session.timer_active = false;
            drop(session);
            self.say("Too late, time is up.");
            return;
        }

        if option == question.correct {
            session.score += 1;
            let score = session.score;
            drop(session);
            self.show_title("✅ Correct!", format!("Score: {} / {}", score, total));
        } else {
            drop(session);
            self.show_title(
                "❌ Incorrect",
                format!("Correct answer was option {}", question.correct),
            );
        }

        self.advance_from(index).await;
    }
}
