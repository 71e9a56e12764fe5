//! Session state machine: start, question presentation, advance, finish.

use tokio::time::{Duration, Instant};

use super::QuizState;
use crate::timer;
use crate::types::SessionPhase;

/// Outcome of an advance attempt, decided under the session write lock.
enum Step {
    Advanced,
    Finished { score: u32, total: usize },
    Stale,
}

impl QuizState {
    /// Start the quiz from the first question. On an empty bank this reports
    /// "no questions" and leaves the session untouched. Calling it while a
    /// quiz is running restarts from question one with a fresh score.
    pub async fn start_quiz(&self) {
        if self.questions.read().await.is_empty() {
            self.say("No questions in quiz yet.");
            return;
        }

        {
            let mut session = self.session.write().await;
            session.phase = SessionPhase::AwaitingAnswer;
            session.current_index = Some(0);
            session.score = 0;
        }

        tracing::info!("Quiz started");
        self.present_current_question().await;
    }

    /// Show the active question on the title surface and in chat, reset the
    /// per-question vote tally, then arm a countdown if the question is
    /// timed.
    pub(crate) async fn present_current_question(&self) {
        let index = match self.session.read().await.current_index {
            Some(index) => index,
            None => {
                self.say("No more questions.");
                self.session.write().await.timer_active = false;
                return;
            }
        };
        let question = self.questions.read().await.get(index).cloned();
        let Some(question) = question else {
            // Index ran past the bank (e.g. the bank was reloaded mid-quiz);
            // treat it as the end of the quiz.
            self.say("No more questions.");
            self.session.write().await.timer_active = false;
            return;
        };

        let main = format!("Q{}: {}", index + 1, question.text);
        let numbered: Vec<String> = question
            .options
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(i, text)| format!("{}) {}", i + 1, text))
            .collect();

        self.show_title(main.clone(), numbered.join("   "));
        self.say(main);
        for line in numbered {
            self.say(line);
        }

        self.reset_tally().await;

        let timed = question.time_limit_secs > 0;
        let epoch = {
            let mut session = self.session.write().await;
            session.timer_epoch += 1;
            if timed {
                session.deadline =
                    Some(Instant::now() + Duration::from_secs(question.time_limit_secs as u64));
                session.timer_active = true;
            } else {
                session.deadline = None;
                session.timer_active = false;
            }
            session.timer_epoch
        };

        if timed {
            self.say(format!(
                "You have {} seconds. Type 1, 2, 3 or 4 in chat.",
                question.time_limit_secs
            ));
            timer::spawn_question_timer(self.clone(), index, epoch);
        } else {
            self.say("Type 1, 2, 3 or 4 in chat.");
        }
    }

    /// Move past question `index`, or finish the quiz if it was the last
    /// one. This is the single funnel shared by the answer path, the
    /// countdown task, and skip; whichever caller gets here first wins, and
    /// stale calls (the session already moved on) are no-ops.
    pub(crate) async fn advance_from(&self, index: usize) {
        let total = self.questions.read().await.len();

        let step = {
            let mut session = self.session.write().await;
            if session.phase != SessionPhase::AwaitingAnswer
                || session.current_index != Some(index)
            {
                Step::Stale
            } else if index + 1 < total {
                session.current_index = Some(index + 1);
                Step::Advanced
            } else {
                session.phase = SessionPhase::Finished;
                session.current_index = None;
                session.timer_active = false;
                session.deadline = None;
                Step::Finished {
                    score: session.score,
                    total,
                }
            }
        };

        match step {
            Step::Advanced => self.present_current_question().await,
            Step::Finished { score, total } => {
                self.show_title("Quiz finished!", format!("Score: {} / {}", score, total));
                self.say("Quiz finished!");
                self.say(format!("Your score: {} / {}", score, total));
                tracing::info!("Quiz finished with score {}/{}", score, total);
            }
            Step::Stale => {}
        }
    }

    /// Cancel the current countdown and move on without waiting for an
    /// answer. With no active question this behaves like [`start_quiz`]
    /// (starts at question one, or reports an empty bank).
    ///
    /// [`start_quiz`]: QuizState::start_quiz
    pub async fn skip_to_next_question(&self) {
        let active = {
            let mut session = self.session.write().await;
            match (session.phase, session.current_index) {
                (SessionPhase::AwaitingAnswer, Some(index)) => {
                    session.timer_active = false;
                    Some(index)
                }
                _ => None,
            }
        };

        match active {
            Some(index) => self.advance_from(index).await,
            None => self.start_quiz().await,
        }
    }

    /// Current score.
    pub async fn score(&self) -> u32 {
        self.session.read().await.score
    }

    /// 1-based number of the active question, or 0 when none.
    pub async fn current_question_number(&self) -> usize {
        self.session
            .read()
            .await
            .current_index
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::WorldMessage;
    use tokio::sync::broadcast::error::TryRecvError;

    fn drain(rx: &mut tokio::sync::broadcast::Receiver<WorldMessage>) -> Vec<WorldMessage> {
        let mut messages = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
        messages
    }

    fn chat_lines(messages: &[WorldMessage]) -> Vec<String> {
        messages
            .iter()
            .filter_map(|m| match m {
                WorldMessage::Chat { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    async fn state_with_questions(n: usize) -> QuizState {
        let state = QuizState::new();
        for i in 0..n {
            state
                .add_question(
                    format!("Question {}", i + 1),
                    vec!["a".to_string(), "b".to_string()],
                    1,
                    0,
                )
                .await;
        }
        state
    }

    #[tokio::test]
    async fn test_start_with_empty_bank_reports_and_stays_idle() {
        let state = QuizState::new();
        let mut rx = state.world_broadcast.subscribe();

        state.start_quiz().await;

        let messages = drain(&mut rx);
        assert_eq!(
            chat_lines(&messages),
            vec!["No questions in quiz yet.".to_string()]
        );

        let session = state.session.read().await;
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.current_index, None);
    }

    #[tokio::test]
    async fn test_start_presents_first_question() {
        let state = state_with_questions(2).await;
        let mut rx = state.world_broadcast.subscribe();

        state.start_quiz().await;

        let messages = drain(&mut rx);
        assert!(messages.contains(&WorldMessage::Title {
            main: "Q1: Question 1".to_string(),
            sub: "1) a   2) b".to_string(),
        }));
        let lines = chat_lines(&messages);
        assert!(lines.contains(&"Q1: Question 1".to_string()));
        assert!(lines.contains(&"1) a".to_string()));
        assert!(lines.contains(&"2) b".to_string()));
        assert!(lines.contains(&"Type 1, 2, 3 or 4 in chat.".to_string()));

        let session = state.session.read().await;
        assert_eq!(session.phase, SessionPhase::AwaitingAnswer);
        assert_eq!(session.current_index, Some(0));
        assert!(!session.timer_active);
    }

    #[tokio::test]
    async fn test_empty_options_are_not_displayed() {
        let state = QuizState::new();
        state
            .add_question(
                "Pick".to_string(),
                vec!["one".to_string(), "two".to_string(), "three".to_string()],
                1,
                0,
            )
            .await;
        let mut rx = state.world_broadcast.subscribe();

        state.start_quiz().await;

        let lines = chat_lines(&drain(&mut rx));
        assert!(lines.contains(&"3) three".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("4)")));
    }

    #[tokio::test]
    async fn test_advance_from_walks_the_whole_bank() {
        let state = state_with_questions(3).await;
        state.start_quiz().await;

        state.advance_from(0).await;
        assert_eq!(state.current_question_number().await, 2);

        state.advance_from(1).await;
        assert_eq!(state.current_question_number().await, 3);

        state.advance_from(2).await;
        let session = state.session.read().await;
        assert_eq!(session.phase, SessionPhase::Finished);
        assert_eq!(session.current_index, None);
    }

    #[tokio::test]
    async fn test_advance_from_stale_index_is_a_noop() {
        let state = state_with_questions(3).await;
        state.start_quiz().await;

        state.advance_from(2).await;
        assert_eq!(state.current_question_number().await, 1);

        state.advance_from(0).await;
        state.advance_from(0).await; // double-fire on the same index
        assert_eq!(state.current_question_number().await, 2);
    }

    #[tokio::test]
    async fn test_finish_reports_score() {
        let state = state_with_questions(1).await;
        state.start_quiz().await;
        let mut rx = state.world_broadcast.subscribe();

        state.advance_from(0).await;

        let messages = drain(&mut rx);
        assert!(messages.contains(&WorldMessage::Title {
            main: "Quiz finished!".to_string(),
            sub: "Score: 0 / 1".to_string(),
        }));
        assert!(chat_lines(&messages).contains(&"Your score: 0 / 1".to_string()));
    }

    #[tokio::test]
    async fn test_skip_advances_and_cancels_timer() {
        let state = QuizState::new();
        state
            .add_question(
                "timed".to_string(),
                vec!["a".to_string(), "b".to_string()],
                1,
                30,
            )
            .await;
        state
            .add_question(
                "untimed".to_string(),
                vec!["a".to_string(), "b".to_string()],
                1,
                0,
            )
            .await;

        state.start_quiz().await;
        assert!(state.session.read().await.timer_active);

        state.skip_to_next_question().await;
        assert_eq!(state.current_question_number().await, 2);
        assert!(!state.session.read().await.timer_active);
    }

    #[tokio::test]
    async fn test_skip_on_last_question_finishes() {
        let state = state_with_questions(1).await;
        state.start_quiz().await;

        state.skip_to_next_question().await;
        assert_eq!(state.session.read().await.phase, SessionPhase::Finished);
    }

    #[tokio::test]
    async fn test_skip_when_idle_starts_the_quiz() {
        let state = state_with_questions(2).await;

        state.skip_to_next_question().await;
        assert_eq!(state.current_question_number().await, 1);
        assert_eq!(state.session.read().await.phase, SessionPhase::AwaitingAnswer);
    }

    #[tokio::test]
    async fn test_skip_when_idle_with_empty_bank_reports() {
        let state = QuizState::new();
        let mut rx = state.world_broadcast.subscribe();

        state.skip_to_next_question().await;

        assert!(chat_lines(&drain(&mut rx)).contains(&"No questions in quiz yet.".to_string()));
    }

    #[tokio::test]
    async fn test_restart_resets_score() {
        let state = state_with_questions(2).await;
        state.start_quiz().await;
        state.session.write().await.score = 1;

        state.start_quiz().await;

        let session = state.session.read().await;
        assert_eq!(session.score, 0);
        assert_eq!(session.current_index, Some(0));
    }

    #[tokio::test]
    async fn test_presenting_bumps_timer_epoch() {
        let state = state_with_questions(2).await;
        state.start_quiz().await;
        let first = state.session.read().await.timer_epoch;

        state.advance_from(0).await;
        let second = state.session.read().await.timer_epoch;
        assert!(second > first);
    }
}
