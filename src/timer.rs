//! Per-question countdown task.
//!
//! There is no preemption: the task polls at `config.poll_interval` and
//! cooperatively exits as soon as the session's `timer_active` flag is
//! cleared, the question index moves on, or the timer epoch no longer
//! matches the presentation it was spawned for.

use tokio::time::sleep;

use crate::state::QuizState;

/// Spawn the countdown for question `index`. `epoch` is the session's
/// `timer_epoch` at presentation time; the task is a silent no-op once the
/// session has moved to a newer epoch, which covers both cancellation and
/// the restarted-quiz case where the same index becomes active again.
pub fn spawn_question_timer(state: QuizState, index: usize, epoch: u64) {
    tokio::spawn(async move {
        loop {
            sleep(state.config.poll_interval).await;

            let fired = {
                let mut session = state.session.write().await;
                if session.timer_epoch != epoch
                    || !session.timer_active
                    || session.current_index != Some(index)
                {
                    return;
                }
                if session.time_expired() {
                    // Claim the expiry under the lock; the answer path can
                    // no longer score this question.
                    session.timer_active = false;
                    true
                } else {
                    false
                }
            };

            if fired {
                tracing::info!("Question {} timed out", index + 1);
                state.show_title("Time's up!", "No more answers for this question.");
                state.advance_from(index).await;
                return;
            }
        }
    });
}
