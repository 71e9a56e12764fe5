//! Chat command parsing and dispatch.

use crate::protocol::ChatCommand;
use crate::state::QuizState;

/// Parse one inbound chat line. Bare digits 1-4 submit the matching answer
/// option (each digit forwards its own value), `!`-prefixed words are
/// control commands, and anything else is ordinary chat and is ignored.
pub fn parse_chat_line(line: &str) -> Option<ChatCommand> {
    match line.trim() {
        "1" => Some(ChatCommand::Answer { option: 1 }),
        "2" => Some(ChatCommand::Answer { option: 2 }),
        "3" => Some(ChatCommand::Answer { option: 3 }),
        "4" => Some(ChatCommand::Answer { option: 4 }),
        "!start" => Some(ChatCommand::StartQuiz),
        "!skip" => Some(ChatCommand::SkipQuestion),
        "!reset" => Some(ChatCommand::ResetQuiz),
        "!score" => Some(ChatCommand::ShowScore),
        _ => None,
    }
}

/// Single dispatch point for all quiz commands, chat-typed or wired up by
/// the embedding host.
pub async fn handle_command(cmd: ChatCommand, state: &QuizState) {
    match cmd {
        ChatCommand::Answer { option } => state.submit_answer(option).await,
        ChatCommand::StartQuiz => state.start_quiz().await,
        ChatCommand::SkipQuestion => state.skip_to_next_question().await,
        ChatCommand::ResetQuiz => state.reset_quiz().await,
        ChatCommand::ShowScore => {
            let score = state.score().await;
            let total = state.question_count().await;
            state.say(format!("Score: {} / {}", score, total));
        }
        ChatCommand::AddQuestion {
            text,
            options,
            correct,
            seconds,
        } => state.add_question(text, options, correct, seconds).await,
        ChatCommand::LoadQuestions { text } => {
            let loaded = state.load_questions_from_text(&text).await;
            state.say(format!("Loaded {} questions.", loaded));
        }
        ChatCommand::PrepareScoreboard => state.prepare_scoreboard().await,
        ChatCommand::ResetScoreboard => state.reset_scoreboard().await,
    }
}
