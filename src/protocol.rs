use serde::{Deserialize, Serialize};

/// Inbound commands from the chat/command layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ChatCommand {
    /// An answer digit typed in chat (1-4). The chat binding only ever
    /// dispatches values in range.
    Answer { option: u8 },
    StartQuiz,
    /// Drop the current question without waiting for an answer.
    SkipQuestion,
    ResetQuiz,
    ShowScore,
    // Setup surface (wired by the embedding host rather than typed in chat)
    AddQuestion {
        text: String,
        options: Vec<String>,
        correct: i64,
        #[serde(default)]
        seconds: i64,
    },
    LoadQuestions {
        text: String,
    },
    PrepareScoreboard,
    ResetScoreboard,
}

/// Outbound effects consumed by the embedding game host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum WorldMessage {
    /// Large ephemeral on-screen text, shown to everyone.
    Title { main: String, sub: String },
    /// Persistent chat-style line.
    Chat { text: String },
    /// Fire-and-forget host command (used for the scoreboard mirror).
    Execute { command: String },
}
