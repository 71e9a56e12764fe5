//! Question bank management
//!
//! Setup input is lenient: bad values are clamped, malformed load lines are
//! skipped with a warning, and lookups past the end return empty strings.
//! Nothing in the bank path is allowed to hard-fail.

use std::path::Path;

use super::QuizState;
use crate::types::Question;

/// Errors from loading a question file. Only the binary/config boundary sees
/// these; chat-driven loading never fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON question file: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk JSON question record.
#[derive(Debug, serde::Deserialize)]
struct QuestionRecord {
    text: String,
    options: Vec<String>,
    correct: i64,
    #[serde(default)]
    seconds: i64,
}

impl QuizState {
    /// Clear all questions and reset the session and vote tally. The world
    /// scoreboard is left alone; clearing it is a separate explicit
    /// operation.
    pub async fn reset_quiz(&self) {
        self.questions.write().await.clear();
        self.session.write().await.reset();
        self.reset_tally().await;
        tracing::info!("Quiz reset");
    }

    /// Append a question. Out-of-range `correct` and negative `seconds` are
    /// sanitized rather than rejected; missing trailing options pad with
    /// empty strings.
    pub async fn add_question(
        &self,
        text: String,
        options: Vec<String>,
        correct: i64,
        seconds: i64,
    ) {
        let question = Question::new(text, options, correct, seconds);
        self.questions.write().await.push(question);
    }

    /// Load a bank from `text|A|B|C|D|correct|seconds` lines (`seconds`
    /// optional), replacing any existing questions. Blank lines are ignored,
    /// lines with fewer than six fields are skipped, and non-numeric
    /// `correct`/`seconds` fall back to 1 and 0. Returns the number of
    /// questions loaded.
    pub async fn load_questions_from_text(&self, blob: &str) -> usize {
        self.reset_quiz().await;

        let mut loaded = 0;
        for line in blob.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() < 6 {
                tracing::warn!("Skipping malformed question line: {}", line);
                continue;
            }

            let correct = fields[5].trim().parse::<i64>().unwrap_or(1);
            let seconds = fields
                .get(6)
                .and_then(|f| f.trim().parse::<i64>().ok())
                .unwrap_or(0);
            let options = fields[1..5].iter().map(|f| f.trim().to_string()).collect();

            self.add_question(fields[0].trim().to_string(), options, correct, seconds)
                .await;
            loaded += 1;
        }

        tracing::info!("Loaded {} questions from text", loaded);
        loaded
    }

    /// Load a bank from a file. `.json` files hold an array of
    /// `{text, options, correct, seconds}` records; anything else goes
    /// through the pipe-delimited text loader.
    pub async fn load_questions_from_file(&self, path: &Path) -> Result<usize, LoadError> {
        let blob = tokio::fs::read_to_string(path).await?;

        if path.extension().is_some_and(|ext| ext == "json") {
            let records: Vec<QuestionRecord> = serde_json::from_str(&blob)?;
            self.reset_quiz().await;
            let count = records.len();
            for record in records {
                self.add_question(record.text, record.options, record.correct, record.seconds)
                    .await;
            }
            tracing::info!("Loaded {} questions from {}", count, path.display());
            Ok(count)
        } else {
            Ok(self.load_questions_from_text(&blob).await)
        }
    }

    /// Question text by 1-based number, or an empty string when out of range.
    pub async fn question_at(&self, number: usize) -> String {
        if number == 0 {
            return String::new();
        }
        self.questions
            .read()
            .await
            .get(number - 1)
            .map(|q| q.text.clone())
            .unwrap_or_default()
    }

    pub async fn question_count(&self) -> usize {
        self.questions.read().await.len()
    }
}
