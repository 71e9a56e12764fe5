use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizhost::{chat, config::QuizConfig, protocol::WorldMessage, state::QuizState};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizhost=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting quizhost...");

    let config = QuizConfig::from_env();
    let state = QuizState::with_config(config.clone());

    // Print world output (the role a game host plays when embedded)
    let mut world_rx = state.world_broadcast.subscribe();
    tokio::spawn(async move {
        while let Ok(msg) = world_rx.recv().await {
            match msg {
                WorldMessage::Title { main, sub } => println!("== {} ==\n   {}", main, sub),
                WorldMessage::Chat { text } => println!("{}", text),
                WorldMessage::Execute { command } => println!("[cmd] /{}", command),
            }
        }
    });

    if let Some(path) = &config.questions_file {
        match state.load_questions_from_file(path).await {
            Ok(count) => tracing::info!("Loaded {} questions from {}", count, path.display()),
            Err(e) => tracing::warn!(
                "Failed to load questions from {}: {}. Starting with an empty bank.",
                path.display(),
                e
            ),
        }
    }

    state.prepare_scoreboard().await;

    println!("Type 1-4 to answer, !start / !skip / !reset / !score to control the quiz.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if let Some(cmd) = chat::parse_chat_line(&line) {
            chat::handle_command(cmd, &state).await;
        }
    }
}
