//! Turn-based multiple-choice quiz engine for a scriptable game world.
//!
//! The engine owns question progression, per-question countdowns, scoring,
//! and vote tallying; everything world-facing (titles, chat lines, host
//! commands) goes out as [`protocol::WorldMessage`] values on a broadcast
//! channel, and answers come in through [`chat`] as [`protocol::ChatCommand`]
//! values.
//!
//! Invalid input never crashes a running quiz: setup mistakes are sanitized,
//! mistimed chat events degrade to a friendly message, and malformed load
//! lines are skipped. The people wiring quizzes together are players and
//! teachers, not programmers; a stack trace is not an error message they can
//! act on.

pub mod chat;
pub mod config;
pub mod protocol;
pub mod state;
pub mod timer;
pub mod types;
