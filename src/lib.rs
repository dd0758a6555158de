//! QuizAI Client Library
//!
//! This library provides the core functionality for the QuizAI terminal
//! client. It includes:
//! - A countdown timer task emitting tick/timeout notifications
//! - File-backed session storage for the token and mirrored user record
//! - REST client for the game server (profile, avatar, leaderboard, auth)
//! - Avatar asset resolution with initial-letter badge fallback
//! - CLI command parsing and display utilities

pub mod api;
pub mod avatar;
pub mod cli;
pub mod session;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    ClientConfig, LeaderboardEntry, TimerCommand, TimerEvent, UserRecord,
};

pub use api::ApiClient;
pub use session::{SessionError, SessionStore};
pub use timer::{CountdownHandle, CountdownTimer, TimerError};
