//! Core data types for the QuizAI client.
//!
//! This module defines the data structures used for:
//! - User and leaderboard payloads mirrored from the game server
//! - Client configuration
//! - The countdown timer command/event wire contract

use serde::{Deserialize, Serialize};

// ============================================================================
// UserRecord
// ============================================================================

/// A user profile payload as served by the game server.
///
/// The server owns this record; the client mirrors it verbatim between the
/// API and the session store. Unknown fields are preserved through the
/// flattened `extra` map so a store round trip never loses data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Numeric user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Free-form profile status line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Selected avatar id (1-8, 0 means unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic_id: Option<u32>,
    /// Lifetime leaderboard points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_points: Option<i64>,
    /// Number of games played
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played_number: Option<u32>,
    /// Session token, present only in login responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Server fields this client does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============================================================================
// LeaderboardEntry
// ============================================================================

/// One row of the global leaderboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Display name
    pub username: String,
    /// Lifetime points
    pub global_points: i64,
}

// ============================================================================
// ClientConfig
// ============================================================================

/// Environment variable overriding the server base URL.
pub const BASE_URL_ENV: &str = "QUIZAI_BASE_URL";

/// Default game server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Game server base URL (no trailing slash)
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Creates a configuration with the specified base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ============================================================================
// Timer wire contract
// ============================================================================

/// Inbound command for the countdown timer task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum TimerCommand {
    /// (Re)start the countdown with the given duration in milliseconds.
    /// Replaces any countdown already in progress.
    Start {
        /// Countdown duration in milliseconds
        duration: u64,
    },
    /// Halt the countdown. A no-op when nothing is running.
    Stop,
}

/// Outbound notification from the countdown timer task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimerEvent {
    /// Periodic progress notification while the countdown runs.
    Tick {
        /// Remaining time in milliseconds, never negative
        #[serde(rename = "remainingMs")]
        remaining_ms: u64,
    },
    /// Terminal notification, emitted exactly once per completed countdown.
    Timeout,
}

// ============================================================================
// Tests
// ============================================================================
