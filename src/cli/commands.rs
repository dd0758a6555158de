//! Command definitions for the QuizAI client CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::timer::MAX_DURATION_MS;
use crate::types::UserRecord;

// ============================================================================
// CLI Structure
// ============================================================================

/// QuizAI client - profile, leaderboard, and countdown from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "quizai",
    version,
    about = "Terminal client for the QuizAI game server",
    long_about = "Manage your QuizAI profile, avatar, and leaderboard standing\n\
                  from the terminal, and run local countdowns for timed rounds.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in to the game server and store the session locally
    Login(LoginArgs),

    /// Revoke the session and clear stored credentials
    Logout,

    /// Show the locally stored session state
    Status,

    /// Fetch and show your profile from the server
    Profile,

    /// Update profile fields on the server
    Update(UpdateArgs),

    /// Select one of the bundled avatars
    Avatar(AvatarArgs),

    /// Show the global leaderboard
    Leaderboard,

    /// Run a local countdown and print its progress
    Countdown(CountdownArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Command Arguments
// ============================================================================

/// Arguments for the login command
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,
}

/// Arguments for the update command
#[derive(Args, Debug, Clone)]
#[command(group = clap::ArgGroup::new("fields").required(true).multiple(true))]
pub struct UpdateArgs {
    /// New profile status line (up to 200 characters)
    #[arg(short, long, group = "fields", value_parser = validate_description)]
    pub description: Option<String>,

    /// New display name
    #[arg(short, long, group = "fields")]
    pub username: Option<String>,
}

impl UpdateArgs {
    /// Builds the partial record sent to the server.
    pub fn to_patch(&self) -> UserRecord {
        UserRecord {
            description: self.description.clone(),
            username: self.username.clone(),
            ..Default::default()
        }
    }
}

/// Arguments for the avatar command
#[derive(Args, Debug, Clone)]
pub struct AvatarArgs {
    /// Avatar id (1-8)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=8))]
    pub id: u32,
}

/// Arguments for the countdown command
#[derive(Args, Debug, Clone)]
pub struct CountdownArgs {
    /// Countdown duration in milliseconds
    #[arg(value_parser = clap::value_parser!(u64).range(0..=MAX_DURATION_MS))]
    pub duration_ms: u64,
}

/// Validates a profile status line.
fn validate_description(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("status line must not be empty".to_string());
    }
    if trimmed.chars().count() > 200 {
        return Err("status line must be at most 200 characters".to_string());
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Tests
// ============================================================================
