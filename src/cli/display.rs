//! Display utilities for the QuizAI client CLI.
//!
//! This module provides formatted output for:
//! - Profile and leaderboard rendering
//! - Countdown progress
//! - Success and error messages
//!
//! Rendering helpers skip absent fields silently instead of failing; the
//! record is owned by the server and may omit anything.

use std::io::Write;

use crate::avatar;
use crate::types::{LeaderboardEntry, UserRecord};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error message on stderr.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Shows a greeting after a successful login.
    pub fn show_login_success(user: &UserRecord) {
        match &user.username {
            Some(name) => println!("Signed in as {}", name),
            None => println!("Signed in"),
        }
    }

    /// Shows a confirmation after logout.
    pub fn show_logout() {
        println!("Signed out, local session cleared");
    }

    /// Shows the locally stored session state.
    pub fn show_status(authenticated: bool, user: Option<&UserRecord>) {
        if !authenticated {
            println!("Not signed in");
            return;
        }

        println!("Signed in");
        if let Some(name) = user.and_then(|u| u.username.as_deref()) {
            println!("  account: {}", name);
        }
    }

    /// Renders a user profile.
    pub fn show_profile(user: &UserRecord) {
        if let Some(name) = &user.username {
            println!("{}", name);
        }

        match &user.description {
            Some(description) => println!("  status: {}", description),
            None => println!("  status: Status not set"),
        }

        if let Some(points) = user.global_points {
            println!("  rating: {}", points);
        }

        if let Some(games) = user.games_played_number {
            println!("  games played: {}", games);
        }

        match user.pic_id.and_then(avatar::avatar_url) {
            Some(url) => println!("  avatar: {}", url),
            None => {
                let name = user.username.as_deref().unwrap_or("");
                println!("  avatar: [{}]", avatar::initial_badge(name));
            }
        }
    }

    /// Renders the global leaderboard.
    pub fn show_leaderboard(entries: &[LeaderboardEntry]) {
        println!("Global leaderboard");
        println!("------------------");

        if entries.is_empty() {
            println!("  (empty)");
            return;
        }

        for (rank, entry) in entries.iter().enumerate() {
            println!("  {:>3}. {:<20} {}", rank + 1, entry.username, entry.global_points);
        }
    }

    /// Shows a confirmation after an avatar change.
    pub fn show_avatar_updated(pic_id: u32) {
        println!("Avatar set to #{}", pic_id);
    }

    /// Shows countdown progress, overwriting the current line.
    pub fn show_tick(remaining_ms: u64) {
        print!("\r  remaining: {}   ", Self::format_remaining(remaining_ms));
        let _ = std::io::stdout().flush();
    }

    /// Shows the countdown completion line.
    pub fn show_countdown_finished() {
        println!();
        println!("Time's up");
    }

    /// Formats milliseconds as `m:ss.mmm`.
    fn format_remaining(remaining_ms: u64) -> String {
        let minutes = remaining_ms / 60_000;
        let seconds = (remaining_ms % 60_000) / 1000;
        let millis = remaining_ms % 1000;
        format!("{}:{:02}.{:03}", minutes, seconds, millis)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remaining_zero() {
        assert_eq!(Display::format_remaining(0), "0:00.000");
    }

    #[test]
    fn test_format_remaining_sub_second() {
        assert_eq!(Display::format_remaining(150), "0:00.150");
    }

    #[test]
    fn test_format_remaining_minutes() {
        assert_eq!(Display::format_remaining(90_500), "1:30.500");
    }

    #[test]
    fn test_format_remaining_exact_minute() {
        assert_eq!(Display::format_remaining(120_000), "2:00.000");
    }
}
