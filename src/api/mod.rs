//! Game server REST API.
//!
//! This module provides the HTTP wrapper around the QuizAI server:
//! - `client`: profile, avatar, leaderboard, and auth calls

pub mod client;

pub use client::ApiClient;
