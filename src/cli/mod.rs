//! CLI module for the QuizAI client.
//!
//! This module provides the command-line interface:
//! - `commands`: command definitions using clap derive
//! - `display`: output formatting and display logic

pub mod commands;
pub mod display;

pub use commands::{AvatarArgs, Cli, Commands, CountdownArgs, LoginArgs, UpdateArgs};
pub use display::Display;
