//! Countdown timer task.
//!
//! This module contains the background countdown unit:
//! - `task`: the timer task, its spawn helpers, and the command handle
//! - `error`: typed failures for malformed commands

pub mod error;
pub mod task;

pub use error::TimerError;
pub use task::{
    spawn, spawn_with_poll_interval, CountdownHandle, CountdownTimer, MAX_DURATION_MS,
    POLL_INTERVAL,
};
