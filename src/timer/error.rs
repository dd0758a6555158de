//! Countdown timer error types.

use thiserror::Error;

use super::task::MAX_DURATION_MS;

/// Errors that can occur when commanding the countdown timer task.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The requested duration exceeds the supported range.
    #[error("countdown duration {duration_ms} ms exceeds the maximum of {MAX_DURATION_MS} ms")]
    DurationOutOfRange {
        /// The rejected duration in milliseconds
        duration_ms: u64,
    },

    /// The timer task is no longer running, so the command cannot be delivered.
    #[error("countdown timer task is no longer running")]
    Disconnected,
}

impl TimerError {
    /// Returns true if this error means the caller passed a bad argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::DurationOutOfRange { .. })
    }
}
