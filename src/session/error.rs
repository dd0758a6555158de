//! Session store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around the persisted session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No credentials are present; the caller must sign in first.
    #[error("not signed in; run `quizai login <username>` first")]
    NotAuthenticated,

    /// No home directory is available to place the store in.
    #[error("could not determine a home directory for the session store")]
    NoHomeDir,

    /// The store file could not be written.
    #[error("failed to write session store {path:?}: {source}")]
    Write {
        /// Store file path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The store value could not be encoded.
    #[error("failed to encode session store: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SessionError {
    /// Returns true if this error should be shown as a sign-in hint rather
    /// than a failure.
    #[must_use]
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}
