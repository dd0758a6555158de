//! File-backed session storage.
//!
//! This module persists two values under the client data directory:
//! - `session`: the bearer token issued at login
//! - `user`: the last user record mirrored from the server
//!
//! A missing or unreadable store is treated as signed-out, never as an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::UserRecord;

use super::error::SessionError;

// ============================================================================
// Constants
// ============================================================================

/// Data directory under the user's home.
const DATA_DIR: &str = ".quizai";

/// Store file name inside the data directory.
const SESSION_FILE: &str = "session.json";

// ============================================================================
// SessionStore
// ============================================================================

/// The persisted store value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    /// Bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<String>,
    /// Mirrored user record
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserRecord>,
}

/// File-backed key-value storage for session credentials.
pub struct SessionStore {
    /// Store file path
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at the default path (`~/.quizai/session.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or(SessionError::NoHomeDir)?;
        Ok(Self {
            path: home.join(DATA_DIR).join(SESSION_FILE),
        })
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.read().session
    }

    /// Returns the stored user record, if any.
    pub fn user(&self) -> Option<UserRecord> {
        self.read().user
    }

    /// Returns true only when both the token and the user record are present.
    pub fn is_authenticated(&self) -> bool {
        let state = self.read();
        state.session.is_some() && state.user.is_some()
    }

    /// Returns the bearer token, or a not-signed-in error when either
    /// credential is missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when the caller must sign in.
    pub fn require_auth(&self) -> Result<String, SessionError> {
        let state = self.read();
        match (state.session, state.user) {
            (Some(token), Some(_)) => Ok(token),
            _ => Err(SessionError::NotAuthenticated),
        }
    }

    /// Stores the credentials issued at login.
    pub fn store_login(&self, token: &str, user: &UserRecord) -> Result<(), SessionError> {
        self.write(&StoredSession {
            session: Some(token.to_string()),
            user: Some(user.clone()),
        })
    }

    /// Mirrors a fresh user record into the store, keeping the token.
    pub fn store_user(&self, user: &UserRecord) -> Result<(), SessionError> {
        let mut state = self.read();
        state.user = Some(user.clone());
        self.write(&state)
    }

    /// Removes all stored credentials.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Loads the store, degrading to empty on any failure.
    fn read(&self) -> StoredSession {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return StoredSession::default();
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("ignoring unreadable session store {:?}: {}", self.path, e);
                StoredSession::default()
            }
        }
    }

    /// Writes the store, creating the data directory when needed.
    fn write(&self, state: &StoredSession) -> Result<(), SessionError> {
        let wrap = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json).map_err(wrap)
    }
}

// ============================================================================
// Tests
// ============================================================================
