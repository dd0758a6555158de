//! Persisted session state.
//!
//! This module provides the local credential/profile mirror:
//! - `store`: file-backed key-value storage for the session token and user record
//! - `error`: typed failures, including the not-signed-in case

pub mod error;
pub mod store;

pub use error::SessionError;
pub use store::SessionStore;
