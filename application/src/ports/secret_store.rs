//! Secret store port
//!
//! The API key is looked up at call time, so a rotated key is picked up
//! without restarting the session.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    #[error("secrets file not found (searched: {0})")]
    FileNotFound(String),

    #[error("could not read secrets file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("secret '{0}' is missing or empty")]
    MissingKey(String),
}

/// Source of provider credentials
pub trait SecretStore: Send + Sync {
    /// Return the API key for the completion endpoint
    fn api_key(&self) -> Result<String, SecretError>;
}
