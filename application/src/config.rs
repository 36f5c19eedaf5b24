//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the completion timeout and the bot persona.

use punchline_domain::{DEFAULT_PERSONA, Model};
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for LLM API calls.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for an API response before timing out.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}

/// What a chat session sends.
///
/// The history limit belongs to [`SessionState`](crate::SessionState).
#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Model identifier sent with every request.
    pub model: Model,
    /// Instruction leading every request.
    pub persona: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl ChatSettings {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }
}
