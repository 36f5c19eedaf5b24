//! Completion gateway port
//!
//! Defines the interface for calling the hosted chat-completion endpoint.

use crate::ports::secret_store::SecretError;
use async_trait::async_trait;
use punchline_domain::{Completion, CompletionRequest};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no choices")]
    NoChoices,

    #[error("Timeout")]
    Timeout,

    #[error("API key unavailable: {0}")]
    Secret(#[from] SecretError),
}

/// Gateway for completion calls
///
/// One call per request; the gateway keeps no conversation state.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;
}
