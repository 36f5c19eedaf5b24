//! Application layer for punchline
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ChatSettings};
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_extractor::DocumentExtractorPort,
    progress::{NoProgress, ProgressNotifier},
    secret_store::{SecretError, SecretStore},
};
pub use use_cases::chat_session::{ChatSession, SessionState, SubmitOutcome, UploadOutcome};
pub use use_cases::generate_response::{GenerateError, ResponseGenerator};
