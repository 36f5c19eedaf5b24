//! Infrastructure layer for punchline
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod extract;
pub mod logging;
pub mod providers;
pub mod secrets;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig, FileSessionConfig,
};
pub use extract::LocalDocumentExtractor;
pub use logging::JsonlConversationLogger;
pub use providers::mistral::MistralGateway;
pub use secrets::TomlSecretStore;
