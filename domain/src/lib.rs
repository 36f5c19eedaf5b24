//! Domain layer for punchline
//!
//! This crate contains the entities and value objects of a chat session.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Exchange
//!
//! One user message paired with the bot's reply. The
//! [`ConversationHistory`] keeps the most recent exchanges and evicts the
//! oldest message first once its limit is reached.
//!
//! ## Context
//!
//! Text extracted from an uploaded document. At most one context is live in
//! the [`ContextStore`]; it is injected into every completion request until
//! it is replaced or the session is reset.

pub mod context;
pub mod conversation;
pub mod core;
pub mod document;
pub mod prompt;

// Re-export commonly used types
pub use context::ContextStore;
pub use conversation::{
    history::{ConversationHistory, DEFAULT_HISTORY_LIMIT},
    message::{Message, Speaker},
};
pub use core::{error::DomainError, model::Model, question::Question, string::truncate};
pub use document::{
    error::ExtractionError,
    kind::{DocumentKind, media_type_for_extension},
    result::{DEFAULT_PREVIEW_ROWS, ExtractionResult, TablePreview},
    upload::UploadedFile,
};
pub use prompt::{
    persona::DEFAULT_PERSONA,
    request::{Choice, Completion, CompletionRequest, PromptMessage, Role},
};
