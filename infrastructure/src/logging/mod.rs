//! Conversation transcript logging
//!
//! Provides [`JsonlConversationLogger`], which appends session events to a
//! JSONL file through the
//! [`ConversationLogger`](punchline_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
