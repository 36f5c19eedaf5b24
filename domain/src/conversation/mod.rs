//! Conversation domain.
//!
//! - [`message::Message`]: one immutable line of the conversation log
//! - [`history::ConversationHistory`]: bounded, FIFO-evicting message log

pub mod history;
pub mod message;
