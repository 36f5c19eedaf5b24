//! Completion provider adapters
//!
//! Each provider implements
//! [`CompletionGateway`](punchline_application::CompletionGateway).

pub mod mistral;
