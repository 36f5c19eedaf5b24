//! Mistral chat-completion provider
//!
//! Talks to `POST {base_url}/v1/chat/completions` with a bearer API key
//! read from the [`SecretStore`](punchline_application::SecretStore).

mod gateway;
pub mod types;

pub use gateway::MistralGateway;
