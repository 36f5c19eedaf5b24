//! Wire types for the Mistral chat-completion endpoint
//!
//! Converts between domain [`CompletionRequest`]/[`Completion`] and the
//! JSON bodies the API exchanges.

use punchline_domain::{Choice, Completion, CompletionRequest};
use serde::{Deserialize, Serialize};

// ─── Domain → Mistral ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model().as_str(),
            messages: request
                .messages()
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

// ─── Mistral → Domain ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
pub struct WireChoice {
    pub message: WireAssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct WireAssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ChatCompletionResponse> for Completion {
    fn from(response: ChatCompletionResponse) -> Self {
        Completion {
            choices: response
                .choices
                .into_iter()
                .map(|c| Choice {
                    content: c.message.content.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Mistral answers errors with `{"message": ...}` or `{"detail": ...}`;
/// anything else is returned as-is.
pub fn error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("message").or_else(|| v.get("detail")))
        .map(|m| match m.as_str() {
            Some(s) => s.to_string(),
            None => m.to_string(),
        })
        .unwrap_or_else(|| body.trim().to_string())
}
