//! Completion request and response value objects

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role of a message sent to the completion endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One `{role, content}` pair of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A fully composed request (Value Object)
///
/// Message order is fixed: persona instruction, then the document context
/// when one is present, then the user's question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    model: Model,
    messages: Vec<PromptMessage>,
}

impl CompletionRequest {
    pub fn compose(model: Model, persona: &str, question: &str, context: Option<&str>) -> Self {
        let mut messages = Vec::with_capacity(3);
        messages.push(PromptMessage::system(persona));
        if let Some(context) = context {
            messages.push(PromptMessage::system(context));
        }
        messages.push(PromptMessage::user(question));

        Self { model, messages }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    /// Whether a document context was injected
    pub fn has_context(&self) -> bool {
        self.messages.len() == 3
    }
}

/// One alternative returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub content: String,
}

/// The provider's answer to a [`CompletionRequest`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub choices: Vec<Choice>,
}

impl Completion {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: texts
                .into_iter()
                .map(|t| Choice { content: t.into() })
                .collect(),
        }
    }

    /// Text of the first choice; later choices are ignored
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.content.as_str())
    }
}
