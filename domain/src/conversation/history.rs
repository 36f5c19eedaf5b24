//! Bounded conversation history

use super::message::{Message, Speaker};
use crate::core::error::DomainError;
use std::collections::VecDeque;

/// Default number of messages kept (5 exchanges).
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Ordered log of the most recent messages of a session.
///
/// Invariant: `len() <= limit()` after every mutation. Appending past the
/// limit removes entries from the front, oldest first, one at a time.
/// Messages are never merged or deduplicated.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    messages: VecDeque<Message>,
    limit: usize,
}

impl ConversationHistory {
    /// Create an empty history holding at most [`DEFAULT_HISTORY_LIMIT`] messages
    pub fn new() -> Self {
        Self {
            messages: VecDeque::with_capacity(DEFAULT_HISTORY_LIMIT + 1),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Create an empty history with a custom limit.
    ///
    /// The limit must hold at least one full exchange (two messages).
    pub fn with_limit(limit: usize) -> Result<Self, DomainError> {
        if limit < 2 {
            return Err(DomainError::InvalidHistoryLimit(limit));
        }
        Ok(Self {
            messages: VecDeque::with_capacity(limit + 1),
            limit,
        })
    }

    /// Append one message, then evict from the front while over the limit
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.push(Message::new(speaker, text));
    }

    /// Append an already-built message
    pub fn push(&mut self, message: Message) {
        self.messages.push_back(message);
        while self.messages.len() > self.limit {
            self.messages.pop_front();
        }
    }

    /// Append a user message and its reply, in that order
    pub fn append_exchange(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        self.append(Speaker::User, question);
        self.append(Speaker::Bot, reply);
    }

    /// All retained messages, oldest first
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Message> + '_ {
        self.messages.iter()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
