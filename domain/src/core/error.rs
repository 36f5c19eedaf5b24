//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("History limit must hold at least one exchange, got {0}")]
    InvalidHistoryLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_display() {
        assert_eq!(
            DomainError::EmptyQuestion.to_string(),
            "Question cannot be empty"
        );
    }
}
