//! Extraction error taxonomy

use thiserror::Error;

/// Errors raised while turning an uploaded file into text.
///
/// Each error aborts only the upload that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{filename} is not valid UTF-8 text: {reason}")]
    Decode { filename: String, reason: String },

    #[error("{filename} is not a well-formed table: {reason}")]
    Parse { filename: String, reason: String },

    #[error("{filename} could not be opened as a PDF: {reason}")]
    Pdf { filename: String, reason: String },

    #[error("Failed to read {filename}: {reason}")]
    Io { filename: String, reason: String },
}

impl ExtractionError {
    pub fn decode(filename: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(filename: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    pub fn pdf(filename: impl Into<String>, reason: impl ToString) -> Self {
        Self::Pdf {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(filename: impl Into<String>, reason: impl ToString) -> Self {
        Self::Io {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    /// Short category name, used in logs
    pub fn category(&self) -> &'static str {
        match self {
            ExtractionError::Decode { .. } => "decode",
            ExtractionError::Parse { .. } => "parse",
            ExtractionError::Pdf { .. } => "pdf",
            ExtractionError::Io { .. } => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_file() {
        let err = ExtractionError::decode("notes.txt", "invalid byte at 3");
        assert_eq!(
            err.to_string(),
            "notes.txt is not valid UTF-8 text: invalid byte at 3"
        );
        assert_eq!(err.category(), "decode");
    }

    #[test]
    fn test_categories() {
        assert_eq!(ExtractionError::parse("a.csv", "x").category(), "parse");
        assert_eq!(ExtractionError::pdf("a.pdf", "x").category(), "pdf");
        assert_eq!(ExtractionError::io("a", "x").category(), "io");
    }
}
