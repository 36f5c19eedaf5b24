//! Document extractor port
//!
//! Turns an uploaded file into context text. Extraction is synchronous and
//! reads the whole file from memory.

use punchline_domain::{ExtractionError, ExtractionResult, UploadedFile};

pub trait DocumentExtractorPort: Send + Sync {
    /// Dispatch on the file's declared media type.
    ///
    /// Unsupported types return `Ok(ExtractionResult::Unsupported)`.
    fn extract(&self, file: &UploadedFile) -> Result<ExtractionResult, ExtractionError>;
}
