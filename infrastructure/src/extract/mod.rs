//! Document extraction adapters
//!
//! [`LocalDocumentExtractor`] dispatches on the declared media type of an
//! upload and hands the bytes to one parser per [`DocumentKind`].

mod pdf;
mod tabular;
mod text;

use punchline_application::ports::document_extractor::DocumentExtractorPort;
use punchline_domain::{
    DEFAULT_PREVIEW_ROWS, DocumentKind, ExtractionError, ExtractionResult, UploadedFile,
};
use tracing::debug;

/// In-process extractor for plain text, CSV, XLSX and PDF uploads
#[derive(Debug, Clone)]
pub struct LocalDocumentExtractor {
    preview_rows: usize,
}

impl LocalDocumentExtractor {
    pub fn new(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }
}

impl Default for LocalDocumentExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_ROWS)
    }
}

impl DocumentExtractorPort for LocalDocumentExtractor {
    fn extract(&self, file: &UploadedFile) -> Result<ExtractionResult, ExtractionError> {
        let kind = file.kind();
        debug!(
            filename = file.filename(),
            kind = kind.as_str(),
            bytes = file.size(),
            "Extracting upload"
        );

        match kind {
            DocumentKind::PlainText => {
                text::decode(file.filename(), file.bytes()).map(ExtractionResult::PlainText)
            }
            DocumentKind::Csv => tabular::csv_table(file.filename(), file.bytes(), self.preview_rows)
                .map(ExtractionResult::TabularPreview),
            DocumentKind::Xlsx => {
                tabular::xlsx_table(file.filename(), file.bytes(), self.preview_rows)
                    .map(ExtractionResult::TabularPreview)
            }
            DocumentKind::Pdf => {
                pdf::extract_text(file.filename(), file.bytes()).map(ExtractionResult::PlainText)
            }
            DocumentKind::Unsupported => Ok(ExtractionResult::Unsupported),
        }
    }
}
