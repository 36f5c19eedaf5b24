//! Uploaded file value object

use super::kind::{DocumentKind, media_type_for_extension};
use std::path::Path;

/// A file handed over at the upload boundary.
///
/// Consumed once by the extractor; the session never retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    filename: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Build an upload whose media type is declared from the file extension
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(media_type_for_extension)
            .unwrap_or_else(|| media_type_for_extension(""));

        Self::new(filename, media_type, bytes)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_media_type(&self.media_type)
    }
}
