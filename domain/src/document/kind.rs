//! Document format dispatch

use serde::{Deserialize, Serialize};

pub const MEDIA_TYPE_TEXT: &str = "text/plain";
pub const MEDIA_TYPE_CSV: &str = "text/csv";
pub const MEDIA_TYPE_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_PNG: &str = "image/png";
pub const MEDIA_TYPE_JPEG: &str = "image/jpeg";
pub const MEDIA_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Document formats, resolved from the declared media type.
///
/// Adding a format means adding a variant here and a handler in every
/// extractor implementation; matches over this enum are exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Csv,
    Xlsx,
    Pdf,
    Unsupported,
}

impl DocumentKind {
    /// Resolve a declared media type.
    ///
    /// Parameters such as `; charset=utf-8` are ignored and the comparison is
    /// case-insensitive. Image types and unknown types are `Unsupported`.
    pub fn from_media_type(media_type: &str) -> Self {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MEDIA_TYPE_TEXT => DocumentKind::PlainText,
            MEDIA_TYPE_CSV | "application/csv" => DocumentKind::Csv,
            MEDIA_TYPE_XLSX => DocumentKind::Xlsx,
            MEDIA_TYPE_PDF => DocumentKind::Pdf,
            _ => DocumentKind::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "plain_text",
            DocumentKind::Csv => "csv",
            DocumentKind::Xlsx => "xlsx",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Unsupported => "unsupported",
        }
    }

    /// Whether extraction yields a table rather than running text
    pub fn is_tabular(&self) -> bool {
        matches!(self, DocumentKind::Csv | DocumentKind::Xlsx)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media type declared for a file extension at the upload boundary.
///
/// Images are accepted for display only and carry their image type so they
/// resolve to [`DocumentKind::Unsupported`]. Unknown extensions are declared
/// as `application/octet-stream`.
pub fn media_type_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "txt" => MEDIA_TYPE_TEXT,
        "csv" => MEDIA_TYPE_CSV,
        "xlsx" => MEDIA_TYPE_XLSX,
        "pdf" => MEDIA_TYPE_PDF,
        "png" => MEDIA_TYPE_PNG,
        "jpg" | "jpeg" => MEDIA_TYPE_JPEG,
        _ => MEDIA_TYPE_OCTET_STREAM,
    }
}
