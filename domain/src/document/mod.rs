//! Uploaded document domain.
//!
//! - [`upload::UploadedFile`]: raw bytes plus declared media type
//! - [`kind::DocumentKind`]: closed set of formats with an extraction path
//! - [`result::ExtractionResult`]: plain text, table preview, or unsupported
//! - [`error::ExtractionError`]: per-format extraction failures
//!
//! Parsing itself lives behind the application's extractor port.

pub mod error;
pub mod kind;
pub mod result;
pub mod upload;
