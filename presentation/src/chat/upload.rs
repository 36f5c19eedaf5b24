//! Upload boundary: turns a path on disk into an [`UploadedFile`]

use punchline_domain::{ExtractionError, UploadedFile};
use std::path::Path;

/// Read a file for upload, declaring its media type from the extension
pub fn read_upload(path: &Path) -> Result<UploadedFile, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::io(path.display().to_string(), e))?;
    Ok(UploadedFile::from_path_bytes(path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use punchline_domain::DocumentKind;

    #[test]
    fn test_media_type_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ventes.CSV");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let file = read_upload(&path).unwrap();
        assert_eq!(file.filename(), "ventes.CSV");
        assert_eq!(file.media_type(), "text/csv");
        assert_eq!(file.kind(), DocumentKind::Csv);
        assert_eq!(file.bytes(), b"a,b\n1,2\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_upload(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
