//! Plain-text decoding

use punchline_domain::ExtractionError;

/// Decode the upload as UTF-8. A leading byte-order mark is dropped.
pub fn decode(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ExtractionError::decode(filename, e))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode("a.txt", "Crème brûlée".as_bytes()).unwrap(), "Crème brûlée");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode("a.txt", b"\xef\xbb\xbfhello").unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        // Latin-1 encoded "é"
        let err = decode("latin1.txt", b"caf\xe9").unwrap_err();
        assert!(matches!(err, ExtractionError::Decode { ref filename, .. } if filename == "latin1.txt"));
    }

    #[test]
    fn test_empty_file_is_empty_text() {
        assert_eq!(decode("empty.txt", b"").unwrap(), "");
    }
}
