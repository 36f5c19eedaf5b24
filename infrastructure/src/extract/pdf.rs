//! PDF text extraction

use lopdf::Document;
use punchline_domain::ExtractionError;
use tracing::debug;

/// Separator placed between consecutive pages
const PAGE_SEPARATOR: &str = "\n";

/// Extract the text of every page, in page order.
///
/// Only a document that cannot be loaded (corrupt or encrypted) is an
/// error. A page without extractable text contributes an empty string.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(page_texts(filename, bytes)?.join(PAGE_SEPARATOR))
}

pub fn page_texts(filename: &str, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let document = Document::load_mem(bytes).map_err(|e| ExtractionError::pdf(filename, e))?;
    if document.is_encrypted() {
        return Err(ExtractionError::pdf(filename, "document is encrypted"));
    }

    let texts = document
        .get_pages()
        .into_keys()
        .map(|page| match document.extract_text(&[page]) {
            Ok(text) => text,
            Err(e) => {
                debug!(filename, page, "No text on page: {}", e);
                String::new()
            }
        })
        .collect();

    Ok(texts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a PDF with one page per entry; `None` is a page with an empty
    /// content stream (as a scanned page would have).
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });

        let mut kids = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_pages_in_order() {
        let bytes = build_pdf(&[Some("Premiere page"), Some("Seconde page")]);
        let pages = page_texts("doc.pdf", &bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Premiere page"));
        assert!(pages[1].contains("Seconde page"));

        let text = extract_text("doc.pdf", &bytes).unwrap();
        let first = text.find("Premiere").unwrap();
        let second = text.find("Seconde").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_page_without_text_contributes_empty_string() {
        let bytes = build_pdf(&[Some("Bonjour"), None]);
        let pages = page_texts("scan.pdf", &bytes).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Bonjour"));
        assert!(pages[1].trim().is_empty());
        assert!(extract_text("scan.pdf", &bytes).unwrap().contains("Bonjour"));
    }

    #[test]
    fn test_corrupt_document_is_error() {
        let err = extract_text("broken.pdf", b"%PDF-1.5\ngarbage").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf { ref filename, .. } if filename == "broken.pdf"));
    }
}
