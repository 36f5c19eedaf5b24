//! Extraction result value objects

/// Number of data rows shown in a table preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Separator between cells in a rendered table.
const CELL_SEPARATOR: &str = " | ";

/// Outcome of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Running text (plain text files, PDFs)
    PlainText(String),
    /// A table: the full serialization becomes the context, the preview is
    /// for display
    TabularPreview(TablePreview),
    /// No extraction path for this media type; not an error
    Unsupported,
}

impl ExtractionResult {
    /// Text to store as the document context, if any
    pub fn context_text(&self) -> Option<&str> {
        match self {
            ExtractionResult::PlainText(text) => Some(text),
            ExtractionResult::TabularPreview(table) => Some(table.full()),
            ExtractionResult::Unsupported => None,
        }
    }

    pub fn into_context_text(self) -> Option<String> {
        match self {
            ExtractionResult::PlainText(text) => Some(text),
            ExtractionResult::TabularPreview(table) => Some(table.full),
            ExtractionResult::Unsupported => None,
        }
    }
}

/// A table rendered twice: in full, and truncated to a head preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePreview {
    full: String,
    preview: String,
    rows: usize,
    columns: usize,
}

impl TablePreview {
    /// Render a header and data rows.
    ///
    /// Each line is the cells joined by `" | "`; the preview holds the header
    /// plus at most `preview_rows` data rows.
    pub fn from_rows(header: &[String], rows: &[Vec<String>], preview_rows: usize) -> Self {
        let header_line = header.join(CELL_SEPARATOR);
        let row_lines: Vec<String> = rows.iter().map(|r| r.join(CELL_SEPARATOR)).collect();

        let full = std::iter::once(header_line.as_str())
            .chain(row_lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        let preview = std::iter::once(header_line.as_str())
            .chain(row_lines.iter().take(preview_rows).map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");

        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        Self {
            full,
            preview,
            rows: rows.len(),
            columns,
        }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Number of data rows, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_preview_is_header_plus_head() {
        let header = row(&["nom", "age"]);
        let rows: Vec<_> = (0..8).map(|i| row(&[&format!("p{i}"), "30"])).collect();

        let table = TablePreview::from_rows(&header, &rows, 5);

        assert_eq!(table.rows(), 8);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.preview().lines().count(), 6);
        assert_eq!(table.full().lines().count(), 9);
        assert_eq!(table.preview().lines().next(), Some("nom | age"));
        assert!(table.full().ends_with("p7 | 30"));
    }

    #[test]
    fn test_header_only_table() {
        let table = TablePreview::from_rows(&row(&["a", "b", "c"]), &[], 5);
        assert_eq!(table.full(), "a | b | c");
        assert_eq!(table.preview(), table.full());
        assert_eq!(table.rows(), 0);
        assert_eq!(table.columns(), 3);
    }

    #[test]
    fn test_context_text_per_variant() {
        let table = TablePreview::from_rows(&row(&["x"]), &[row(&["1"])], 5);
        assert_eq!(
            ExtractionResult::TabularPreview(table).context_text(),
            Some("x\n1")
        );
        assert_eq!(
            ExtractionResult::PlainText("hello".into()).into_context_text(),
            Some("hello".to_string())
        );
        assert_eq!(ExtractionResult::Unsupported.context_text(), None);
    }
}
