//! CSV and XLSX parsing into [`TablePreview`]
//!
//! The first row is the header. Cells are rendered as text; empty
//! spreadsheet cells become empty strings.

use calamine::{Reader, Xlsx, open_workbook_from_rs};
use punchline_domain::{ExtractionError, TablePreview};
use std::io::Cursor;

/// Parse comma-separated bytes. Rows with a different number of fields than
/// the header are rejected.
pub fn csv_table(
    filename: &str,
    bytes: &[u8],
    preview_rows: usize,
) -> Result<TablePreview, ExtractionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| ExtractionError::parse(filename, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if header.is_empty() {
        return Err(ExtractionError::parse(filename, "no columns to parse"));
    }

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                .map_err(|e| ExtractionError::parse(filename, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TablePreview::from_rows(&header, &rows, preview_rows))
}

/// Parse the first worksheet of an Office Open XML workbook.
pub fn xlsx_table(
    filename: &str,
    bytes: &[u8],
    preview_rows: usize,
) -> Result<TablePreview, ExtractionError> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).map_err(|e| ExtractionError::parse(filename, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractionError::parse(filename, "workbook has no worksheet"))?
        .map_err(|e| ExtractionError::parse(filename, e))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());

    let header = rows
        .next()
        .ok_or_else(|| ExtractionError::parse(filename, "worksheet is empty"))?;
    let rows: Vec<Vec<String>> = rows.collect();

    Ok(TablePreview::from_rows(&header, &rows, preview_rows))
}
