// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, CsvRecord};
use crate::models::entry::TimeEntryRow;
use csv::{QuoteStyle, WriterBuilder};
use std::io;

/// Writes the header and one line per row to `out`.
///
/// Fields with a comma, quote or line break are quoted, quotes doubled.
pub fn write_rows<W: io::Write>(out: W, rows: &[TimeEntryRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.serialize(CsvRecord::from(row))?;
    }

    wtr.flush()?;
    Ok(())
}

/// The CSV text of `rows`.
pub fn rows_to_csv(rows: &[TimeEntryRow]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}
