//! Reads rows back from the CSV export schema.

use crate::errors::AppResult;
use crate::export::model::CsvRecord;
use crate::models::entry::TimeEntryRow;
use std::fs::File;
use std::io;
use std::path::Path;

pub fn load(path: &Path) -> AppResult<Vec<TimeEntryRow>> {
    let file = File::open(path)?;
    read_rows(file)
}

/// Missing columns and short lines read as empty text.
pub fn read_rows<R: io::Read>(reader: R) -> AppResult<Vec<TimeEntryRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in rdr.deserialize::<CsvRecord>().enumerate() {
        rows.push(record?.into_row(i + 1));
    }

    Ok(rows)
}
