//! Input adapters: turn a file into timesheet rows.
//!
//! Adapters only produce [`TimeEntryRow`]s; imported rows go through the
//! same validation as any other rows.

pub mod csv;
pub mod docx;
pub mod html;

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntryRow;
use crate::utils::path::extension_of;
use std::path::Path;

/// Kind of input file, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Html,
    Docx,
}

impl InputKind {
    pub fn detect(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_str() {
            "csv" => Ok(InputKind::Csv),
            "html" | "htm" => Ok(InputKind::Html),
            "docx" => Ok(InputKind::Docx),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Loads rows from `path`, numbered from 1 in file order.
pub fn load_rows(path: &Path) -> AppResult<Vec<TimeEntryRow>> {
    let rows = match InputKind::detect(path)? {
        InputKind::Csv => csv::load(path)?,
        InputKind::Html => html::load(path)?,
        InputKind::Docx => docx::load(path)?,
    };
    Ok(renumber(rows))
}

/// Assigns 1-based indexes in order.
pub fn renumber(rows: Vec<TimeEntryRow>) -> Vec<TimeEntryRow> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| TimeEntryRow { index: i + 1, ..row })
        .collect()
}
