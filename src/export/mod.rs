// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
pub mod model;
pub mod payload;

pub use logic::ExportLogic;
pub use payload::SubmissionPayload;

pub(crate) use fs_utils::write_output;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Rows in the timesheet CSV schema
    Csv,
    /// Totals, weeks and issues of the recalculation
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}
