// src/export/logic.rs

use crate::core::logic::{Core, Rules};
use crate::errors::AppResult;
use crate::export::csv::rows_to_csv;
use crate::export::json::report_to_json;
use crate::export::{ExportFormat, notify_export_success, write_output};
use crate::models::entry::TimeEntryRow;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `rows` to `path`.
    ///
    /// - `Csv`: the rows themselves, text fields unchanged
    /// - `Json`: the recalculation (adjusted weeks, overall totals, issues)
    ///
    /// Nothing is written for an empty timesheet.
    pub fn export(
        rows: &[TimeEntryRow],
        rules: &Rules,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if rows.is_empty() {
            warning("No rows to export.");
            return Ok(());
        }

        info(format!(
            "Exporting {} row(s) to {}: {}",
            rows.len(),
            format.as_str(),
            path.display()
        ));

        let content = match format {
            ExportFormat::Csv => rows_to_csv(rows)?,
            ExportFormat::Json => report_to_json(&Core::recalculate(rows, rules))?,
        };

        write_output(path, &content, force)?;
        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
