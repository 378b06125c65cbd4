// src/export/payload.rs

use crate::errors::{AppError, AppResult};
use crate::export::csv::rows_to_csv;
use crate::models::entry::TimeEntryRow;
use serde::Serialize;

/// Form fields submitted with a timesheet. Built here, sent elsewhere.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub employee_name: String,
    pub date_from: String,
    pub date_to: String,
    pub csv: String,
}

impl SubmissionPayload {
    pub fn build(name: &str, from: &str, to: &str, rows: &[TimeEntryRow]) -> AppResult<Self> {
        let required = [("employee name", name), ("start date", from), ("end date", to)];
        if let Some((what, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::MissingInput((*what).to_string()));
        }
        if rows.is_empty() {
            return Err(AppError::MissingInput("timesheet rows".to_string()));
        }

        Ok(Self {
            employee_name: name.trim().to_string(),
            date_from: from.trim().to_string(),
            date_to: to.trim().to_string(),
            csv: rows_to_csv(rows)?,
        })
    }
}
