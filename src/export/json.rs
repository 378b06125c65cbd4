// src/export/json.rs

use crate::core::logic::Recalculation;
use crate::errors::AppResult;
use crate::export::model::ReportExport;

/// Pretty-printed JSON of a recalculation.
pub fn report_to_json(calc: &Recalculation) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&ReportExport::from(calc))?)
}
