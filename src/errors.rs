//! Unified application error type.
//! All modules (import, export, core, cli, config) return AppError to keep
//! the error handling consistent and easy to manage.
//!
//! Row-level problems (bad time text, mismatched totals) are NOT errors:
//! they are collected as `models::issue::Issue` diagnostics and never stop
//! a recalculation.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Document import
    // ---------------------------
    #[error("Cannot read document container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error(
        "Could not find a timesheet table in that document. Make sure it's the standard weekly timesheet template."
    )]
    NoTableFound,

    #[error("The timesheet table in that document has no rows with times or hours")]
    NoRowsExtracted,

    #[error("Unsupported input file: {0} (expected .csv, .html, .htm or .docx)")]
    UnsupportedInput(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Submission
    // ---------------------------
    #[error("Missing required input: {0}")]
    MissingInput(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Timesheet has {0} issue(s)")]
    ValidationFailed(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
