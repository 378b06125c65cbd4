use crate::models::entry::Field;
use serde::Serialize;
use std::fmt;

/// Category of a row diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// Malformed `H:MM` text.
    InvalidTimeFormat,
    /// Malformed bare number of hours or minutes.
    InvalidDurationFormat,
    /// Worked time and entered buckets disagree beyond the tolerance.
    InconsistentRow,
    /// Finish precedes start once lunch is deducted.
    NegativeInterval,
}

/// One diagnostic, tagged to the row and field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub row: usize,
    pub field: Field,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
