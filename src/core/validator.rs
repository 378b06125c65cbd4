//! Per-row consistency checks.
//!
//! Issues are produced in a fixed order (lunch, basic, OT 1.5, OT 2.0, then
//! the worked-time cross-check) so every consumer sees the same list.

use crate::models::entry::{Field, ParsedRow, TimeEntryRow};
use crate::models::issue::{Issue, IssueKind};
use crate::models::minutes::Parsed;
use crate::utils::format_hm;

/// Allowed gap between worked time and entered hours.
pub const DEFAULT_TOLERANCE_MINUTES: i64 = 1;

pub fn validate_row(row: &TimeEntryRow, parsed: &ParsedRow, tolerance: i64) -> Vec<Issue> {
    let mut issues = Vec::new();
    let label = row.label();

    for (field, value) in [
        (Field::Lunch, parsed.lunch),
        (Field::Basic, parsed.basic),
        (Field::Ot15, parsed.ot15),
        (Field::Ot20, parsed.ot20),
    ] {
        if let Some(issue) = invalid_field(row, &label, field, value) {
            issues.push(issue);
        }
    }

    // Missing or bad start/finish/lunch: nothing to cross-check.
    let Some(worked) = parsed.worked_minutes() else {
        return issues;
    };

    if worked < 0 {
        issues.push(Issue {
            row: row.index,
            field: Field::Finish,
            kind: IssueKind::NegativeInterval,
            message: format!("{label}: Finish time is before start time after lunch."),
        });
        return issues;
    }

    let entered = parsed.entered_minutes();
    let diff = entered.saturating_sub(worked).saturating_abs();
    if diff > tolerance {
        issues.push(Issue {
            row: row.index,
            field: Field::Basic,
            kind: IssueKind::InconsistentRow,
            message: format!(
                "{label}: Worked = {}, but Basic + OT = {} (difference {}).",
                format_hm(worked),
                format_hm(entered),
                format_hm(diff)
            ),
        });
    }

    issues
}

fn invalid_field(row: &TimeEntryRow, label: &str, field: Field, value: Parsed) -> Option<Issue> {
    let text = row.text(field);
    if !value.is_invalid() || text.is_empty() {
        return None;
    }

    let kind = if text.contains(':') {
        IssueKind::InvalidTimeFormat
    } else {
        IssueKind::InvalidDurationFormat
    };

    Some(Issue {
        row: row.index,
        field,
        kind,
        message: format!("{label}: {} \"{text}\" is invalid.", field.label()),
    })
}
