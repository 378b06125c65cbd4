//! Plain-text summaries of a [`Recalculation`].
//!
//! No colors here: the CLI decorates the text, exports reuse it as is.

use crate::core::logic::Recalculation;
use crate::utils::format_hm;

pub const NO_ROWS: &str = "No rows in timesheet.";
pub const NO_WEEKS: &str = "No weekly data.";
pub const NO_ISSUES: &str = "No issues detected.";
pub const NO_ISSUES_NO_DATA: &str = "No issues detected (no data).";

/// Overall adjusted totals and grand total.
pub fn format_overall(calc: &Recalculation) -> String {
    if calc.is_empty() {
        return NO_ROWS.to_string();
    }

    let t = &calc.overall;
    format!(
        "Basic:   {}\nOT 1.5:  {}\nOT 2.0:  {}\n-------------------------\nTOTAL:   {}",
        format_hm(t.basic),
        format_hm(t.ot15),
        format_hm(t.ot20),
        format_hm(t.total())
    )
}

/// One block per week, in lexicographic order of the label
/// (so `Week 10` comes before `Week 2`).
pub fn format_weekly(calc: &Recalculation) -> String {
    if calc.is_empty() {
        return NO_ROWS.to_string();
    }
    if calc.weeks.is_empty() {
        return NO_WEEKS.to_string();
    }

    calc.weeks
        .iter()
        .map(|(week, t)| {
            format!(
                "{week}\n  Basic:  {}\n  OT 1.5: {}\n  OT 2.0: {}\n  Total:  {}\n",
                format_hm(t.basic),
                format_hm(t.ot15),
                format_hm(t.ot20),
                format_hm(t.total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_issues(calc: &Recalculation) -> String {
    if calc.is_empty() {
        return NO_ISSUES_NO_DATA.to_string();
    }
    if calc.issues.is_empty() {
        return NO_ISSUES.to_string();
    }

    calc.issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
