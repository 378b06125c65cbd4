use crate::config::Config;
use crate::core::overtime::{DEFAULT_BASIC_THRESHOLD_MINUTES, reallocate_weeks};
use crate::core::validator::{DEFAULT_TOLERANCE_MINUTES, validate_row};
use crate::core::aggregator;
use crate::models::bucket::WeekBucket;
use crate::models::entry::{ParsedRow, TimeEntryRow};
use crate::models::issue::Issue;
use std::collections::BTreeMap;

/// Tunables of a recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub basic_threshold_minutes: i64,
    pub tolerance_minutes: i64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            basic_threshold_minutes: DEFAULT_BASIC_THRESHOLD_MINUTES,
            tolerance_minutes: DEFAULT_TOLERANCE_MINUTES,
        }
    }
}

impl From<&Config> for Rules {
    fn from(cfg: &Config) -> Self {
        Self {
            basic_threshold_minutes: cfg.weekly_basic_threshold_minutes,
            tolerance_minutes: cfg.mismatch_tolerance_minutes,
        }
    }
}

/// Everything derived from one snapshot of rows.
#[derive(Debug, Clone, Default)]
pub struct Recalculation {
    pub row_count: usize,
    pub issues: Vec<Issue>,
    pub raw_weeks: BTreeMap<String, WeekBucket>,
    pub weeks: BTreeMap<String, WeekBucket>,
    pub overall: WeekBucket,
}

impl Recalculation {
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Issues belonging to one row.
    pub fn issues_for(&self, index: usize) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.row == index)
    }
}

pub struct Core;

impl Core {
    /// Parses every row once, then validates and aggregates.
    pub fn recalculate(rows: &[TimeEntryRow], rules: &Rules) -> Recalculation {
        let parsed: Vec<ParsedRow> = rows.iter().map(TimeEntryRow::parse).collect();

        let issues = rows
            .iter()
            .zip(&parsed)
            .flat_map(|(row, p)| validate_row(row, p, rules.tolerance_minutes))
            .collect();

        let raw_weeks = aggregator::aggregate(&parsed);
        let weeks = reallocate_weeks(&raw_weeks, rules.basic_threshold_minutes);
        let overall = aggregator::sum_weeks(&weeks);

        Recalculation {
            row_count: rows.len(),
            issues,
            raw_weeks,
            weeks,
            overall,
        }
    }
}
