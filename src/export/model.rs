// src/export/model.rs

use crate::core::logic::Recalculation;
use crate::models::bucket::WeekBucket;
use crate::models::entry::TimeEntryRow;
use crate::models::issue::Issue;
use crate::utils::format_hm;
use serde::{Deserialize, Serialize};

/// One line of the CSV schema, shared by export and import.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvRecord {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Day", default)]
    pub day: String,
    #[serde(rename = "Week", default)]
    pub week: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "Finish", default)]
    pub finish: String,
    #[serde(rename = "Lunch", default)]
    pub lunch: String,
    #[serde(rename = "BasicHours", default)]
    pub basic: String,
    #[serde(rename = "OT1_5Hours", default)]
    pub ot15: String,
    #[serde(rename = "OT2_0Hours", default)]
    pub ot20: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

/// Header of the CSV schema, in column order.
pub const CSV_HEADERS: [&str; 10] = [
    "Date",
    "Day",
    "Week",
    "Start",
    "Finish",
    "Lunch",
    "BasicHours",
    "OT1_5Hours",
    "OT2_0Hours",
    "Notes",
];

impl CsvRecord {
    pub fn into_row(self, index: usize) -> TimeEntryRow {
        TimeEntryRow {
            index,
            date: self.date,
            day: self.day,
            week: self.week,
            start: self.start,
            finish: self.finish,
            lunch: self.lunch,
            basic: self.basic,
            ot15: self.ot15,
            ot20: self.ot20,
            notes: self.notes,
        }
    }
}

impl From<&TimeEntryRow> for CsvRecord {
    fn from(row: &TimeEntryRow) -> Self {
        Self {
            date: row.date.clone(),
            day: row.day.clone(),
            week: row.week.clone(),
            start: row.start.clone(),
            finish: row.finish.clone(),
            lunch: row.lunch.clone(),
            basic: row.basic.clone(),
            ot15: row.ot15.clone(),
            ot20: row.ot20.clone(),
            notes: row.notes.clone(),
        }
    }
}

/// Minute totals with their `Hh Mm` rendering.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TotalsExport {
    pub basic_minutes: i64,
    pub ot15_minutes: i64,
    pub ot20_minutes: i64,
    pub total_minutes: i64,
    pub basic: String,
    pub ot15: String,
    pub ot20: String,
    pub total: String,
}

impl From<&WeekBucket> for TotalsExport {
    fn from(b: &WeekBucket) -> Self {
        Self {
            basic_minutes: b.basic,
            ot15_minutes: b.ot15,
            ot20_minutes: b.ot20,
            total_minutes: b.total(),
            basic: format_hm(b.basic),
            ot15: format_hm(b.ot15),
            ot20: format_hm(b.ot20),
            total: format_hm(b.total()),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct WeekExport {
    pub week: String,
    /// Totals as entered, before the weekly reallocation.
    pub entered: WeekBucket,
    pub adjusted: TotalsExport,
}

/// JSON document of a whole recalculation.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub rows: usize,
    pub overall: Option<TotalsExport>,
    pub weeks: Vec<WeekExport>,
    pub issues: Vec<Issue>,
}

impl From<&Recalculation> for ReportExport {
    fn from(calc: &Recalculation) -> Self {
        let weeks = calc
            .weeks
            .iter()
            .map(|(week, adjusted)| WeekExport {
                week: week.clone(),
                entered: calc.raw_weeks.get(week).copied().unwrap_or_default(),
                adjusted: adjusted.into(),
            })
            .collect();

        Self {
            rows: calc.row_count,
            // No rows: no totals rather than zero totals.
            overall: (!calc.is_empty()).then(|| (&calc.overall).into()),
            weeks,
            issues: calc.issues.clone(),
        }
    }
}
