use crate::models::minutes::Parsed;
use crate::utils::date::weekday_label;
use crate::utils::time::{parse_break_duration, parse_clock_time, parse_duration};
use serde::{Deserialize, Serialize};

/// Aggregation key used for rows without a week label.
pub const UNSPECIFIED_WEEK: &str = "Unspecified";

/// Fields of a timesheet row, used to tag diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Index,
    Date,
    Day,
    Week,
    Start,
    Finish,
    Lunch,
    Basic,
    Ot15,
    Ot20,
    Notes,
}

impl Field {
    /// Human label used in diagnostic messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Index => "Row",
            Field::Date => "Date",
            Field::Day => "Day",
            Field::Week => "Week",
            Field::Start => "Start",
            Field::Finish => "Finish",
            Field::Lunch => "Lunch value",
            Field::Basic => "Basic hours",
            Field::Ot15 => "OT 1.5 hours",
            Field::Ot20 => "OT 2.0 hours",
            Field::Notes => "Notes",
        }
    }
}

/// One day's record, exactly as entered. The text fields are the single
/// source of truth: minutes are recomputed from them on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub index: usize,
    pub date: String,
    pub day: String,
    pub week: String,
    pub start: String,
    pub finish: String,
    pub lunch: String,
    pub basic: String,
    pub ot15: String,
    pub ot20: String,
    pub notes: String,
}

impl TimeEntryRow {
    /// Week label used as aggregation key.
    pub fn week_key(&self) -> String {
        normalize_week(&self.week)
    }

    /// `Row 3` or `Row 3 (2025-03-10)` when a date is present.
    pub fn label(&self) -> String {
        if self.date.is_empty() {
            format!("Row {}", self.index)
        } else {
            format!("Row {} ({})", self.index, self.date)
        }
    }

    /// The entered day, or the weekday derived from the date.
    pub fn day_label(&self) -> String {
        let day = self.day.trim();
        if !day.is_empty() {
            return day.to_string();
        }
        weekday_label(&self.date).unwrap_or_default()
    }

    /// Raw text of a field (`index` rendered as a number).
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Index => self.index.to_string(),
            Field::Date => self.date.clone(),
            Field::Day => self.day.clone(),
            Field::Week => self.week.clone(),
            Field::Start => self.start.clone(),
            Field::Finish => self.finish.clone(),
            Field::Lunch => self.lunch.clone(),
            Field::Basic => self.basic.clone(),
            Field::Ot15 => self.ot15.clone(),
            Field::Ot20 => self.ot20.clone(),
            Field::Notes => self.notes.clone(),
        }
    }

    pub fn parse(&self) -> ParsedRow {
        ParsedRow::from_row(self)
    }
}

pub fn normalize_week(week: &str) -> String {
    let trimmed = week.trim();
    if trimmed.is_empty() {
        UNSPECIFIED_WEEK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Minutes of every time field of a row, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub week: String,
    pub start: Parsed,
    pub finish: Parsed,
    pub lunch: Parsed,
    pub basic: Parsed,
    pub ot15: Parsed,
    pub ot20: Parsed,
}

impl ParsedRow {
    pub fn from_row(row: &TimeEntryRow) -> Self {
        Self {
            week: row.week_key(),
            start: parse_clock_time(&row.start),
            finish: parse_clock_time(&row.finish),
            lunch: parse_break_duration(&row.lunch),
            basic: parse_duration(&row.basic),
            ot15: parse_duration(&row.ot15),
            ot20: parse_duration(&row.ot20),
        }
    }

    /// `finish - start - lunch`, when all three resolve.
    pub fn worked_minutes(&self) -> Option<i64> {
        let start = self.start.minutes()?;
        let finish = self.finish.minutes()?;
        let lunch = self.lunch.minutes()?;
        Some(finish.saturating_sub(start).saturating_sub(lunch))
    }

    /// Sum of the entered buckets, invalid ones counted as zero.
    pub fn entered_minutes(&self) -> i64 {
        self.basic
            .or_zero()
            .saturating_add(self.ot15.or_zero())
            .saturating_add(self.ot20.or_zero())
    }
}
