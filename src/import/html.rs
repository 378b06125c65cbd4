//! Best-effort extraction of a timesheet table from rendered HTML.
//!
//! The heuristics stay in this module: the table is picked by keyword
//! scoring of its first row, columns are mapped by header text with a
//! positional fallback, and the week label is read from the surrounding
//! "Week Number:" / "Week Beginning:" text.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{TimeEntryRow, UNSPECIFIED_WEEK};
use crate::utils::date::weekday_label;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Header keywords scored when looking for the timesheet table.
pub const HEADER_KEYWORDS: [&str; 9] = [
    "date", "work", "start", "finish", "lunch", "basic", "o/t", "1.5", "2.0",
];

/// Data rows with fewer cells are layout rows (titles, signatures), not days.
pub const MIN_DATA_CELLS: usize = 6;

/// Cell texts of one HTML table, row by row.
pub type HtmlTable = Vec<Vec<String>>;

pub fn load(path: &Path) -> AppResult<Vec<TimeEntryRow>> {
    let html = fs::read_to_string(path)?;
    extract_rows(&html)
}

/// Rows of the best matching table in `html`.
pub fn extract_rows(html: &str) -> AppResult<Vec<TimeEntryRow>> {
    let tables = parse_tables(html)?;
    let table = best_table(&tables).ok_or(AppError::NoTableFound)?;

    let week = extract_week_label(html)?;
    let columns = ColumnMap::from_header(&table[0]);

    let rows: Vec<TimeEntryRow> = table
        .iter()
        .skip(1)
        .filter(|cells| cells.len() >= MIN_DATA_CELLS)
        .filter_map(|cells| columns.row(cells, &week))
        .enumerate()
        .map(|(i, row)| TimeEntryRow { index: i + 1, ..row })
        .collect();

    if rows.is_empty() {
        return Err(AppError::NoRowsExtracted);
    }
    Ok(rows)
}

/// Every `<table>` of the document as cell texts.
pub fn parse_tables(html: &str) -> AppResult<Vec<HtmlTable>> {
    let table_re = Regex::new(r"(?is)<table\b[^>]*>(.*?)</table>")?;
    let row_re = Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>")?;
    let cell_re = Regex::new(r"(?is)<t[dh]\b[^>]*>(.*?)</t[dh]>")?;
    let tag_re = Regex::new(r"<[^>]*>")?;

    let mut tables = Vec::new();
    for table in table_re.captures_iter(html) {
        let mut rows = Vec::new();
        for row in row_re.captures_iter(&table[1]) {
            let cells = cell_re
                .captures_iter(&row[1])
                .map(|cell| {
                    let text = tag_re.replace_all(&cell[1], " ");
                    decode_entities(&text).map(|t| collapse_whitespace(&t))
                })
                .collect::<AppResult<Vec<String>>>()?;
            rows.push(cells);
        }
        tables.push(rows);
    }

    Ok(tables)
}

/// Number of keywords found in any cell of the header row.
pub fn header_score(header: &[String]) -> usize {
    let header: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
    HEADER_KEYWORDS
        .iter()
        .filter(|kw| header.iter().any(|h| h.contains(*kw)))
        .count()
}

/// Highest scoring table; the first one wins a tie, a zero score is no match.
pub fn best_table(tables: &[HtmlTable]) -> Option<&HtmlTable> {
    let mut best: Option<(&HtmlTable, usize)> = None;

    for table in tables {
        let Some(header) = table.first() else {
            continue;
        };
        let score = header_score(header);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((table, score));
        }
    }

    best.map(|(t, _)| t)
}

/// Column positions of the timesheet fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub notes: usize,
    pub start: usize,
    pub finish: usize,
    pub lunch: usize,
    pub basic: usize,
    pub ot15: usize,
    pub ot20: usize,
}

impl Default for ColumnMap {
    /// Layout of the standard weekly template.
    fn default() -> Self {
        Self {
            date: 0,
            notes: 1,
            start: 2,
            finish: 3,
            lunch: 4,
            basic: 5,
            ot15: 6,
            ot20: 7,
        }
    }
}

impl ColumnMap {
    pub fn from_header(header: &[String]) -> Self {
        let header: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
        let find = |needles: &[&str], fallback: usize| {
            header
                .iter()
                .position(|h| needles.iter().any(|n| h.contains(n)))
                .unwrap_or(fallback)
        };

        let d = ColumnMap::default();
        Self {
            date: find(&["date"], d.date),
            notes: find(&["work", "address", "site"], d.notes),
            start: find(&["start"], d.start),
            finish: find(&["finish"], d.finish),
            lunch: find(&["lunch", "break"], d.lunch),
            basic: find(&["basic"], d.basic),
            ot15: find(&["1.5"], d.ot15),
            ot20: find(&["2.0"], d.ot20),
        }
    }

    /// Builds a row from data cells; `None` when no time or hours were entered.
    fn row(&self, cells: &[String], week: &str) -> Option<TimeEntryRow> {
        let text = |idx: usize| cells.get(idx).cloned().unwrap_or_default();

        let row = TimeEntryRow {
            index: 0,
            date: text(self.date),
            day: weekday_label(&text(self.date)).unwrap_or_default(),
            week: week.to_string(),
            start: text(self.start),
            finish: text(self.finish),
            lunch: text(self.lunch),
            basic: text(self.basic),
            ot15: text(self.ot15),
            ot20: text(self.ot20),
            notes: text(self.notes),
        };

        let has_any_time = [&row.start, &row.finish, &row.basic, &row.ot15, &row.ot20]
            .iter()
            .any(|s| !s.is_empty());
        has_any_time.then_some(row)
    }
}

/// `Week 12 – 03/03/2025`, `Week 12`, `Week of 03/03/2025` or `Unspecified`.
pub fn extract_week_label(html: &str) -> AppResult<String> {
    let number_re = Regex::new(r"(?i)Week Number:\s*([^<\r\n]+)")?;
    let begin_re = Regex::new(r"(?i)Week Beginning:\s*([^<\r\n]+)")?;

    let capture = |re: &Regex| -> AppResult<Option<String>> {
        match re.captures(html) {
            Some(c) => Ok(Some(collapse_whitespace(&decode_entities(&c[1])?))),
            None => Ok(None),
        }
    };

    let label = match (capture(&number_re)?, capture(&begin_re)?) {
        (Some(n), Some(b)) => format!("Week {n} – {b}"),
        (Some(n), None) => format!("Week {n}"),
        (None, Some(b)) => format!("Week of {b}"),
        (None, None) => UNSPECIFIED_WEEK.to_string(),
    };
    Ok(label)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes the named entities a converter emits plus numeric references.
pub fn decode_entities(s: &str) -> AppResult<String> {
    let entity_re = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);")?;

    let decoded = entity_re.replace_all(s, |c: &Captures| {
        let name = &c[1];
        let ch = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            "ndash" => Some('–'),
            _ if name.starts_with("#x") || name.starts_with("#X") => {
                u32::from_str_radix(&name[2..], 16).ok().and_then(char::from_u32)
            }
            _ if name.starts_with('#') => name[1..].parse().ok().and_then(char::from_u32),
            _ => None,
        };
        ch.map_or_else(|| c[0].to_string(), |ch| ch.to_string())
    });

    Ok(decoded.into_owned())
}
