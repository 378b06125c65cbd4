//! Sums row minutes into week buckets.

use crate::models::bucket::WeekBucket;
use crate::models::entry::ParsedRow;
use std::collections::BTreeMap;

/// Raw (not yet reallocated) totals per week label.
///
/// Every row counts, including rows with issues; invalid fields add zero.
pub fn aggregate<'a, I>(rows: I) -> BTreeMap<String, WeekBucket>
where
    I: IntoIterator<Item = &'a ParsedRow>,
{
    rows.into_iter().fold(BTreeMap::new(), |mut weeks, row| {
        *weeks.entry(row.week.clone()).or_default() += WeekBucket::new(
            row.basic.or_zero(),
            row.ot15.or_zero(),
            row.ot20.or_zero(),
        );
        weeks
    })
}

/// Sum of a set of week buckets.
pub fn sum_weeks(weeks: &BTreeMap<String, WeekBucket>) -> WeekBucket {
    weeks.values().fold(WeekBucket::default(), |mut acc, b| {
        acc += *b;
        acc
    })
}
