//! Weekly "40 hours basic first" rule.
//!
//! Overtime only counts once a week holds the threshold of basic minutes;
//! below it, overtime is moved into basic (OT 1.5 first, then OT 2.0).

use crate::models::bucket::WeekBucket;
use std::collections::BTreeMap;

/// 40 hours.
pub const DEFAULT_BASIC_THRESHOLD_MINUTES: i64 = 40 * 60;

pub fn reallocate(bucket: WeekBucket, threshold: i64) -> WeekBucket {
    let WeekBucket {
        mut basic,
        mut ot15,
        mut ot20,
    } = bucket;

    if basic >= threshold {
        return bucket;
    }

    let needed = threshold.saturating_sub(basic);
    let shift = needed.min(ot15.saturating_add(ot20));

    let from15 = shift.min(ot15);
    ot15 -= from15;

    let from20 = (shift - from15).min(ot20);
    ot20 -= from20;

    basic += from15 + from20;

    WeekBucket { basic, ot15, ot20 }
}

/// Applies [`reallocate`] to every week independently.
pub fn reallocate_weeks(
    weeks: &BTreeMap<String, WeekBucket>,
    threshold: i64,
) -> BTreeMap<String, WeekBucket> {
    weeks
        .iter()
        .map(|(week, bucket)| (week.clone(), reallocate(*bucket, threshold)))
        .collect()
}
