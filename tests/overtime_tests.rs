mod common;
use common::row;
use rtimesheet::core::aggregator::aggregate;
use rtimesheet::core::logic::{Core, Rules};
use rtimesheet::core::overtime::{DEFAULT_BASIC_THRESHOLD_MINUTES, reallocate};
use rtimesheet::core::report::{format_issues, format_overall, format_weekly};
use rtimesheet::models::bucket::WeekBucket;
use rtimesheet::models::entry::{ParsedRow, TimeEntryRow};

fn adjust(basic: i64, ot15: i64, ot20: i64) -> WeekBucket {
    reallocate(
        WeekBucket::new(basic, ot15, ot20),
        DEFAULT_BASIC_THRESHOLD_MINUTES,
    )
}

#[test]
fn test_takes_ot15_first_then_ot20() {
    assert_eq!(adjust(2000, 300, 300), WeekBucket::new(2400, 0, 200));
}

#[test]
fn test_basic_at_threshold_is_unchanged() {
    assert_eq!(adjust(2400, 120, 60), WeekBucket::new(2400, 120, 60));
    assert_eq!(adjust(2700, 0, 90), WeekBucket::new(2700, 0, 90));
}

#[test]
fn test_not_enough_overtime_moves_everything() {
    assert_eq!(adjust(1000, 200, 100), WeekBucket::new(1300, 0, 0));
    assert_eq!(adjust(0, 0, 0), WeekBucket::new(0, 0, 0));
}

#[test]
fn test_ot15_alone_covers_the_gap() {
    assert_eq!(adjust(2300, 500, 60), WeekBucket::new(2400, 400, 60));
}

#[test]
fn test_conserves_total_and_is_idempotent() {
    let samples = [0, 1, 59, 60, 399, 400, 1200, 2399, 2400, 2401, 3000];
    for &basic in &samples {
        for &ot15 in &samples {
            for &ot20 in &samples {
                let before = WeekBucket::new(basic, ot15, ot20);
                let once = reallocate(before, DEFAULT_BASIC_THRESHOLD_MINUTES);
                assert_eq!(once.total(), before.total(), "{before:?}");
                assert_eq!(
                    reallocate(once, DEFAULT_BASIC_THRESHOLD_MINUTES),
                    once,
                    "{before:?}"
                );
                assert!(once.basic >= DEFAULT_BASIC_THRESHOLD_MINUTES || once.ot15 + once.ot20 == 0);
            }
        }
    }
}

#[test]
fn test_custom_threshold() {
    let b = reallocate(WeekBucket::new(1000, 600, 0), 1500);
    assert_eq!(b, WeekBucket::new(1500, 100, 0));
}

#[test]
fn test_aggregate_by_normalized_week() {
    let rows = vec![
        row(1, "Week 1", ("", "", ""), ("8", "1", "")),
        row(2, " Week 1 ", ("", "", ""), ("8", "", "0:30")),
        row(3, "", ("", "", ""), ("4", "", "")),
        row(4, "   ", ("", "", ""), ("2", "bad", "")),
    ];
    let parsed: Vec<ParsedRow> = rows.iter().map(TimeEntryRow::parse).collect();
    let weeks = aggregate(&parsed);

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks["Week 1"], WeekBucket::new(960, 60, 30));
    assert_eq!(weeks["Unspecified"], WeekBucket::new(360, 0, 0));
}

#[test]
fn test_aggregation_ignores_row_order() {
    let mut rows = vec![
        row(1, "A", ("", "", ""), ("8", "1", "")),
        row(2, "B", ("", "", ""), ("7", "", "2")),
        row(3, "A", ("", "", ""), ("1:15", "0.5", "")),
    ];
    let forward = Core::recalculate(&rows, &Rules::default());
    rows.reverse();
    let backward = Core::recalculate(&rows, &Rules::default());

    assert_eq!(forward.weeks, backward.weeks);
    assert_eq!(forward.overall, backward.overall);
}

#[test]
fn test_overall_is_sum_of_adjusted_weeks() {
    // Week A: 30h basic + 15h OT1.5 -> 40h + 5h
    // Week B: 42h basic + 3h OT2.0  -> unchanged
    let rows = vec![
        row(1, "A", ("", "", ""), ("30", "15", "")),
        row(2, "B", ("", "", ""), ("42", "", "3")),
    ];
    let calc = Core::recalculate(&rows, &Rules::default());

    assert_eq!(calc.weeks["A"], WeekBucket::new(2400, 300, 0));
    assert_eq!(calc.weeks["B"], WeekBucket::new(2520, 0, 180));
    assert_eq!(calc.overall, WeekBucket::new(4920, 300, 180));

    // raw sums would credit 15h of OT 1.5
    assert_eq!(calc.raw_weeks["A"], WeekBucket::new(1800, 900, 0));
}

#[test]
fn test_rows_with_issues_still_count() {
    let rows = vec![row(1, "W", ("9:00", "8:00", "0"), ("8", "", ""))];
    let calc = Core::recalculate(&rows, &Rules::default());

    assert_eq!(calc.issues.len(), 1);
    assert_eq!(calc.raw_weeks["W"].basic, 480);
}

#[test]
fn test_huge_hour_values_saturate() {
    let rows = vec![
        row(1, "W", ("", "", ""), ("1e300", "1", "")),
        row(2, "X", ("", "", ""), ("1e17", "", "")),
        row(3, "X", ("", "", ""), ("1e17", "", "")),
        row(4, "Y", ("0:00", "1e300:00", "1e300"), ("8", "", "")),
        row(5, "Z", ("1e300:00", "0:00", "1e300"), ("", "1e300", "1e300")),
    ];
    let calc = Core::recalculate(&rows, &Rules::default());

    assert_eq!(calc.raw_weeks["W"], WeekBucket::new(i64::MAX, 60, 0));
    assert_eq!(calc.raw_weeks["X"].basic, i64::MAX);
    assert_eq!(calc.weeks["Z"].basic, DEFAULT_BASIC_THRESHOLD_MINUTES);
    assert_eq!(calc.overall.basic, i64::MAX);
    assert_eq!(calc.overall.total(), i64::MAX);

    // row 4 works 0 minutes against 8h entered, row 5 runs backwards
    assert_eq!(calc.issues.len(), 2);

    assert!(!format_overall(&calc).is_empty());
    assert!(!format_weekly(&calc).is_empty());
    assert!(!format_issues(&calc).is_empty());
}
