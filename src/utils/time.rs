//! Time utilities: parsing `H:MM` clock times, hour and minute durations.
//!
//! Every parser is a pure function returning a [`Parsed`]; bad text yields
//! `Parsed::Invalid`, never a poisoned number.

use crate::models::minutes::Parsed;

/// Parses a clock time `H:MM` (24-hour, hour unbounded).
///
/// Empty text is `Invalid`: a clock time has no zero default. A blank side
/// of the colon reads as zero, so `9:` is 540 and `:30` is 30.
pub fn parse_clock_time(text: &str) -> Parsed {
    match clock_minutes(text.trim()) {
        Some(m) => Parsed::Value(m),
        None => Parsed::Invalid,
    }
}

/// Parses an hour duration: `H:MM` or a decimal number of hours.
///
/// Empty text means "not entered" and yields `Zero`.
pub fn parse_duration(text: &str) -> Parsed {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Parsed::Zero;
    }

    if trimmed.contains(':') {
        return clock_minutes(trimmed).map_or(Parsed::Invalid, Parsed::Value);
    }

    match non_negative(trimmed) {
        Some(hours) => Parsed::Value((hours * 60.0).round() as i64),
        None => Parsed::Invalid,
    }
}

/// Parses a lunch break: `H:MM` or a bare number of MINUTES.
pub fn parse_break_duration(text: &str) -> Parsed {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Parsed::Zero;
    }

    if trimmed.contains(':') {
        return parse_duration(trimmed);
    }

    match non_negative(trimmed) {
        Some(minutes) => Parsed::Value(minutes.round() as i64),
        None => Parsed::Invalid,
    }
}

fn clock_minutes(text: &str) -> Option<i64> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 {
        return None;
    }

    let h = clock_part(parts[0])?;
    let m = clock_part(parts[1])?;
    if h < 0.0 || m < 0.0 || m >= 60.0 {
        return None;
    }

    // `as` saturates, so huge hours end up at i64::MAX rather than wrapping.
    Some((h * 60.0 + m).round() as i64)
}

/// One side of `H:MM`; a blank side counts as zero (`9:` is 9:00).
fn clock_part(s: &str) -> Option<f64> {
    if s.trim().is_empty() {
        return Some(0.0);
    }
    finite(s)
}

fn finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_negative(s: &str) -> Option<f64> {
    finite(s).filter(|v| *v >= 0.0)
}
