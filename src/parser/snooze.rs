//! Snooze duration parsing for reminder deferrals.
//!
//! A customer who isn't ready to book can push the reminder out: "3H",
//! "30 MIN", a bare "2" (hours shorthand), or "TOMORROW" with an optional
//! AM/PM. Durations are bounds-checked so a snooze never overlaps the
//! territory of a real booking: anything longer than a day must go through
//! the `TOMORROW` form or a booking instead.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::resolve_local;

/// Snoozes shorter than this can't realistically be re-surfaced in time.
pub const MIN_SNOOZE_MINUTES: i64 = 10;
/// Longer deferrals should use the TOMORROW form instead.
pub const MAX_SNOOZE_HOURS: i64 = 24;

/// Hour used by `TOMORROW` and `TOMORROW AM`.
const TOMORROW_AM_HOUR: u32 = 9;
/// Hour used by `TOMORROW PM`.
const TOMORROW_PM_HOUR: u32 = 14;

static TOMORROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:tomorrow|tmrw)(?:\s+(am|pm))?$").unwrap());
static MINUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*(?:m|min(?:ute)?s?)$").unwrap());
// A bare integer is hours shorthand, so the unit suffix is optional here.
static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*(?:h|hours?)?$").unwrap());

/// Why a snooze phrase was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnoozeError {
    #[error("That's too short for a snooze. The minimum is {MIN_SNOOZE_MINUTES} minutes.")]
    TooShort,
    #[error("That's too long for a snooze. The maximum is {MAX_SNOOZE_HOURS} hours. Text TOMORROW to pick this up in the morning.")]
    TooLong,
    #[error("Sorry, we couldn't read that snooze. Text a duration like 3H or 30M, or TOMORROW.")]
    UnrecognizedFormat,
}

/// Result of parsing a snooze phrase.
#[derive(Debug, Clone, PartialEq)]
pub enum SnoozeParseResult<Tz: TimeZone> {
    /// The deferral target, plus a human label derived from the parsed
    /// quantity and unit ("3 hours", "Tomorrow at 9 AM").
    Snoozed { until: DateTime<Tz>, display: String },
    /// The phrase was out of bounds or unrecognized.
    Rejected(SnoozeError),
}

impl<Tz: TimeZone> SnoozeParseResult<Tz> {
    pub fn is_snoozed(&self) -> bool {
        matches!(self, SnoozeParseResult::Snoozed { .. })
    }
}

/// Parse a snooze duration phrase against a reference instant.
///
/// Matching is case-insensitive and total: every input maps to exactly one
/// result, with out-of-bounds and unrecognized phrases rejected with a
/// descriptive message rather than an error.
///
/// # Arguments
///
/// * `text` - The customer's phrase (e.g. "3H", "30 MIN", "TOMORROW PM")
/// * `now` - The reference instant the deferral is measured from
pub fn parse_snooze<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> SnoozeParseResult<Tz> {
    let normalized = text.trim().to_lowercase();
    debug!("Parsing snooze expression: '{}'", normalized);

    if let Some(caps) = TOMORROW_RE.captures(&normalized) {
        let (hour, label) = match caps.get(1).map(|m| m.as_str()) {
            Some("pm") => (TOMORROW_PM_HOUR, "Tomorrow at 2 PM"),
            _ => (TOMORROW_AM_HOUR, "Tomorrow at 9 AM"),
        };
        return match tomorrow_at(now, hour) {
            Some(until) => SnoozeParseResult::Snoozed { until, display: label.to_string() },
            None => SnoozeParseResult::Rejected(SnoozeError::UnrecognizedFormat),
        };
    }

    if let Some(caps) = MINUTES_RE.captures(&normalized) {
        let minutes: i64 = match caps[1].parse() {
            Ok(n) => n,
            // Only an absurdly large literal overflows; reject it as too long
            Err(_) => return SnoozeParseResult::Rejected(SnoozeError::TooLong),
        };
        if minutes < MIN_SNOOZE_MINUTES {
            return SnoozeParseResult::Rejected(SnoozeError::TooShort);
        }
        if minutes > MAX_SNOOZE_HOURS * 60 {
            return SnoozeParseResult::Rejected(SnoozeError::TooLong);
        }
        return SnoozeParseResult::Snoozed {
            until: now.clone() + Duration::minutes(minutes),
            display: pluralize(minutes, "minute"),
        };
    }

    if let Some(caps) = HOURS_RE.captures(&normalized) {
        let hours: i64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => return SnoozeParseResult::Rejected(SnoozeError::TooLong),
        };
        if hours < 1 {
            return SnoozeParseResult::Rejected(SnoozeError::TooShort);
        }
        if hours > MAX_SNOOZE_HOURS {
            return SnoozeParseResult::Rejected(SnoozeError::TooLong);
        }
        return SnoozeParseResult::Snoozed {
            until: now.clone() + Duration::hours(hours),
            display: pluralize(hours, "hour"),
        };
    }

    debug!("No snooze pattern matched '{}'", normalized);
    SnoozeParseResult::Rejected(SnoozeError::UnrecognizedFormat)
}

fn tomorrow_at<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32) -> Option<DateTime<Tz>> {
    let date = now.date_naive().succ_opt()?;
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    resolve_local(now, date, time)
}

fn pluralize(quantity: i64, unit: &str) -> String {
    if quantity == 1 {
        format!("{} {}", quantity, unit)
    } else {
        format!("{} {}s", quantity, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "hour"), "1 hour");
        assert_eq!(pluralize(3, "hour"), "3 hours");
        assert_eq!(pluralize(30, "minute"), "30 minutes");
    }
}
