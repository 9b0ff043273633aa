//! Natural-language time expression parsing for booking replies.
//!
//! Customers reply to a missed-call text with phrases like "TUE 2PM",
//! "TOMORROW", "3/15 10AM", or "ASAP". This module turns such a phrase plus
//! a reference instant into an absolute date-time, or into a clarification
//! prompt to text back when the phrase cannot be resolved on its own.
//!
//! The grammar is an ordered list of independent matchers, tried in a fixed
//! priority order until one succeeds. Each matcher either claims the whole
//! phrase or passes; anything unclaimed falls through to the generic
//! clarification prompt.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Weekday};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::messages;
use crate::parser::resolve_local;

/// Default hour for phrases that name a day but no time ("TOMORROW", "WED").
const DEFAULT_BOOKING_HOUR: u32 = 9;
/// Day-part preset hours.
const MORNING_HOUR: u32 = 9;
const AFTERNOON_HOUR: u32 = 14;
const EVENING_HOUR: u32 = 17;

static RELATIVE_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(today|tomorrow|tmrw|tmr)(?:\s+(.+))?$").unwrap());
static WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:next\s+)?([a-z]+)(?:\s+(.+))?$").unwrap());
static EXPLICIT_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})(?:\s+(.+))?$").unwrap());
static CLOCK_AMPM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*([ap])\.?m\.?$").unwrap());
static CLOCK_24H_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// Result of parsing a free-text time expression.
///
/// A phrase either resolves to an absolute instant or needs a follow-up
/// question; the two are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeParseResult<Tz: TimeZone> {
    /// The phrase resolved to a concrete date-time in `now`'s timezone.
    Resolved(DateTime<Tz>),
    /// The phrase was empty, ambiguous, or unrecognized; `prompt` is the
    /// question to text back to the customer.
    NeedsClarification { prompt: String },
}

impl<Tz: TimeZone> TimeParseResult<Tz> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, TimeParseResult::Resolved(_))
    }

    /// The resolved instant, if there is one.
    pub fn resolved(&self) -> Option<&DateTime<Tz>> {
        match self {
            TimeParseResult::Resolved(at) => Some(at),
            TimeParseResult::NeedsClarification { .. } => None,
        }
    }
}

/// Parse a free-text time expression against a reference instant.
///
/// Matching is case-insensitive and total: every input string maps to
/// exactly one result, with unrecognized input producing a clarification
/// prompt rather than an error.
///
/// # Arguments
///
/// * `text` - The customer's phrase (e.g. "TUE 2PM", "tomorrow", "3/15")
/// * `now` - The reference instant all relative expressions resolve against
///
/// # Returns
///
/// * `TimeParseResult` - Either the resolved instant or a clarification
///   prompt to send back
pub fn parse_time<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> TimeParseResult<Tz> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return clarify(messages::GENERIC_TIME_PROMPT);
    }

    debug!("Parsing time expression: '{}'", normalized);

    // Ordering matters only for ambiguous literals: a bare "tomorrow" must
    // be claimed before the weekday matcher sees it as a candidate token.
    let matchers: [fn(&str, &DateTime<Tz>) -> Option<TimeParseResult<Tz>>; 5] = [
        match_relative_day,
        match_weekday,
        match_explicit_date,
        match_clock_time,
        match_preset,
    ];

    for matcher in matchers {
        if let Some(result) = matcher(&normalized, now) {
            return result;
        }
    }

    debug!("No time pattern matched '{}'", normalized);
    clarify(messages::GENERIC_TIME_PROMPT)
}

fn clarify<Tz: TimeZone>(prompt: &str) -> TimeParseResult<Tz> {
    TimeParseResult::NeedsClarification { prompt: prompt.to_string() }
}

/// `TODAY` / `TOMORROW` (aliases `TMRW`, `TMR`), optionally followed by a
/// time of day. A bare "today" is too ambiguous to schedule and asks what
/// time instead.
fn match_relative_day<Tz: TimeZone>(
    text: &str,
    now: &DateTime<Tz>,
) -> Option<TimeParseResult<Tz>> {
    let caps = RELATIVE_DAY_RE.captures(text)?;
    let time = match caps.get(2) {
        // A trailing phrase that is not a time of day is not ours to claim
        Some(rest) => Some(parse_clock_time(rest.as_str())?),
        None => None,
    };

    if &caps[1] == "today" {
        return match time {
            Some(t) => resolve_local(now, now.date_naive(), t).map(TimeParseResult::Resolved),
            None => Some(clarify(messages::TODAY_TIME_PROMPT)),
        };
    }

    let date = now.date_naive().succ_opt()?;
    let time = match time {
        Some(t) => t,
        None => NaiveTime::from_hms_opt(DEFAULT_BOOKING_HOUR, 0, 0)?,
    };
    resolve_local(now, date, time).map(TimeParseResult::Resolved)
}

/// Day-of-week keywords, three-letter or full, with an optional `NEXT`
/// prefix. Always resolves strictly after today's calendar day: "TUE" on a
/// Tuesday means next week's Tuesday.
fn match_weekday<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> Option<TimeParseResult<Tz>> {
    let caps = WEEKDAY_RE.captures(text)?;
    let target = weekday_from_token(&caps[1])?;
    let time = match caps.get(2) {
        Some(rest) => parse_clock_time(rest.as_str())?,
        None => NaiveTime::from_hms_opt(DEFAULT_BOOKING_HOUR, 0, 0)?,
    };

    let today = now.date_naive();
    let mut days_ahead = (i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }

    resolve_local(now, today + Duration::days(days_ahead), time).map(TimeParseResult::Resolved)
}

fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Explicit `MM/DD` or `MM-DD` dates. The year is inferred as the current
/// one; a date already behind `now`'s calendar day rolls to next year.
/// Impossible dates (2/30, 13/1) are not claimed and fall through to the
/// clarification prompt.
fn match_explicit_date<Tz: TimeZone>(
    text: &str,
    now: &DateTime<Tz>,
) -> Option<TimeParseResult<Tz>> {
    let caps = EXPLICIT_DATE_RE.captures(text)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let time = match caps.get(3) {
        Some(rest) => parse_clock_time(rest.as_str())?,
        None => NaiveTime::from_hms_opt(DEFAULT_BOOKING_HOUR, 0, 0)?,
    };

    let today = now.date_naive();
    let mut date = chrono::NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        debug!("Date {}/{} has passed; rolling to next year", month, day);
        date = chrono::NaiveDate::from_ymd_opt(today.year() + 1, month, day)?;
    }

    resolve_local(now, date, time).map(TimeParseResult::Resolved)
}

/// A bare time of day is interpreted as today at that time, no
/// clarification needed.
fn match_clock_time<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> Option<TimeParseResult<Tz>> {
    let time = parse_clock_time(text)?;
    resolve_local(now, now.date_naive(), time).map(TimeParseResult::Resolved)
}

/// Fixed presets: `ASAP`, `NOW`, and the day-part keywords.
fn match_preset<Tz: TimeZone>(text: &str, now: &DateTime<Tz>) -> Option<TimeParseResult<Tz>> {
    match text {
        "asap" => Some(TimeParseResult::Resolved(now.clone() + Duration::hours(1))),
        "now" => Some(TimeParseResult::Resolved(now.clone())),
        "morning" => today_at(now, MORNING_HOUR),
        "afternoon" => today_at(now, AFTERNOON_HOUR),
        "evening" => today_at(now, EVENING_HOUR),
        _ => None,
    }
}

fn today_at<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32) -> Option<TimeParseResult<Tz>> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    resolve_local(now, now.date_naive(), time).map(TimeParseResult::Resolved)
}

/// Parse a clock time like "2pm", "2:30pm", "9 a.m.", or 24-hour "14:30"
/// into a `NaiveTime`.
///
/// A bare hour requires an am/pm suffix; without one only the `HH:MM`
/// 24-hour form is accepted, so a lone number stays ambiguous and is left
/// for other matchers (or the clarification fallback) to handle.
pub(crate) fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    if let Some(caps) = CLOCK_AMPM_RE.captures(text) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        // Convert to 24-hour format: 12PM is noon, 12AM is midnight
        let hour_24 = if &caps[3] == "p" && hour < 12 {
            hour + 12
        } else if &caps[3] == "a" && hour == 12 {
            0
        } else {
            hour
        };
        return NaiveTime::from_hms_opt(hour_24, minute, 0);
    }

    let caps = CLOCK_24H_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}
