//! Parsing of inbound SMS reply text.
//!
//! Three single-pass classifiers over the same token substrate:
//! the reply command tier ([`command`]), free-text time expressions
//! ([`time`]), and snooze durations ([`snooze`]).
//!
//! Every function in this module takes the reference instant ("now") as an
//! explicit parameter and never consults the real clock, which is what keeps
//! the parsers deterministic under a frozen clock in tests. Malformed input
//! is an expected, first-class outcome: nothing here returns `Err` or panics
//! on customer text.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

pub mod command;
pub mod snooze;
pub mod time;

/// Strip control characters from an inbound message body.
///
/// SMS gateways occasionally deliver stray control bytes; newlines and tabs
/// are kept so multi-line replies still classify on their first token.
pub fn sanitize_user_input(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect::<String>()
}

/// Materialize a wall-clock date and time in the reference instant's zone.
///
/// DST gaps resolve via the earliest valid local representation; `None` only
/// when no local representation exists at all.
pub(crate) fn resolve_local<Tz: TimeZone>(
    now: &DateTime<Tz>,
    date: NaiveDate,
    time: NaiveTime,
) -> Option<DateTime<Tz>> {
    now.timezone().from_local_datetime(&date.and_time(time)).earliest()
}
