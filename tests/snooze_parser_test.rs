use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

use ringback::{parse_snooze, SnoozeError, SnoozeParseResult};

/// Frozen reference instant: Tuesday 2025-03-04 15:00.
fn tuesday_afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 15, 0, 0).unwrap()
}

fn snoozed(result: SnoozeParseResult<Utc>) -> (DateTime<Utc>, String) {
    match result {
        SnoozeParseResult::Snoozed { until, display } => (until, display),
        SnoozeParseResult::Rejected(err) => panic!("expected a snooze, got rejection: {}", err),
    }
}

fn rejected(result: SnoozeParseResult<Utc>) -> SnoozeError {
    match result {
        SnoozeParseResult::Rejected(err) => err,
        SnoozeParseResult::Snoozed { until, display } => {
            panic!("expected rejection, got snooze until {} ({})", until, display)
        }
    }
}

#[test]
fn test_hour_snoozes() {
    let now = tuesday_afternoon();

    let (until, display) = snoozed(parse_snooze("3H", &now));
    assert_eq!(until, now + Duration::hours(3));
    assert_eq!(display, "3 hours");

    // Singular display for one hour
    let (until, display) = snoozed(parse_snooze("1H", &now));
    assert_eq!(until, now + Duration::hours(1));
    assert_eq!(display, "1 hour");

    let (_, display) = snoozed(parse_snooze("2 HOURS", &now));
    assert_eq!(display, "2 hours");

    // Bare integer is hours shorthand
    let (until, display) = snoozed(parse_snooze("2", &now));
    assert_eq!(until, now + Duration::hours(2));
    assert_eq!(display, "2 hours");

    // The maximum is inclusive
    let (until, _) = snoozed(parse_snooze("24H", &now));
    assert_eq!(until, now + Duration::hours(24));
}

#[test]
fn test_minute_snoozes() {
    let now = tuesday_afternoon();

    let (until, display) = snoozed(parse_snooze("30M", &now));
    assert_eq!(until, now + Duration::minutes(30));
    assert_eq!(display, "30 minutes");

    let (until, display) = snoozed(parse_snooze("45 min", &now));
    assert_eq!(until, now + Duration::minutes(45));
    assert_eq!(display, "45 minutes");

    let (_, display) = snoozed(parse_snooze("90 minutes", &now));
    assert_eq!(display, "90 minutes");

    // The minimum is inclusive
    let (until, _) = snoozed(parse_snooze("10M", &now));
    assert_eq!(until, now + Duration::minutes(10));
}

#[test]
fn test_tomorrow_forms() {
    let now = tuesday_afternoon();

    let (until, display) = snoozed(parse_snooze("TOMORROW", &now));
    assert_eq!(until, Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap());
    assert_eq!(display, "Tomorrow at 9 AM");

    let (until, display) = snoozed(parse_snooze("TOMORROW AM", &now));
    assert_eq!(until, Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap());
    assert_eq!(display, "Tomorrow at 9 AM");

    let (until, display) = snoozed(parse_snooze("TOMORROW PM", &now));
    assert_eq!(until, Utc.with_ymd_and_hms(2025, 3, 5, 14, 0, 0).unwrap());
    assert_eq!(display, "Tomorrow at 2 PM");

    let (until, _) = snoozed(parse_snooze("tmrw am", &now));
    assert_eq!(until, Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap());
}

#[test]
fn test_bounds_rejections() {
    let now = tuesday_afternoon();

    assert_eq!(rejected(parse_snooze("5M", &now)), SnoozeError::TooShort);
    assert_eq!(rejected(parse_snooze("9 minutes", &now)), SnoozeError::TooShort);
    assert_eq!(rejected(parse_snooze("0H", &now)), SnoozeError::TooShort);
    assert_eq!(rejected(parse_snooze("25H", &now)), SnoozeError::TooLong);
    assert_eq!(rejected(parse_snooze("48H", &now)), SnoozeError::TooLong);
    assert_eq!(rejected(parse_snooze("2000M", &now)), SnoozeError::TooLong);
}

#[test]
fn test_rejection_messages_are_distinct() {
    let now = tuesday_afternoon();

    let too_short = rejected(parse_snooze("5M", &now)).to_string();
    let too_long = rejected(parse_snooze("48H", &now)).to_string();
    let unrecognized = rejected(parse_snooze("whenever", &now)).to_string();

    assert!(too_short.contains("too short"), "message was: {}", too_short);
    assert!(too_short.contains("10 minutes"), "message was: {}", too_short);
    assert!(too_long.contains("too long"), "message was: {}", too_long);
    assert!(too_long.contains("24 hours"), "message was: {}", too_long);
    assert!(unrecognized.contains("3H"), "message was: {}", unrecognized);
    assert_ne!(too_short, too_long);
    assert_ne!(too_long, unrecognized);
}

#[test_case("" ; "empty string")]
#[test_case("   " ; "whitespace only")]
#[test_case("whenever" ; "whenever")]
#[test_case("H3" ; "H3")]
#[test_case("3 fortnights" ; "3 fortnights")]
#[test_case("tomorrow maybe" ; "tomorrow maybe")]
fn test_unrecognized_input_is_rejected(input: &str) {
    let now = tuesday_afternoon();
    assert_eq!(rejected(parse_snooze(input, &now)), SnoozeError::UnrecognizedFormat);
}

#[test]
fn test_parsing_is_deterministic() {
    let now = tuesday_afternoon();
    for input in ["3H", "30M", "TOMORROW PM", "garbage"] {
        assert_eq!(parse_snooze(input, &now), parse_snooze(input, &now));
    }
    assert!(parse_snooze("3H", &now).is_snoozed());
    assert!(!parse_snooze("garbage", &now).is_snoozed());
}
