//! Outbound message templates.
//!
//! All customer-facing wording lives here: the clarification prompts the
//! time parser hands back and the fixed-template confirmations sent once a
//! booking or snooze resolves. Keeping the copy in one module means the
//! parsers never invent wording of their own.

use chrono::{DateTime, TimeZone};

/// Follow-up when the customer texted a bare "today" with no time.
pub const TODAY_TIME_PROMPT: &str =
    "What time today? Reply with a time like 2PM and we'll lock it in.";

/// Follow-up for empty or unrecognized time expressions.
pub const GENERIC_TIME_PROMPT: &str =
    "Sorry, we didn't catch that. Reply with a day and time like TUE 2PM, or just TOMORROW, and we'll lock it in.";

/// Acknowledgement when the customer asks for a callback.
pub const CALLBACK_ACK: &str = "Got it. We'll give you a call shortly.";

/// Human-formatted wall-clock rendering, e.g. "Tuesday, March 11 at 2:00 PM".
pub(crate) fn format_day_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.naive_local().format("%A, %B %-d at %-I:%M %p").to_string()
}

/// Confirmation for a resolved booking.
pub fn format_booking_confirmation<Tz: TimeZone>(name: &str, at: &DateTime<Tz>) -> String {
    format!(
        "Hi {}! You're booked for {}. We've added it to the calendar and will see you then.",
        name,
        format_day_time(at)
    )
}

/// Confirmation for a resolved snooze.
pub fn format_snooze_confirmation<Tz: TimeZone>(name: &str, until: &DateTime<Tz>) -> String {
    format!("Snoozed: {}. Reminder: {}.", name, format_day_time(until))
}
