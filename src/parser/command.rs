//! Reply command classification.
//!
//! The first tier of inbound SMS handling: recognize the short command
//! vocabulary customers reply with before any free-text parsing happens.
//! Menu digits pick one of the offered slots, `SNOOZE` carries a duration
//! phrase, and `STOP`/`START` are the carrier keywords. Everything else is
//! free text destined for the time parser.

use log::debug;

/// A classified inbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyCommand {
    /// A bare digit `1`-`5` selecting one of the offered options.
    MenuChoice(u8),
    /// `SNOOZE <rest>`; the remainder is a duration phrase, possibly empty.
    Snooze(String),
    /// `CALL` - the customer wants a callback instead of texting.
    CallRequest,
    /// `STOP` - carrier opt-out keyword.
    OptOut,
    /// `START` - carrier re-subscribe keyword.
    OptIn,
    /// Anything else; handed to the time parser as a booking phrase.
    FreeText(String),
}

/// Classify an inbound reply body by its leading token.
///
/// Matching is case-insensitive. A menu digit must be the entire message so
/// that replies like "2 PM" keep their time-expression meaning. Total: every
/// body maps to exactly one command.
pub fn classify_reply(body: &str) -> ReplyCommand {
    let trimmed = body.trim();

    if trimmed.len() == 1 {
        if let Some(digit @ '1'..='5') = trimmed.chars().next() {
            debug!("Classified menu choice: {}", digit);
            return ReplyCommand::MenuChoice(digit as u8 - b'0');
        }
    }

    let mut words = trimmed.splitn(2, char::is_whitespace);
    let first = words.next().unwrap_or("").to_lowercase();
    let rest = words.next().unwrap_or("").trim();

    match first.as_str() {
        "snooze" => ReplyCommand::Snooze(rest.to_string()),
        "call" => ReplyCommand::CallRequest,
        "stop" => ReplyCommand::OptOut,
        "start" => ReplyCommand::OptIn,
        _ => ReplyCommand::FreeText(trimmed.to_string()),
    }
}
