//! Inbound reply evaluation.
//!
//! The in-process contract consumed by the webhook handler: take the raw
//! body of a customer's SMS plus the reference instant, classify it, run the
//! right parser, and hand back a structured decision. Persistence of the
//! resolved instant and delivery of the outbound reply stay with the caller,
//! which is also responsible for re-invoking this on the follow-up message
//! when a clarification is requested.

use chrono::{DateTime, TimeZone};
use log::{debug, info};
use serde::Serialize;
use std::fmt;

use crate::messages;
use crate::parser::command::{classify_reply, ReplyCommand};
use crate::parser::sanitize_user_input;
use crate::parser::snooze::{parse_snooze, SnoozeParseResult};
use crate::parser::time::{parse_time, TimeParseResult};

/// What the handler should do with an inbound reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    Booked,
    Snoozed,
    SnoozeRejected,
    ClarificationNeeded,
    MenuChoice,
    CallbackRequested,
    OptedOut,
    OptedIn,
}

/// A structured, serializable decision for one inbound reply.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyDecision {
    pub action: ReplyAction,
    /// Which menu option was picked, for `MenuChoice` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_choice: Option<u8>,
    /// RFC 3339 instant to persist, for `Booked` and `Snoozed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    /// Outbound SMS body to send back, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_body: Option<String>,
}

impl ReplyDecision {
    fn action_only(action: ReplyAction) -> Self {
        Self { action, menu_choice: None, scheduled_for: None, reply_body: None }
    }

    fn with_reply(action: ReplyAction, reply_body: String) -> Self {
        Self { action, menu_choice: None, scheduled_for: None, reply_body: Some(reply_body) }
    }
}

/// Evaluate one inbound SMS reply.
///
/// Pure and total: every body maps to exactly one decision, carrier
/// keywords included. The caller supplies the customer's name for the
/// confirmation templates and the reference instant the parsers resolve
/// against.
pub fn evaluate_reply<Tz: TimeZone>(name: &str, body: &str, now: &DateTime<Tz>) -> ReplyDecision
where
    Tz::Offset: fmt::Display,
{
    let body = sanitize_user_input(body);
    let command = classify_reply(&body);
    debug!("Classified reply from {}: {:?}", name, command);

    match command {
        ReplyCommand::MenuChoice(choice) => ReplyDecision {
            menu_choice: Some(choice),
            ..ReplyDecision::action_only(ReplyAction::MenuChoice)
        },
        ReplyCommand::Snooze(rest) => match parse_snooze(&rest, now) {
            SnoozeParseResult::Snoozed { until, display } => {
                info!("Snoozing reminder for {} ({})", name, display);
                ReplyDecision {
                    scheduled_for: Some(until.to_rfc3339()),
                    ..ReplyDecision::with_reply(
                        ReplyAction::Snoozed,
                        messages::format_snooze_confirmation(name, &until),
                    )
                }
            }
            SnoozeParseResult::Rejected(err) => {
                ReplyDecision::with_reply(ReplyAction::SnoozeRejected, err.to_string())
            }
        },
        ReplyCommand::CallRequest => ReplyDecision::with_reply(
            ReplyAction::CallbackRequested,
            messages::CALLBACK_ACK.to_string(),
        ),
        // Carrier keywords get no reply body of ours; the gateway handles
        // the mandated opt-out acknowledgement.
        ReplyCommand::OptOut => ReplyDecision::action_only(ReplyAction::OptedOut),
        ReplyCommand::OptIn => ReplyDecision::action_only(ReplyAction::OptedIn),
        ReplyCommand::FreeText(text) => match parse_time(&text, now) {
            TimeParseResult::Resolved(at) => {
                info!("Booking {} for {}", name, at.to_rfc3339());
                ReplyDecision {
                    scheduled_for: Some(at.to_rfc3339()),
                    ..ReplyDecision::with_reply(
                        ReplyAction::Booked,
                        messages::format_booking_confirmation(name, &at),
                    )
                }
            }
            TimeParseResult::NeedsClarification { prompt } => {
                ReplyDecision::with_reply(ReplyAction::ClarificationNeeded, prompt)
            }
        },
    }
}
