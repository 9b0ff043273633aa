//! Ringback SMS reply parsing core.
//!
//! When a business misses a call, Ringback texts the caller back and offers
//! to get them on the calendar. This crate is the piece that reads what the
//! customer texts in return: free-text time expressions ("TUE 2PM",
//! "TOMORROW", "ASAP"), snooze durations ("3H", "30 MIN"), and the one-word
//! command tier (`STOP`, `START`, `CALL`, `SNOOZE`, menu digits).
//!
//! Everything here is a pure function of `(text, reference instant)`. The
//! webhook handlers that receive inbound SMS, persist bookings, and dispatch
//! outbound messages live elsewhere and call into this crate.

pub mod config;
pub mod messages;
pub mod parser;
pub mod reply;

use log::LevelFilter;

/// Initialize a debug-level logger for quick embedding in tools and tests.
///
/// Production callers will usually configure `env_logger` themselves; see
/// `src/main.rs` for the format used by the reply simulator.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use parser::command::{classify_reply, ReplyCommand};
pub use parser::snooze::{parse_snooze, SnoozeError, SnoozeParseResult};
pub use parser::time::{parse_time, TimeParseResult};
pub use reply::{evaluate_reply, ReplyAction, ReplyDecision};
