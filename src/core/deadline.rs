//! Sign-up deadline evaluation.
//!
//! Deadlines are admin-configured `"HH:MM"` strings. They are interpreted on every
//! check so a changed configuration or the passing of time takes effect immediately.

use chrono::{NaiveTime, Timelike};

/// Deadline used when the configured one cannot be read.
pub const FALLBACK_DEADLINE: &str = "22:59";

const FALLBACK_MINUTES: u32 = 22 * 60 + 59;

/// Minutes after midnight of a `"HH:MM"` deadline, or of [`FALLBACK_DEADLINE`].
#[must_use]
pub fn deadline_minutes(deadline: &str) -> u32 {
    NaiveTime::parse_from_str(deadline.trim(), "%H:%M")
        .map_or(FALLBACK_MINUTES, |time| minutes_of_day(&time))
}

/// Whether a sign-up with this deadline is still open at `now`.
///
/// Open strictly before the deadline minute; at the deadline itself it is closed.
#[must_use]
pub fn is_signup_open<T: Timelike>(deadline: &str, now: &T) -> bool {
    minutes_of_day(now) < deadline_minutes(deadline)
}

fn minutes_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}
