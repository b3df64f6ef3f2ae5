//! Clock-string parsing for forecast event times.
//!
//! The forecast source reports event times as human-readable 12-hour clock
//! strings ("9:30 PM", "3:45 am"). This module turns them into minute-of-day
//! integers. A failed parse is an ordinary outcome, not an error: callers
//! treat `None` as "this event is unusable" and move on.

use chrono::Timelike;

/// Parse an `H:MM AM|PM` clock string into a minute of day.
///
/// Accepts hours 1-12 with or without a leading zero and a case-insensitive
/// meridiem. Standard clock convention applies: `12:00 AM` is minute 0 and
/// `12:00 PM` is minute 720.
///
/// Returns `None` for anything that does not match the pattern.
///
/// # Example
/// ```
/// use tide_chart_lib::clock::parse_clock_string;
///
/// assert_eq!(parse_clock_string("9:30 PM"), Some(1290));
/// assert_eq!(parse_clock_string("sometime later"), None);
/// ```
pub fn parse_clock_string(s: &str) -> Option<u16> {
    let time = chrono::NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()?;
    Some((time.hour() * 60 + time.minute()) as u16)
}
