//! Marker projection for known high/low tide events.
//!
//! Each of the up-to-four control points becomes a discrete chart marker at
//! its true time-of-day position. Past/future is a property of the slot the
//! event arrived in (`previous_*` vs `next_*`), not a clock comparison — with
//! one exception: a `next_low` whose clock time already looks "past" and sits
//! in the early-morning hours is taken to mean tomorrow's small hours and is
//! rolled forward a full day.

use crate::{ExtremumKind, Marker, TideEvents, MINUTES_PER_DAY};

/// Earliest minute a `next_low` must reach to escape the rollover heuristic.
/// Apparent next-lows before 6 AM that are already behind "now" belong to
/// the following calendar day.
const ROLLOVER_CUTOFF_MINUTE: u16 = 360;

/// Project the known control points into zero-to-four markers.
pub fn project(events: &TideEvents, now_minute: u16) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(4);

    if let Some(event) = events.previous_high {
        markers.push(Marker {
            minute: event.minute,
            height_ft: event.height_ft,
            kind: ExtremumKind::High,
            is_past: true,
        });
    }
    if let Some(event) = events.previous_low {
        markers.push(Marker {
            minute: event.minute,
            height_ft: event.height_ft,
            kind: ExtremumKind::Low,
            is_past: true,
        });
    }
    if let Some(event) = events.next_high {
        markers.push(Marker {
            minute: event.minute,
            height_ft: event.height_ft,
            kind: ExtremumKind::High,
            is_past: false,
        });
    }
    if let Some(event) = events.next_low {
        let mut minute = event.minute;
        if minute < now_minute && minute < ROLLOVER_CUTOFF_MINUTE {
            minute += MINUTES_PER_DAY;
        }
        markers.push(Marker {
            minute,
            height_ft: event.height_ft,
            kind: ExtremumKind::Low,
            is_past: false,
        });
    }

    markers
}
