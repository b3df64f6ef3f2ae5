//! Data-adaptation boundary between the forecast wire format and the engine.
//!
//! The forecast collaborator hands over loosely-typed JSON: free-text state,
//! 12-hour clock strings, optional event slots. Everything is resolved here,
//! once per fetch — state text into the closed [`TideState`] enum, clock
//! strings into minutes of day — so the numerical core never touches strings.
//! An event whose time fails to parse is dropped entirely: it is unusable for
//! both curve-fitting and marker placement.

use crate::clock::parse_clock_string;
use crate::{TideEvent, TideEvents, TideObservation, TideState};
use serde::Deserialize;
use thiserror::Error;

/// Errors from the adaptation boundary.
///
/// Only structurally invalid input is an error; missing fields, bad clock
/// strings, and unknown state text are ordinary degraded inputs.
#[derive(Error, Debug)]
pub enum ObservationError {
    /// Input was not valid observation JSON.
    #[error("invalid observation JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One `{time, height}` event as it appears on the wire.
#[derive(Clone, Debug, Deserialize)]
pub struct RawTideEvent {
    pub time: String,
    pub height: f32,
}

/// The four optional event slots as they appear on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawTideEvents {
    pub previous_high: Option<RawTideEvent>,
    pub previous_low: Option<RawTideEvent>,
    pub next_high: Option<RawTideEvent>,
    pub next_low: Option<RawTideEvent>,
}

/// The complete wire-format observation (§ input contract).
#[derive(Clone, Debug, Deserialize)]
pub struct RawObservation {
    pub current_height_ft: f32,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tides: RawTideEvents,
}

/// A partial observation for merge-updates: every field optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawObservationPatch {
    pub current_height_ft: Option<f32>,
    pub state: Option<String>,
    pub tides: Option<RawTideEvents>,
}

/// A typed partial observation, ready to shallow-merge into retained state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObservationPatch {
    pub current_height_ft: Option<f32>,
    pub state: Option<TideState>,
    pub tides: Option<TideEvents>,
}

impl TideState {
    /// Resolve free-text state into the closed enumeration.
    ///
    /// Matching is by case-insensitive substring, checked in priority order;
    /// "flooding"/"ebbing" are synonyms the forecast source uses for
    /// rising/falling. Empty or explicit "mid" text maps to [`TideState::Mid`];
    /// anything else unrecognized maps to [`TideState::Unknown`]. Both get the
    /// same neutral phase treatment downstream.
    pub fn from_raw(text: &str) -> Self {
        let lower = text.trim().to_ascii_lowercase();
        if lower.contains("high") {
            TideState::High
        } else if lower.contains("low") {
            TideState::Low
        } else if lower.contains("rising") || lower.contains("flood") {
            TideState::Rising
        } else if lower.contains("falling") || lower.contains("ebb") {
            TideState::Falling
        } else if lower.is_empty() || lower.contains("mid") {
            TideState::Mid
        } else {
            TideState::Unknown
        }
    }
}

fn adapt_event(raw: &Option<RawTideEvent>) -> Option<TideEvent> {
    let raw = raw.as_ref()?;
    let minute = parse_clock_string(&raw.time)?;
    Some(TideEvent {
        minute,
        height_ft: raw.height,
    })
}

fn adapt_events(raw: &RawTideEvents) -> TideEvents {
    TideEvents {
        previous_high: adapt_event(&raw.previous_high),
        previous_low: adapt_event(&raw.previous_low),
        next_high: adapt_event(&raw.next_high),
        next_low: adapt_event(&raw.next_low),
    }
}

impl TideObservation {
    /// Adapt a wire-format observation into engine types.
    pub fn from_raw(raw: &RawObservation) -> Self {
        TideObservation {
            current_height_ft: raw.current_height_ft,
            state: TideState::from_raw(&raw.state),
            tides: adapt_events(&raw.tides),
        }
    }

    /// Parse and adapt observation JSON in one step.
    pub fn from_json(json: &str) -> Result<Self, ObservationError> {
        let raw: RawObservation = serde_json::from_str(json)?;
        Ok(Self::from_raw(&raw))
    }

    /// Shallow-merge a partial observation into this one. Fields absent from
    /// the patch are left untouched; the `tides` block is replaced as a whole
    /// when present.
    pub fn merge(&mut self, patch: &ObservationPatch) {
        if let Some(height) = patch.current_height_ft {
            self.current_height_ft = height;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(tides) = patch.tides {
            self.tides = tides;
        }
    }
}

impl ObservationPatch {
    /// Adapt a wire-format partial observation.
    pub fn from_raw(raw: &RawObservationPatch) -> Self {
        ObservationPatch {
            current_height_ft: raw.current_height_ft,
            state: raw.state.as_deref().map(TideState::from_raw),
            tides: raw.tides.as_ref().map(adapt_events),
        }
    }

    /// Parse and adapt partial-observation JSON in one step.
    pub fn from_json(json: &str) -> Result<Self, ObservationError> {
        let raw: RawObservationPatch = serde_json::from_str(json)?;
        Ok(Self::from_raw(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_text_resolves_by_substring() {
        assert_eq!(TideState::from_raw("High tide"), TideState::High);
        assert_eq!(TideState::from_raw("LOW"), TideState::Low);
        assert_eq!(TideState::from_raw("rising"), TideState::Rising);
        assert_eq!(TideState::from_raw("flooding"), TideState::Rising);
        assert_eq!(TideState::from_raw("Falling"), TideState::Falling);
        assert_eq!(TideState::from_raw("ebbing fast"), TideState::Falling);
        assert_eq!(TideState::from_raw(""), TideState::Mid);
        assert_eq!(TideState::from_raw("mid-tide"), TideState::Mid);
        assert_eq!(TideState::from_raw("slack?"), TideState::Unknown);
    }

    #[test]
    fn observation_json_adapts_fully() {
        let json = r#"{
            "current_height_ft": 2.4,
            "state": "Rising",
            "tides": {
                "previous_low": { "time": "3:45 AM", "height": 0.3 },
                "next_high": { "time": "9:30 PM", "height": 4.2 }
            }
        }"#;
        let obs = TideObservation::from_json(json).unwrap();

        assert_eq!(obs.current_height_ft, 2.4);
        assert_eq!(obs.state, TideState::Rising);
        assert_eq!(
            obs.tides.previous_low,
            Some(TideEvent {
                minute: 225,
                height_ft: 0.3
            })
        );
        assert_eq!(
            obs.tides.next_high,
            Some(TideEvent {
                minute: 1290,
                height_ft: 4.2
            })
        );
        assert_eq!(obs.tides.previous_high, None);
        assert_eq!(obs.tides.next_low, None);
    }

    #[test]
    fn unparseable_time_drops_the_whole_event() {
        let json = r#"{
            "current_height_ft": 2.0,
            "state": "high",
            "tides": {
                "next_high": { "time": "whenever", "height": 4.2 }
            }
        }"#;
        let obs = TideObservation::from_json(json).unwrap();
        assert_eq!(obs.tides.next_high, None);
    }

    #[test]
    fn missing_state_and_tides_default_cleanly() {
        let obs = TideObservation::from_json(r#"{ "current_height_ft": 1.0 }"#).unwrap();
        assert_eq!(obs.state, TideState::Mid);
        assert_eq!(obs.tides, TideEvents::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TideObservation::from_json("not json").is_err());
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut obs = TideObservation::from_json(
            r#"{ "current_height_ft": 2.0, "state": "rising" }"#,
        )
        .unwrap();
        let before = obs;
        obs.merge(&ObservationPatch::default());
        assert_eq!(obs, before);
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let mut obs = TideObservation {
            current_height_ft: 2.0,
            state: TideState::Rising,
            tides: TideEvents::default(),
        };
        let patch = ObservationPatch::from_json(r#"{ "state": "falling" }"#).unwrap();
        obs.merge(&patch);

        assert_eq!(obs.state, TideState::Falling);
        assert_eq!(obs.current_height_ft, 2.0);
    }

    #[test]
    fn patch_replaces_the_tides_block_as_a_whole() {
        let mut obs = TideObservation::from_json(
            r#"{
                "current_height_ft": 2.0,
                "tides": { "previous_high": { "time": "1:00 AM", "height": 4.0 } }
            }"#,
        )
        .unwrap();
        let patch = ObservationPatch::from_json(
            r#"{ "tides": { "next_low": { "time": "2:00 PM", "height": 0.5 } } }"#,
        )
        .unwrap();
        obs.merge(&patch);

        // Shallow merge: the old previous_high does not survive.
        assert_eq!(obs.tides.previous_high, None);
        assert!(obs.tides.next_low.is_some());
    }
}
