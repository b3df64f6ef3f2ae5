//! # Tide Curve Synthesis Core Library
//!
//! This library reconstructs a continuous, physically plausible tide-height
//! curve over a 24-hour window from a handful of sparse control points
//! (previous/next high and low tide events) supplied by an external forecast
//! source, and turns it into render geometry for a surf-conditions dashboard.
//!
//! ## Design Philosophy
//!
//! ### Best-effort synthesis
//! The engine is a pure function of its latest input. Every failure mode
//! degrades visual fidelity instead of aborting: unparseable clock strings
//! make an event unusable, missing events fall back to a default tidal range,
//! non-finite samples are dropped, and a fully degenerate curve is replaced
//! by a context-free placeholder sinusoid. No error ever escapes a render
//! cycle.
//!
//! ### Semidiurnal approximation
//! The fitted curve is a single sine with a fixed 12.4-hour period (the
//! semidiurnal tidal period). Amplitude and midline come from the known
//! extrema; the phase is chosen so that evaluating the curve at the current
//! time reproduces the observed height and qualitative state. This is a
//! visualization aid, not harmonic analysis.
//!
//! ### Data Flow
//! 1. **Adapt**: raw forecast JSON → typed [`TideObservation`] (state enum,
//!    minutes-of-day, unusable events dropped)
//! 2. **Estimate**: observation → sinusoid amplitude/midline/phase
//! 3. **Sample**: sinusoid → ordered `(minute, height, render_y)` sequence
//! 4. **Project**: control points → high/low markers with past/future tags
//! 5. **Render**: geometry → filled curve, now-line, marker glyphs
//!
//! ## Core Types
//!
//! - [`TideObservation`]: the adapted external input for one render cycle
//! - [`Sample`]: one point of the synthesized curve
//! - [`Marker`]: one high/low tide event placed on the chart

// Module declarations
pub mod chart;
pub mod clock;
pub mod config;
pub mod estimator;
pub mod fallback;
pub mod markers;
pub mod observation;
pub mod sampler;

/// Minutes in a 24-hour chart window.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Qualitative tide state reported by the forecast source.
///
/// The wire format is free text matched by case-insensitive substring
/// ("Rising", "flooding", "LOW", ...). It is resolved into this closed
/// enumeration exactly once, at the data-adaptation boundary, so the
/// estimator never re-parses strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TideState {
    /// At or near high water.
    High,
    /// At or near low water.
    Low,
    /// Flooding: height increasing.
    Rising,
    /// Ebbing: height decreasing.
    Falling,
    /// Explicitly mid-tide, or state text left empty.
    Mid,
    /// Unrecognized state text. Treated like [`TideState::Mid`].
    Unknown,
}

/// A single known tide extremum: one (time, height) control point.
///
/// Events whose clock string failed to parse never reach this type; an
/// unparseable time makes the whole event unusable for both curve-fitting
/// and marker placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TideEvent {
    /// Minute of day the extremum occurs (0..=1439).
    pub minute: u16,
    /// Predicted height at the extremum, in feet.
    pub height_ft: f32,
}

/// The up-to-four control points surrounding "now".
///
/// Every slot is optional; the engine skips missing ones without error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TideEvents {
    pub previous_high: Option<TideEvent>,
    pub previous_low: Option<TideEvent>,
    pub next_high: Option<TideEvent>,
    pub next_low: Option<TideEvent>,
}

/// The adapted external input: everything the engine knows for one render.
///
/// Owned by the caller's data-fetch cycle and passed in per render; the
/// engine never mutates it. The chart retains the most recent observation
/// only to serve merge-updates and resize-triggered redraws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TideObservation {
    /// Currently observed water height in feet. Can be negative or exceed
    /// the ordinary tidal range in degenerate inputs; the engine must not
    /// crash, only produce a best-effort curve.
    pub current_height_ft: f32,
    /// Qualitative state, resolved at the adaptation boundary.
    pub state: TideState,
    /// Neighboring extrema, as far as they are known.
    pub tides: TideEvents,
}

impl Default for TideObservation {
    fn default() -> Self {
        TideObservation {
            current_height_ft: 0.0,
            state: TideState::Mid,
            tides: TideEvents::default(),
        }
    }
}

/// One point of the synthesized curve.
///
/// Samples are produced in strictly increasing `minute` order by
/// construction; the ordered sequence forms the render path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Minute of the chart window (0..=1440 inclusive at the right edge).
    pub minute: u16,
    /// Synthesized tide height in feet.
    pub height_ft: f32,
    /// Vertical render coordinate in pixels.
    pub render_y: f32,
}

/// Which extremum a marker represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremumKind {
    High,
    Low,
}

/// One high/low tide event placed on the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Minute of day; may exceed 1440 after the past-midnight rollover.
    pub minute: u16,
    /// Event height in feet.
    pub height_ft: f32,
    pub kind: ExtremumKind,
    /// True when the event came from a `previous_*` slot. This is a property
    /// of the slot, not a time comparison.
    pub is_past: bool,
}
