//! Sinusoid parameter estimation from sparse tide control points.
//!
//! Given the current height, the qualitative tide state, and up to four
//! neighboring extrema, this module fits the single semidiurnal sine the
//! rest of the engine evaluates. The fit is deliberately approximate: the
//! period is fixed, the range is a conservative envelope over the known
//! extrema, and the phase is chosen so the curve passes through the current
//! observation — not through the supplied event times. That approximation is
//! what the dashboard's visual design is built around.

use crate::{TideObservation, TideState};

/// Semidiurnal tidal period in hours. Fixed, never derived from data.
pub const SEMIDIURNAL_PERIOD_HOURS: f32 = 12.4;

/// Default high-water height in feet, used when no high events are known.
pub const DEFAULT_HIGH_FT: f32 = 4.0;

/// Default low-water height in feet, used when no low events are known.
pub const DEFAULT_LOW_FT: f32 = 0.5;

/// Smallest amplitude the estimator will report, in feet. Keeps the
/// normalized-height division finite when the known extrema coincide.
pub const MIN_AMPLITUDE_FT: f32 = 0.1;

/// The fitted sinusoid for one render cycle.
///
/// Immutable once estimated; the sampler evaluates
/// `midline + amplitude * sin(hours * 2π / period + phase_offset)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinusoidParameters {
    /// Half the estimated high-low range, in feet. Always >= [`MIN_AMPLITUDE_FT`].
    pub amplitude_ft: f32,
    /// Mean of the estimated high and low heights, in feet.
    pub midline_ft: f32,
    /// Period in hours. Always [`SEMIDIURNAL_PERIOD_HOURS`].
    pub period_hours: f32,
    /// Radian shift aligning the sine with the observed height/state at the
    /// current wall-clock time.
    pub phase_offset: f32,
}

impl SinusoidParameters {
    /// Evaluate the fitted curve at a minute of day.
    pub fn height_at(&self, minute: u16) -> f32 {
        let hours = minute as f32 / 60.0;
        let phase = hours * std::f32::consts::TAU / self.period_hours + self.phase_offset;
        self.midline_ft + self.amplitude_ft * phase.sin()
    }
}

/// Fit a sinusoid to the observation, phase-aligned to `now_minute`.
///
/// The three stages:
///
/// 1. **Range envelope.** Start from the default range and widen it with every
///    known extremum: `max` over highs, `min` over lows. The envelope never
///    shrinks below an observed extremum even when the events disagree.
/// 2. **Amplitude and midline** from the envelope, with a minimum-amplitude
///    clamp applied before any division.
/// 3. **Phase.** An exact high or low pins the curve to its peak or trough.
///    Otherwise the current height is normalized against the envelope and
///    placed on the ascending (`asin`) or descending (`π - asin`) branch;
///    sine is not injective, so the reflection selects the falling slope.
///    The abstract phase is then shifted by the current time's own phase so
///    that sampling at `now_minute` reproduces the observation.
///
/// Missing events are skipped; with no events at all the defaults alone give
/// a valid curve. `asin` inputs are clamped to [-1, 1], so an observed height
/// outside the envelope still produces a finite phase.
pub fn estimate(observation: &TideObservation, now_minute: u16) -> SinusoidParameters {
    let tides = &observation.tides;

    let mut high_ft = DEFAULT_HIGH_FT;
    let mut low_ft = DEFAULT_LOW_FT;
    if let Some(next_high) = tides.next_high {
        high_ft = next_high.height_ft;
    }
    if let Some(previous_high) = tides.previous_high {
        high_ft = high_ft.max(previous_high.height_ft);
    }
    if let Some(next_low) = tides.next_low {
        low_ft = next_low.height_ft;
    }
    if let Some(previous_low) = tides.previous_low {
        low_ft = low_ft.min(previous_low.height_ft);
    }

    let amplitude_ft = ((high_ft - low_ft) / 2.0).max(MIN_AMPLITUDE_FT);
    let midline_ft = (high_ft + low_ft) / 2.0;

    let normalized = ((observation.current_height_ft - midline_ft) / amplitude_ft).clamp(-1.0, 1.0);
    let phase_shift = match observation.state {
        TideState::High => std::f32::consts::FRAC_PI_2,
        TideState::Low => -std::f32::consts::FRAC_PI_2,
        TideState::Rising => normalized.asin(),
        TideState::Falling => std::f32::consts::PI - normalized.asin(),
        TideState::Mid | TideState::Unknown => normalized.asin(),
    };

    // One full period spans 2π, so an hour of wall-clock time is worth
    // 2π / 12.4 = π / 6.2 radians.
    let now_hours = now_minute as f32 / 60.0;
    let current_phase = now_hours * std::f32::consts::PI / 6.2;

    SinusoidParameters {
        amplitude_ft,
        midline_ft,
        period_hours: SEMIDIURNAL_PERIOD_HOURS,
        phase_offset: phase_shift - current_phase,
    }
}
