//! Placeholder sinusoid for degenerate render cycles.
//!
//! When curve synthesis produces a path the renderer cannot use (all samples
//! dropped as non-finite), the chart falls back to a context-free curve: the
//! default tidal range, the fixed semidiurnal period, and no phase alignment
//! at all. It carries no information about the current conditions, but it is
//! always renderable, which keeps the dashboard from showing a blank panel.
//!
//! The fallback is constructed explicitly and handed to the chart at build
//! time; there is no process-wide cached calculator.

use crate::estimator::{
    SinusoidParameters, DEFAULT_HIGH_FT, DEFAULT_LOW_FT, SEMIDIURNAL_PERIOD_HOURS,
};

/// Build the context-free placeholder curve parameters.
pub fn placeholder() -> SinusoidParameters {
    SinusoidParameters {
        amplitude_ft: (DEFAULT_HIGH_FT - DEFAULT_LOW_FT) / 2.0,
        midline_ft: (DEFAULT_HIGH_FT + DEFAULT_LOW_FT) / 2.0,
        period_hours: SEMIDIURNAL_PERIOD_HOURS,
        phase_offset: 0.0,
    }
}
