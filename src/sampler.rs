//! Curve sampling and vertical pixel mapping.
//!
//! Evaluates the fitted sinusoid at a regular minute grid across the render
//! window and maps every height onto a vertical pixel coordinate. Sampling is
//! lazy and restartable: each call builds a fresh finite iterator with no
//! shared iteration state, so the chart can regenerate its geometry from
//! scratch on every render.

use crate::estimator::SinusoidParameters;
use crate::Sample;

/// Default render window: 24 hours.
pub const DEFAULT_WINDOW_MINUTES: u16 = 1440;

/// Default sampling step: one sample every 2 minutes.
pub const DEFAULT_STEP_MINUTES: u16 = 2;

/// Linear height-to-pixel transform for one chart layout.
///
/// A normalized height of ±1 (the sinusoid's extremes) lands
/// `max_deflection_px` pixels above or below `center_y`. Both values are
/// presentation constants derived from the chart's pixel height, not tidal
/// quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalScale {
    /// Pixel row of the curve's midline.
    pub center_y: f32,
    /// Maximum pixel deflection of the curve from the midline.
    pub max_deflection_px: f32,
}

impl VerticalScale {
    /// Build a scale for a chart of `height_px` pixels, placing the midline
    /// at `center_fraction` of the height and letting the curve swing over
    /// `amplitude_fraction` of it. Screen y grows downward, so positive
    /// heights deflect upward (smaller y).
    pub fn for_chart(height_px: u32, center_fraction: f32, amplitude_fraction: f32) -> Self {
        VerticalScale {
            center_y: height_px as f32 * center_fraction,
            max_deflection_px: height_px as f32 * amplitude_fraction,
        }
    }

    /// Map a normalized height in [-1, 1] to a pixel row.
    pub fn project(&self, normalized: f32) -> f32 {
        self.center_y - normalized * self.max_deflection_px
    }
}

/// Sample the fitted curve over `[0, window_minutes]` at `step_minutes`
/// spacing.
///
/// The sequence is strictly increasing in `minute` by construction and has
/// `window / step + 1` entries when nothing is dropped. Any step producing a
/// non-finite height or pixel coordinate is dropped rather than emitted, so a
/// malformed parameter set can thin the path but never poison it.
pub fn sample(
    params: SinusoidParameters,
    scale: VerticalScale,
    window_minutes: u16,
    step_minutes: u16,
) -> impl Iterator<Item = Sample> {
    let step = step_minutes.max(1);
    (0..=window_minutes)
        .step_by(step as usize)
        .filter_map(move |minute| {
            let height_ft = params.height_at(minute);
            let normalized = (height_ft - params.midline_ft) / params.amplitude_ft;
            let render_y = scale.project(normalized);
            if height_ft.is_finite() && render_y.is_finite() {
                Some(Sample {
                    minute,
                    height_ft,
                    render_y,
                })
            } else {
                None
            }
        })
}
