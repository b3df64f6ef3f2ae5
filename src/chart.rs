//! Tide chart rendering: geometry layout and the drawing boundary.
//!
//! The chart is the one component that touches a presentation surface. It is
//! split in two: [`layout`] is a pure function from an observation to pixel
//! geometry (curve path, marker glyphs, now-line), and [`TideChart`] owns a
//! drawing surface and translates that geometry into embedded-graphics
//! primitives. Any `DrawTarget` can sit behind the seam.
//!
//! Every render clears and redraws the whole surface; there is no incremental
//! diffing. Drawing errors are swallowed — a render cycle never fails, it only
//! loses fidelity.

use crate::config::ChartConfig;
use crate::estimator::{estimate, SinusoidParameters};
use crate::fallback;
use crate::markers::project;
use crate::observation::ObservationPatch;
use crate::sampler::{sample, VerticalScale};
use crate::{ExtremumKind, Sample, Marker, TideObservation};
use chrono::{Local, Timelike};
use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::Text,
};

/// One marker placed in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGlyph {
    pub x: f32,
    pub y: f32,
    pub kind: ExtremumKind,
    pub is_past: bool,
}

/// Complete pixel geometry for one render cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Ordered curve path as (x, y) pixel pairs.
    pub path: Vec<(f32, f32)>,
    /// Zero-to-four marker glyphs.
    pub markers: Vec<MarkerGlyph>,
    /// X pixel of the vertical now-line.
    pub now_x: f32,
    /// True when the placeholder sinusoid replaced a degenerate path.
    pub used_fallback: bool,
}

/// Current wall-clock minute of day.
fn current_minute() -> u16 {
    let now = Local::now();
    (now.hour() * 60 + now.minute()) as u16
}

/// Compute the full chart geometry for an observation.
///
/// Fits the sinusoid, samples it across the window, and projects markers and
/// the now-line into pixel space. If sampling yields fewer than two usable
/// points the path cannot form a curve, so the whole layout is redone with
/// the supplied placeholder parameters instead.
pub fn layout(
    observation: &TideObservation,
    now_minute: u16,
    width_px: u32,
    height_px: u32,
    config: &ChartConfig,
    placeholder: SinusoidParameters,
) -> ChartGeometry {
    let window = config.sampling.window_minutes.max(1);
    let step = config.sampling.step_minutes;
    let scale = VerticalScale::for_chart(
        height_px,
        config.chart.vertical_center_fraction,
        config.chart.amplitude_fraction,
    );
    let minute_to_x =
        |minute: u16| (minute as f32 / window as f32 * (width_px.saturating_sub(1)) as f32)
            .min((width_px.saturating_sub(1)) as f32);

    let mut params = estimate(observation, now_minute);
    let mut samples: Vec<Sample> = sample(params, scale, window, step).collect();
    let mut used_fallback = false;
    if samples.len() < 2 {
        params = placeholder;
        samples = sample(params, scale, window, step).collect();
        used_fallback = true;
    }

    let path = samples
        .iter()
        .map(|s| (minute_to_x(s.minute), s.render_y))
        .collect();

    let markers = project(&observation.tides, now_minute)
        .into_iter()
        .filter_map(|marker: Marker| {
            if !marker.height_ft.is_finite() {
                return None;
            }
            let normalized =
                ((marker.height_ft - params.midline_ft) / params.amplitude_ft).clamp(-1.0, 1.0);
            Some(MarkerGlyph {
                x: minute_to_x(marker.minute.min(window)),
                y: scale.project(normalized),
                kind: marker.kind,
                is_past: marker.is_past,
            })
        })
        .collect();

    ChartGeometry {
        path,
        markers,
        now_x: minute_to_x(now_minute.min(window)),
        used_fallback,
    }
}

/// A tide chart bound to a drawing surface.
///
/// Owns the surface exclusively; all side effects stay inside it. The most
/// recent observation is retained to serve merge-updates and resizes — that
/// is the only state surviving between render calls.
pub struct TideChart<S> {
    surface: S,
    config: ChartConfig,
    placeholder: SinusoidParameters,
    last_observation: Option<TideObservation>,
}

impl<S> TideChart<S>
where
    S: DrawTarget<Color = BinaryColor>,
{
    /// Bind a chart to a surface. The placeholder curve used for degenerate
    /// renders defaults to [`fallback::placeholder`].
    pub fn new(surface: S, config: ChartConfig) -> Self {
        TideChart {
            surface,
            config,
            placeholder: fallback::placeholder(),
            last_observation: None,
        }
    }

    /// Substitute the degenerate-render placeholder curve.
    pub fn with_placeholder(mut self, placeholder: SinusoidParameters) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Render a fresh observation at the current wall-clock time.
    pub fn render(&mut self, observation: TideObservation) {
        self.render_at(observation, current_minute());
    }

    /// Render a fresh observation at an explicit minute of day.
    pub fn render_at(&mut self, observation: TideObservation, now_minute: u16) {
        self.last_observation = Some(observation);
        self.redraw(now_minute);
    }

    /// Shallow-merge a partial observation into the retained one and redraw.
    /// With nothing retained yet, the patch lands on a default observation.
    pub fn update_with_data(&mut self, patch: &ObservationPatch) {
        let mut observation = self.last_observation.unwrap_or_default();
        observation.merge(patch);
        self.render_at(observation, current_minute());
    }

    /// Re-read the surface dimensions and redraw the retained observation.
    pub fn resize(&mut self) {
        self.redraw(current_minute());
    }

    /// Release the drawing surface, dropping all retained state.
    pub fn destroy(self) -> S {
        self.surface
    }

    /// Geometry for the retained observation, as [`layout`] would produce it.
    pub fn geometry_at(&self, now_minute: u16) -> Option<ChartGeometry> {
        let observation = self.last_observation.as_ref()?;
        let size = self.surface.bounding_box().size;
        Some(layout(
            observation,
            now_minute,
            size.width,
            size.height,
            &self.config,
            self.placeholder,
        ))
    }

    fn redraw(&mut self, now_minute: u16) {
        let Some(geometry) = self.geometry_at(now_minute) else {
            return;
        };
        let height = self.surface.bounding_box().size.height as i32;

        // Clear-and-redraw: full geometry regeneration per call.
        self.surface.clear(BinaryColor::Off).ok();

        // Filled region below the curve, then the stroked path on top.
        for &(x, y) in &geometry.path {
            Line::new(
                Point::new(x as i32, y as i32),
                Point::new(x as i32, height - 1),
            )
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.surface)
            .ok();
        }
        let mut previous_point: Option<Point> = None;
        for &(x, y) in &geometry.path {
            let point = Point::new(x as i32, y as i32);
            if let Some(prev) = previous_point {
                Line::new(prev, point)
                    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
                    .draw(&mut self.surface)
                    .ok();
            }
            previous_point = Some(point);
        }

        // Vertical now-line.
        let now_x = geometry.now_x as i32;
        Line::new(Point::new(now_x, 0), Point::new(now_x, height - 1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.surface)
            .ok();

        // Marker glyphs: filled circles for upcoming events, outlines for
        // ones already behind us, each labelled H or L.
        let text_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        for glyph in &geometry.markers {
            let center = Point::new(glyph.x as i32, glyph.y as i32);
            let style = if glyph.is_past {
                PrimitiveStyle::with_stroke(BinaryColor::On, 1)
            } else {
                PrimitiveStyle::with_fill(BinaryColor::On)
            };
            Circle::with_center(center, 7)
                .into_styled(style)
                .draw(&mut self.surface)
                .ok();

            let label = match glyph.kind {
                ExtremumKind::High => "H",
                ExtremumKind::Low => "L",
            };
            Text::new(label, center + Point::new(6, -6), text_style)
                .draw(&mut self.surface)
                .ok();
        }
    }
}

/// Render the synthesized curve to a terminal, development-mode style.
///
/// The curve is drawn with dots, known extrema with `H`/`L`, and the current
/// time column with `X` on the curve row.
pub fn draw_ascii(samples: &[Sample], markers: &[Marker], now_minute: u16, window_minutes: u16) {
    const ROWS: usize = 16;
    const COLS: usize = 72;

    if samples.is_empty() {
        println!("(no curve)");
        return;
    }

    let (min_height, max_height) = samples
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), s| {
            (min.min(s.height_ft), max.max(s.height_ft))
        });
    let range = (max_height - min_height).max(1e-3);
    let height_to_row = |height_ft: f32| {
        let normalized = ((height_ft - min_height) / range).clamp(0.0, 1.0);
        ((1.0 - normalized) * (ROWS as f32 - 1.0)).round() as usize
    };
    let minute_to_col =
        |minute: u16| ((minute.min(window_minutes) as usize * (COLS - 1)) / window_minutes as usize);

    let mut grid = vec![vec![' '; COLS]; ROWS];
    for s in samples {
        grid[height_to_row(s.height_ft)][minute_to_col(s.minute)] = '•';
    }
    for marker in markers {
        let glyph = match marker.kind {
            ExtremumKind::High => 'H',
            ExtremumKind::Low => 'L',
        };
        grid[height_to_row(marker.height_ft)][minute_to_col(marker.minute)] = glyph;
    }
    if let Some(now_sample) = samples.iter().min_by_key(|s| {
        (s.minute as i32 - now_minute as i32).unsigned_abs()
    }) {
        grid[height_to_row(now_sample.height_ft)][minute_to_col(now_minute)] = 'X';
    }

    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
    let labels = format!(
        "{:<w$}{}{:>w$}",
        "0h",
        "12h",
        "24h",
        w = (COLS - 3) / 2
    );
    println!("{}", labels);
}
