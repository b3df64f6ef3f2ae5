//! # End-to-End Engine Tests
//!
//! These tests exercise the whole synthesis pipeline the way the dashboard
//! drives it: adapt raw observation JSON, fit the sinusoid, sample the curve,
//! and project markers. They focus on cross-module properties rather than
//! the per-module behavior covered by each module's own tests.

use tide_chart_lib::chart::{layout, TideChart};
use tide_chart_lib::config::ChartConfig;
use tide_chart_lib::estimator::estimate;
use tide_chart_lib::fallback;
use tide_chart_lib::markers::project;
use tide_chart_lib::observation::ObservationPatch;
use tide_chart_lib::sampler::{sample, VerticalScale};
use tide_chart_lib::{ExtremumKind, TideObservation, TideState};

const FORECAST_JSON: &str = r#"{
    "current_height_ft": 2.4,
    "state": "rising",
    "tides": {
        "previous_high": { "time": "2:10 AM", "height": 4.1 },
        "previous_low":  { "time": "8:25 AM", "height": 0.3 },
        "next_high":     { "time": "2:45 PM", "height": 4.4 },
        "next_low":      { "time": "9:05 PM", "height": 0.2 }
    }
}"#;

/// Full pipeline: JSON in, finite ordered geometry out.
#[test]
fn forecast_json_becomes_a_complete_curve() {
    let observation = TideObservation::from_json(FORECAST_JSON).unwrap();
    assert_eq!(observation.state, TideState::Rising);

    let now_minute = 700;
    let params = estimate(&observation, now_minute);
    let scale = VerticalScale::for_chart(300, 0.5, 0.35);
    let samples: Vec<_> = sample(params, scale, 1440, 2).collect();

    assert_eq!(samples.len(), 721);
    for pair in samples.windows(2) {
        assert!(pair[0].minute < pair[1].minute);
    }
    assert!(samples
        .iter()
        .all(|s| s.height_ft.is_finite() && s.render_y.is_finite()));

    // The fitted curve passes through the current observation.
    assert!((params.height_at(now_minute) - 2.4).abs() < 1e-2);

    let markers = project(&observation.tides, now_minute);
    assert_eq!(markers.len(), 4);
    assert_eq!(markers.iter().filter(|m| m.is_past).count(), 2);
}

/// A high-state observation peaks at the current time, within tolerance.
#[test]
fn high_state_curve_peaks_now() {
    let observation = TideObservation::from_json(
        r#"{ "current_height_ft": 4.0, "state": "high tide" }"#,
    )
    .unwrap();
    let now_minute = 512;
    let params = estimate(&observation, now_minute);

    let peak = params.midline_ft + params.amplitude_ft;
    assert!((params.height_at(now_minute) - peak).abs() < 1e-3);
}

/// A low-state observation troughs at the current time, within tolerance.
#[test]
fn low_state_curve_troughs_now() {
    let observation = TideObservation::from_json(
        r#"{ "current_height_ft": 0.4, "state": "Low" }"#,
    )
    .unwrap();
    let now_minute = 512;
    let params = estimate(&observation, now_minute);

    let trough = params.midline_ft - params.amplitude_ft;
    assert!((params.height_at(now_minute) - trough).abs() < 1e-3);
}

/// An empty observation still renders: hardcoded defaults kick in.
#[test]
fn eventless_observation_still_renders() {
    let observation = TideObservation::from_json(
        r#"{ "current_height_ft": 2.0, "state": "" }"#,
    )
    .unwrap();
    let params = estimate(&observation, 600);

    assert!((params.amplitude_ft - 1.75).abs() < 1e-4);
    assert!((params.midline_ft - 2.25).abs() < 1e-4);

    let scale = VerticalScale::for_chart(300, 0.5, 0.35);
    let samples: Vec<_> = sample(params, scale, 1440, 2).collect();
    assert_eq!(samples.len(), 721);
    assert!(samples.iter().all(|s| s.height_ft.is_finite()));
}

/// Bad clock strings degrade single events, never the render.
#[test]
fn partially_unparseable_forecast_degrades_gracefully() {
    let observation = TideObservation::from_json(
        r#"{
            "current_height_ft": 2.0,
            "state": "falling",
            "tides": {
                "previous_high": { "time": "not a time", "height": 4.1 },
                "next_low":      { "time": "9:05 PM", "height": 0.2 }
            }
        }"#,
    )
    .unwrap();

    assert!(observation.tides.previous_high.is_none());

    let markers = project(&observation.tides, 700);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, ExtremumKind::Low);

    let geometry = layout(
        &observation,
        700,
        400,
        300,
        &ChartConfig::default(),
        fallback::placeholder(),
    );
    assert!(!geometry.used_fallback);
    assert_eq!(geometry.path.len(), 721);
}

/// Merge-update round trip through the chart: an empty patch is a no-op on
/// geometry, a real patch shifts the curve.
#[test]
fn merge_updates_only_change_geometry_when_they_say_something() {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;

    let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
    display.set_allow_overdraw(true);
    display.set_allow_out_of_bounds_drawing(true);

    let observation = TideObservation::from_json(FORECAST_JSON).unwrap();
    let mut chart = TideChart::new(display, ChartConfig::default());
    chart.render_at(observation, 700);

    let before = chart.geometry_at(700).unwrap();
    chart.update_with_data(&ObservationPatch::default());
    assert_eq!(chart.geometry_at(700).unwrap(), before);

    chart.update_with_data(&ObservationPatch {
        state: Some(TideState::High),
        ..ObservationPatch::default()
    });
    assert_ne!(chart.geometry_at(700).unwrap(), before);
}
