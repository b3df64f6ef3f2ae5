//! # Surf Tide Chart Development Binary
//!
//! Renders the synthesized tide curve for an observation JSON file to the
//! terminal. This is the development harness around the engine: the real
//! dashboard feeds observations from its data-fetch cycle and draws through
//! the embedded-graphics seam instead.
//!
//! Usage:
//!   surf-tide-chart [observation.json] [--watch]
//!
//! With `--watch`, the chart is redrawn on the configured refresh interval so
//! the now-line keeps moving between data fetches.

// Test modules
#[cfg(test)]
mod tests;

use chrono::{Local, Timelike};
use std::env;
use tide_chart_lib::chart::draw_ascii;
use tide_chart_lib::config::ChartConfig;
use tide_chart_lib::estimator::estimate;
use tide_chart_lib::markers::project;
use tide_chart_lib::sampler::{sample, VerticalScale};
use tide_chart_lib::TideObservation;

/// Built-in sample observation for running without an input file.
const SAMPLE_OBSERVATION: &str = r#"{
    "current_height_ft": 2.4,
    "state": "rising",
    "tides": {
        "previous_high": { "time": "2:10 AM", "height": 4.1 },
        "previous_low":  { "time": "8:25 AM", "height": 0.3 },
        "next_high":     { "time": "2:45 PM", "height": 4.4 },
        "next_low":      { "time": "9:05 PM", "height": 0.2 }
    }
}"#;

fn current_minute() -> u16 {
    let now = Local::now();
    (now.hour() * 60 + now.minute()) as u16
}

fn render_once(observation: &TideObservation, config: &ChartConfig) {
    let now_minute = current_minute();
    let params = estimate(observation, now_minute);
    let scale = VerticalScale::for_chart(
        config.chart.height,
        config.chart.vertical_center_fraction,
        config.chart.amplitude_fraction,
    );
    // The terminal plot reads better with a coarser grid than the pixel chart.
    let samples: Vec<_> = sample(params, scale, config.sampling.window_minutes, 20).collect();
    let markers = project(&observation.tides, now_minute);
    draw_ascii(&samples, &markers, now_minute, config.sampling.window_minutes);
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let watch_mode = args.iter().any(|arg| arg == "--watch");
    let input_path = args.iter().find(|arg| !arg.starts_with("--"));

    let config = ChartConfig::load();

    let json = match input_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_OBSERVATION.to_string(),
    };
    let observation = TideObservation::from_json(&json)?;

    render_once(&observation, &config);

    while watch_mode {
        std::thread::sleep(std::time::Duration::from_secs(
            config.sampling.refresh_minutes * 60,
        ));
        eprintln!("Refreshing now-line position");
        render_once(&observation, &config);
    }

    Ok(())
}
