//! Chart configuration loaded from `surf-chart.toml`.
//!
//! Presentation-layer constants only: pixel dimensions, where the curve's
//! midline sits, how far it may swing, the sampling grid, and the periodic
//! refresh interval. Tidal quantities (period, default range) are engine
//! constants and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chart and sampling configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Geometry of the drawing surface
    pub chart: ChartGeometryConfig,
    /// Sampling grid and refresh cadence
    pub sampling: SamplingConfig,
}

/// Pixel geometry of the chart surface.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartGeometryConfig {
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
    /// Fraction of the height at which the curve's midline sits (0.0 = top)
    pub vertical_center_fraction: f32,
    /// Maximum curve deflection as a fraction of the chart height
    pub amplitude_fraction: f32,
}

/// Sampling grid and refresh cadence.
#[derive(Debug, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Render window in minutes (24 hours by default)
    pub window_minutes: u16,
    /// Minutes between curve samples
    pub step_minutes: u16,
    /// Minutes between periodic now-line refreshes in watch mode
    pub refresh_minutes: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            chart: ChartGeometryConfig {
                width: 400,
                height: 300,
                vertical_center_fraction: 0.5,
                amplitude_fraction: 0.35,
            },
            sampling: SamplingConfig {
                window_minutes: 1440,
                step_minutes: 2,
                refresh_minutes: 5,
            },
        }
    }
}

impl ChartConfig {
    /// Load configuration from surf-chart.toml in the working directory.
    /// Falls back to default configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path("surf-chart.toml")
    }

    /// Load configuration from the given path, falling back to defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<ChartConfig>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: invalid config file format: {}", e);
                    eprintln!("Using default chart configuration");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
