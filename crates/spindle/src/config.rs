//! Configuration types for Spindle runs and charts.
//!
//! This module provides configuration structures that control simulation
//! defaults and chart styling. All types implement [`serde::Deserialize`] for
//! loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining simulation and style settings.
//! - [`SimulationConfig`] - Fallback values for run parameters not given on the command line.
//! - [`StyleConfig`] - Chart colors.
//!
//! # Example
//!
//! ```
//! # use spindle::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.simulation().max_track(), 199);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use spindle_core::{algorithm::Algorithm, direction::Direction};

use crate::color::Color;

/// Top-level application configuration combining simulation and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Simulation configuration section.
    #[serde(default)]
    simulation: SimulationConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified simulation and style configurations.
    pub fn new(simulation: SimulationConfig, style: StyleConfig) -> Self {
        Self { simulation, style }
    }

    /// Returns the simulation configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Fallback run parameters.
///
/// Fields missing from a configuration file keep their built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    max_track: u32,
    direction: Direction,
    /// Delay between animation frames in milliseconds.
    speed: u64,
    algorithm: Algorithm,
    /// Number of requests to prompt for when none are given.
    count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_track: 199,
            direction: Direction::TowardMax,
            speed: 200,
            algorithm: Algorithm::Fcfs,
            count: 8,
        }
    }
}

impl SimulationConfig {
    pub fn max_track(&self) -> u32 {
        self.max_track
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Visual styling configuration for rendered charts.
///
/// Every color is a CSS color string. Colors that are not set fall back to
/// the built-in dark palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    line_color: Option<String>,
    #[serde(default)]
    bar_color: Option<String>,
    #[serde(default)]
    best_bar_color: Option<String>,
    #[serde(default)]
    text_color: Option<String>,
    #[serde(default)]
    grid_color: Option<String>,
}

impl StyleConfig {
    /// Resolves every configured color, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color string that cannot be parsed
    /// into a valid [`Color`].
    pub fn palette(&self) -> Result<Palette, String> {
        Ok(Palette {
            background: resolve("background", &self.background_color, "#10101a")?,
            line: resolve("line", &self.line_color, "#00f5ff")?,
            bar: resolve("bar", &self.bar_color, "rgba(148, 0, 211, 0.85)")?,
            best_bar: resolve("best bar", &self.best_bar_color, "#c864ff")?,
            text: resolve("text", &self.text_color, "#e0aaff")?,
            grid: resolve("grid", &self.grid_color, "rgba(0, 245, 255, 0.3)")?,
        })
    }
}

fn resolve(name: &str, configured: &Option<String>, default: &str) -> Result<Color, String> {
    Color::new(configured.as_deref().unwrap_or(default))
        .map_err(|err| format!("Invalid {name} color in config: {err}"))
}

/// The resolved colors of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    background: Color,
    line: Color,
    bar: Color,
    best_bar: Color,
    text: Color,
    grid: Color,
}

impl Palette {
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn line(&self) -> Color {
        self.line
    }

    pub fn bar(&self) -> Color {
        self.bar
    }

    pub fn best_bar(&self) -> Color {
        self.best_bar
    }

    pub fn text(&self) -> Color {
        self.text
    }

    pub fn grid(&self) -> Color {
        self.grid
    }
}
