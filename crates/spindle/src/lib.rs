//! Spindle - compute, animate and chart disk-head scheduling orders.
//!
//! Parsing of textual inputs, the six scheduling algorithms, frame-by-frame
//! playback and SVG chart export, tied together by [`Simulator`].

pub mod animation;
pub mod color;
pub mod config;
pub mod session;

mod error;
mod export;
mod scale;

pub use spindle_core::{algorithm, compare, direction, seek, sequence, track, workload};

pub use error::SpindleError;

use log::{debug, info, trace};

use spindle_core::{
    algorithm::Algorithm,
    compare::{Comparison, Run},
    direction::Direction,
    track::TrackSpace,
    workload::Workload,
};

use config::AppConfig;
use export::{Exporter, svg::SvgBuilder};

/// Entry point for turning raw inputs into runs and charts.
///
/// # Examples
///
/// ```rust
/// use spindle::{Simulator, algorithm::Algorithm, config::AppConfig, direction::Direction};
///
/// let simulator = Simulator::new(AppConfig::default());
///
/// let workload = simulator
///     .parse_workload("199", "53", "98, 183, 37, 122, 14, 124, 65, 67", Direction::TowardMax, None)
///     .expect("Failed to parse");
///
/// let run = simulator.run(Algorithm::Sstf, &workload);
/// assert_eq!(run.metric().total(), 236);
///
/// let svg = simulator
///     .render_run_svg(&run, workload.space())
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct Simulator {
    config: AppConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including simulation defaults and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this simulator was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse the textual inputs of a run into a validated [`Workload`].
    ///
    /// Each input is parsed on its own, so a failure carries the text of the
    /// field it came from.
    ///
    /// # Arguments
    ///
    /// * `max_track` - The highest addressable track
    /// * `head` - The starting head position
    /// * `requests` - Pending requests separated by commas, semicolons or whitespace
    /// * `direction` - Initial sweep direction for the SCAN family
    /// * `expected_count` - Number of requests the input must hold, if declared
    ///
    /// # Errors
    ///
    /// Returns [`SpindleError::Parse`] for the first field that fails to
    /// parse, with every diagnostic of that field.
    pub fn parse_workload(
        &self,
        max_track: &str,
        head: &str,
        requests: &str,
        direction: Direction,
        expected_count: Option<usize>,
    ) -> Result<Workload, SpindleError> {
        info!("Parsing workload");

        let space = spindle_parser::parse_max_track(max_track)
            .map_err(|err| SpindleError::new_parse_error("max track", err, max_track))?;
        let head_track = spindle_parser::parse_track(head, space)
            .map_err(|err| SpindleError::new_parse_error("head position", err, head))?;
        let request_tracks = spindle_parser::parse_requests(requests, space, expected_count)
            .map_err(|err| SpindleError::new_parse_error("requests", err, requests))?;

        let workload = Workload::new(space, head_track, direction, request_tracks)?;

        debug!(
            space:% = workload.space(),
            head:% = workload.head(),
            requests = workload.requests().len();
            "Workload parsed successfully"
        );
        Ok(workload)
    }

    /// Compute the visit order and seek metric of one algorithm.
    pub fn run(&self, algorithm: Algorithm, workload: &Workload) -> Run {
        info!(algorithm:% = algorithm; "Running algorithm");

        let run = algorithm.run(workload);

        trace!(sequence:% = run.sequence(); "Visit order");
        info!(metric:% = run.metric(); "Run complete");
        run
    }

    /// Run every algorithm on `workload` and pick the best.
    pub fn compare(&self, workload: &Workload) -> Comparison {
        info!("Comparing all algorithms");

        let comparison = spindle_core::compare::compare_all(workload);

        for run in comparison.runs() {
            debug!(algorithm:% = run.algorithm(), total = run.metric().total(); "Algorithm total");
        }
        info!(best:% = comparison.best(); "Comparison complete");
        comparison
    }

    /// Render the head movement of `run` as an SVG line chart.
    ///
    /// # Errors
    ///
    /// Returns [`SpindleError::Config`] if a style color is invalid, or
    /// [`SpindleError::Export`] if the chart cannot be drawn.
    pub fn render_run_svg(&self, run: &Run, space: TrackSpace) -> Result<String, SpindleError> {
        info!(algorithm:% = run.algorithm(); "Rendering line chart");

        let palette = self.config.style().palette().map_err(SpindleError::Config)?;
        let mut exporter = SvgBuilder::new(Vec::new()).with_palette(palette).build()?;
        exporter.export_run(run, space)?;

        Self::svg_string(exporter.into_inner())
    }

    /// Render the totals of `comparison` as an SVG bar chart.
    ///
    /// # Errors
    ///
    /// Returns [`SpindleError::Config`] if a style color is invalid, or
    /// [`SpindleError::Export`] if the chart cannot be drawn.
    pub fn render_comparison_svg(&self, comparison: &Comparison) -> Result<String, SpindleError> {
        info!("Rendering bar chart");

        let palette = self.config.style().palette().map_err(SpindleError::Config)?;
        let mut exporter = SvgBuilder::new(Vec::new()).with_palette(palette).build()?;
        exporter.export_comparison(comparison)?;

        Self::svg_string(exporter.into_inner())
    }

    fn svg_string(bytes: Vec<u8>) -> Result<String, SpindleError> {
        let svg = String::from_utf8(bytes)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
