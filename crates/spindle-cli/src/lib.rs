//! Spindle CLI library
//!
//! This module contains the core CLI logic for the Spindle disk scheduling
//! visualizer: gathering inputs, playing back a run and exporting charts.

pub mod error_adapter;

mod args;
mod config;
mod prompt;

pub use args::{Args, Command, RunArgs, WorkloadArgs};

use std::{
    fs,
    io::{self, BufRead, Write},
    num::NonZeroUsize,
    time::Duration,
};

use log::{debug, info};

use spindle::{Simulator, SpindleError, animation::Pace, session::Session, workload::Workload};

/// Run the Spindle CLI application
///
/// Requests missing from the command line are read from standard input;
/// frames and the dashboard are printed to standard output.
///
/// # Errors
///
/// Returns `SpindleError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SpindleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the application against the given input and output streams.
pub fn run_with_io(
    args: &Args,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), SpindleError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let simulator = Simulator::new(app_config);

    match &args.command {
        Command::Run(run_args) => play(&simulator, run_args, input, output),
        Command::Compare(workload_args) => compare(&simulator, workload_args, input, output),
    }
}

/// Animate one algorithm and export its line chart.
fn play(
    simulator: &Simulator,
    args: &RunArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), SpindleError> {
    let defaults = simulator.config().simulation();
    let algorithm = args.algorithm.unwrap_or(defaults.algorithm());
    let delay = Duration::from_millis(args.speed.unwrap_or(defaults.speed()));

    let workload = read_workload(simulator, &args.workload, input, output)?;
    let run = simulator.run(algorithm, &workload);

    writeln!(output, "{algorithm}: {}", algorithm.description())?;

    let session = Session::new();
    if let Some(playback) = session.start_run(&run) {
        for frame in playback.paced(delay) {
            debug!(step = frame.index(), running_seek = frame.running_seek(); "Frame");
            writeln!(output, "{frame}  (seek so far: {})", frame.running_seek())?;
        }
    }
    writeln!(output, "Visit order: {}", run.sequence())?;
    writeln!(output, "{}", session.dashboard())?;

    let svg = simulator.render_run_svg(&run, workload.space())?;
    write_svg(&args.workload.output, &svg)
}

/// Compare every algorithm and export the bar chart.
fn compare(
    simulator: &Simulator,
    args: &WorkloadArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), SpindleError> {
    let workload = read_workload(simulator, args, input, output)?;
    let comparison = simulator.compare(&workload);

    for run in comparison.runs() {
        writeln!(output, "{:<8}{:>8}", run.algorithm(), run.metric().total())?;
    }

    let session = Session::new();
    if let Some(best) = session
        .start_comparison(&comparison)
        .and_then(|dashboard| dashboard.best())
    {
        writeln!(output, "Best: {best}")?;
    }

    let svg = simulator.render_comparison_svg(&comparison)?;
    write_svg(&args.output, &svg)
}

/// Gather the inputs of a run, prompting for requests when none were given.
///
/// Values absent from the command line come from the configuration.
fn read_workload(
    simulator: &Simulator,
    args: &WorkloadArgs,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Workload, SpindleError> {
    let defaults = simulator.config().simulation();
    let max_track = args
        .max_track
        .clone()
        .unwrap_or_else(|| defaults.max_track().to_string());
    let direction = args.direction.unwrap_or(defaults.direction());

    let (requests, expected_count) = match &args.requests {
        Some(requests) => (requests.clone(), args.count.map(NonZeroUsize::get)),
        None => {
            let count = args.count.map_or(defaults.count(), NonZeroUsize::get);
            info!(count; "Reading requests from standard input");
            (prompt::read_requests(input, output, count)?, Some(count))
        }
    };

    simulator.parse_workload(&max_track, &args.head, &requests, direction, expected_count)
}

fn write_svg(path: &str, svg: &str) -> Result<(), SpindleError> {
    fs::write(path, svg)?;

    info!(output_file = path; "SVG exported successfully");
    Ok(())
}
