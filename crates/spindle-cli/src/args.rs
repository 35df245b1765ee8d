//! Command-line argument definitions for the Spindle CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects between animating one algorithm and
//! comparing all of them; values left out fall back to the configuration
//! file.

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};

use spindle::{algorithm::Algorithm, direction::Direction};

/// Command-line arguments for the Spindle disk scheduling visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Animate a single algorithm and chart its head movement
    Run(RunArgs),
    /// Compare the total seek of every algorithm
    Compare(WorkloadArgs),
}

/// Inputs shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct WorkloadArgs {
    /// Starting head position
    #[arg(long)]
    pub head: String,

    /// Highest addressable track
    #[arg(long)]
    pub max_track: Option<String>,

    /// Initial sweep direction (toward-zero/left, toward-max/right)
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Pending requests, separated by commas, semicolons or spaces.
    /// Prompted for on standard input when omitted.
    #[arg(short, long)]
    pub requests: Option<String>,

    /// Number of requests to expect (at least one)
    #[arg(short = 'n', long)]
    pub count: Option<NonZeroUsize>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub workload: WorkloadArgs,

    /// Scheduling algorithm (fcfs, sstf, scan, c-scan, look, c-look)
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Delay between animation frames in milliseconds
    #[arg(short, long)]
    pub speed: Option<u64>,
}
