//! Chart export for Spindle results.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning computed runs into an output format. It is the final stage of the
//! Spindle pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Textual inputs
//!     ↓ parse
//! Workload
//!     ↓ order (one algorithm or all six)
//! Run / Comparison
//!     ↓ export (this module)
//! Chart
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`SpindleError::Export`] at the crate
//! boundary.
//!
//! [`SpindleError::Export`]: crate::SpindleError::Export

/// SVG export backend.
pub mod svg;

use spindle_core::{
    compare::{Comparison, Run},
    track::TrackSpace,
};

/// Abstraction for chart export backends.
pub trait Exporter {
    /// Exports the head movement of a single run over `space`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the run cannot be drawn, or
    /// [`Error::Io`] if writing the output fails.
    fn export_run(&mut self, run: &Run, space: TrackSpace) -> Result<(), Error>;

    /// Exports the total seek of every algorithm in a comparison.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the comparison cannot be drawn, or
    /// [`Error::Io`] if writing the output fails.
    fn export_comparison(&mut self, comparison: &Comparison) -> Result<(), Error>;
}

/// Errors that can occur during chart export.
///
/// This type is converted into [`SpindleError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`SpindleError::Export`]: crate::SpindleError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
