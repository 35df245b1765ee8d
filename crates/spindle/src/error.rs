//! Error types for Spindle operations.
//!
//! This module provides the main error type [`SpindleError`] which wraps
//! the error conditions of parsing, simulating and exporting a run.

use std::io;

use thiserror::Error;

use spindle_core::track::TrackError;
use spindle_parser::ParseError;

/// The main error type for Spindle operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the text of the input field that failed, so the
/// spans inside its diagnostics can be rendered against the original source.
#[derive(Debug, Error)]
pub enum SpindleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid {field}: {err}")]
    Parse {
        field: &'static str,
        err: ParseError,
        src: String,
    },

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SpindleError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SpindleError {
    /// Create a new `Parse` error for the input `field` with its source text.
    pub fn new_parse_error(field: &'static str, err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            field,
            err,
            src: src.into(),
        }
    }
}
