//! Error and diagnostic system for Spindle input parsing.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - A collector that reports every bad field of an input in one pass
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single problem with an optional error code, source locations and help
//! text. The diagnostics of one parse are wrapped in [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use spindle_parser::error::{Diagnostic, ErrorCode};
//! # use spindle_parser::Span;
//!
//! let diag = Diagnostic::error("track 250 is outside the valid range 0..=199")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(12..15), "out of range")
//!     .with_help("choose a track between 0 and 199");
//! ```

mod collector;
mod diagnostic;
mod error_code;

pub(crate) use collector::DiagnosticCollector;

pub use collector::ParseError;
pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
