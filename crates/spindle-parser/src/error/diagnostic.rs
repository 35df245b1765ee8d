//! The core diagnostic type for the Spindle error system.
//!
//! A [`Diagnostic`] represents a single error with an optional error code,
//! labeled source spans and help text.

use std::fmt;

use spindle_core::track::{TrackError, TrackSpace};

use crate::{error::ErrorCode, span::Span};

/// A labeled span in source code.
///
/// Primary labels mark where the problem is; secondary labels add context,
/// such as the other values of a field that should hold only one.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// A rich error message with source location information.
///
/// # Example
///
/// ```text
/// error[E100]: `9x` is not a number
///    |
///  1 | 98, 9x, 37
///    |     ^^ expected an integer track
///    |
///    = help: tracks are whole numbers between 0 and 199
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use spindle_parser::error::{Diagnostic, ErrorCode};
    /// # use spindle_parser::Span;
    ///
    /// let diag = Diagnostic::error("`abc` is not a number")
    ///     .with_code(ErrorCode::E100)
    ///     .with_label(Span::new(0..3), "expected an integer track");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Build the diagnostic for a track validation failure at `span`.
    pub fn from_track_error(err: &TrackError, span: Span, space: TrackSpace) -> Self {
        let max = space.max_track();
        match err {
            TrackError::NotANumber { .. } => Self::error(err.to_string())
                .with_code(ErrorCode::E100)
                .with_label(span, "expected an integer track")
                .with_help(format!("tracks are whole numbers between 0 and {max}")),
            TrackError::OutOfRange { .. } => Self::error(err.to_string())
                .with_code(ErrorCode::E200)
                .with_label(span, "out of range")
                .with_help(format!("choose a track between 0 and {max}")),
            TrackError::InvalidMaxTrack { .. } => Self::error(err.to_string())
                .with_code(ErrorCode::E201)
                .with_label(span, ErrorCode::E201.description()),
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
