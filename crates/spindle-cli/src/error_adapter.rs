//! Conversion of [`SpindleError`] into miette reports.
//!
//! A rejected input field yields one [`ErrorReport`] per diagnostic. Each of
//! them is rendered against the text of that field, names the field both in
//! its code (`spindle::requests::E200`) and as the title of the source
//! snippet, and ends with a hint on what the field accepts. Every other
//! error becomes a single report without source.

use std::{error::Error, fmt};

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};

use spindle::{SpindleError, track::TrackError};
use spindle_parser::{Diagnostic as ParseDiagnostic, Span};

const CONFIG_HELP: &str = "check the configuration file or pass a different one with --config";

/// A fully resolved error, ready for [`miette::GraphicalReportHandler`].
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
    code: String,
    help: Option<String>,
    source: Option<NamedSource<String>>,
    labels: Vec<LabeledSpan>,
}

impl ErrorReport {
    /// Report one diagnostic of the input `field` whose text is `src`.
    fn for_field(field: &str, src: &str, diag: &ParseDiagnostic) -> Self {
        let scope = field.replace(' ', "_");
        let code = match diag.code() {
            Some(code) => format!("spindle::{scope}::{code}"),
            None => format!("spindle::{scope}"),
        };
        // Without a dedicated hint the code description still says what went wrong.
        let help = diag
            .help()
            .map(str::to_string)
            .or_else(|| diag.code().map(|code| code.description().to_string()));
        let labels = diag
            .labels()
            .iter()
            .map(|label| {
                let span = source_span(label.span());
                let message = Some(label.message().to_string());
                if label.is_primary() {
                    LabeledSpan::new_primary_with_span(message, span)
                } else {
                    LabeledSpan::new_with_span(message, span)
                }
            })
            .collect();

        Self {
            message: format!("invalid {field}: {}", diag.message()),
            code,
            help,
            source: Some(NamedSource::new(field, src.to_string())),
            labels,
        }
    }

    /// Report an error that carries no input text.
    fn for_error(err: &SpindleError) -> Self {
        let (code, help) = match err {
            SpindleError::Io(_) => ("spindle::io", None),
            SpindleError::Parse { .. } => ("spindle::parse", None),
            SpindleError::Track(TrackError::OutOfRange { max, .. }) => (
                "spindle::track",
                Some(format!("tracks lie between 0 and {max}")),
            ),
            SpindleError::Track(_) => ("spindle::track", None),
            SpindleError::Config(_) => ("spindle::config", Some(CONFIG_HELP.to_string())),
            SpindleError::Export(_) => ("spindle::export", None),
        };

        Self {
            message: err.to_string(),
            code: code.to_string(),
            help,
            source: None,
            labels: Vec::new(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ErrorReport {}

impl Diagnostic for ErrorReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.source.as_ref().map(|source| source as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            return None;
        }
        Some(Box::new(self.labels.iter().cloned()))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split `err` into the reports to print, one per parser diagnostic.
pub fn reports(err: &SpindleError) -> Vec<ErrorReport> {
    match err {
        SpindleError::Parse { field, err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| ErrorReport::for_field(field, src, diag))
            .collect(),
        _ => vec![ErrorReport::for_error(err)],
    }
}
