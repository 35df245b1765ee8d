//! # Spindle Parser
//!
//! Turns the raw textual inputs of a scheduling run (head position, maximum
//! track and the request list) into validated [`spindle_core`] values.
//!
//! Every invalid field of an input is reported as its own [`Diagnostic`]
//! with a span into the source text. A parse that reports anything returns
//! no values at all.
//!
//! ## Usage
//!
//! ```
//! # use spindle_parser::{parse_max_track, parse_requests, parse_track, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let space = parse_max_track("199")?;
//!     let head = parse_track("53", space)?;
//!     let requests = parse_requests("98, 183, 37, 122", space, None)?;
//!
//!     assert_eq!(head.value(), 53);
//!     assert_eq!(requests.len(), 4);
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod span;

pub use error::{Diagnostic, ParseError};
pub use span::{Span, Spanned};

use log::debug;

use spindle_core::track::{Track, TrackSpace};

use error::{DiagnosticCollector, ErrorCode};
use lexer::Field;

/// Parse the maximum track of a run.
///
/// The input must hold exactly one non-negative integer.
///
/// # Errors
///
/// Returns a [`ParseError`] with `E101` for blank input, `E102` when more
/// than one value is given and `E201` when the value is not a valid maximum.
pub fn parse_max_track(source: &str) -> Result<TrackSpace, ParseError> {
    let field = single_field(source, "max track")?;
    let space = TrackSpace::parse_max(field.value()).map_err(|err| {
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E201)
            .with_label(field.span(), ErrorCode::E201.description())
            .with_help("the max track is a whole number such as 199")
    })?;

    debug!(max_track = space.max_track().value(); "Parsed max track");
    Ok(space)
}

/// Parse a single track, such as the head position, inside `space`.
///
/// # Errors
///
/// Returns a [`ParseError`] with `E101` for blank input, `E102` when more
/// than one value is given, `E100` when the value is not a number and `E200`
/// when it lies outside `space`.
pub fn parse_track(source: &str, space: TrackSpace) -> Result<Track, ParseError> {
    let field = single_field(source, "track")?;
    let track = space
        .parse_track(field.value())
        .map_err(|err| Diagnostic::from_track_error(&err, field.span(), space))?;

    debug!(track = track.value(); "Parsed track");
    Ok(track)
}

/// Parse a request list inside `space`.
///
/// Requests are separated by commas, semicolons or whitespace and keep their
/// input order. Blank input is an empty request list. When `expected_count`
/// is given the number of requests must match it.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per invalid request
/// (`E100`/`E200`), plus `E103` on a count mismatch. No request is returned
/// if any diagnostic was reported.
pub fn parse_requests(
    source: &str,
    space: TrackSpace,
    expected_count: Option<usize>,
) -> Result<Vec<Track>, ParseError> {
    let fields = lexer::tokenize(source)?;
    let mut diagnostics = DiagnosticCollector::new();

    let mut tracks = Vec::with_capacity(fields.len());
    for field in &fields {
        match space.parse_track(field.value()) {
            Ok(track) => tracks.push(track),
            Err(err) => diagnostics.emit(Diagnostic::from_track_error(&err, field.span(), space)),
        }
    }

    if let Some(expected) = expected_count.filter(|expected| *expected != fields.len()) {
        diagnostics.emit(count_mismatch(source, &fields, expected));
    }

    diagnostics.finish()?;

    debug!(count = tracks.len(), space:% = space; "Parsed requests");
    Ok(tracks)
}

/// Require exactly one field in `source`.
fn single_field<'a>(source: &'a str, what: &str) -> Result<Field<'a>, ParseError> {
    let mut fields = lexer::tokenize(source)?;

    match fields.len() {
        0 => Err(Diagnostic::error(format!("missing {what}"))
            .with_code(ErrorCode::E101)
            .with_label(Span::new(0..source.len()), ErrorCode::E101.description())
            .with_help(format!("enter a single {what}"))
            .into()),
        1 => Ok(fields.remove(0)),
        found => {
            let mut diag = Diagnostic::error(format!(
                "expected a single {what}, found {found} values"
            ))
            .with_code(ErrorCode::E102)
            .with_label(fields[0].span(), format!("{what} given here"));
            for extra in &fields[1..] {
                diag = diag.with_secondary_label(extra.span(), "extra value");
            }
            Err(diag.with_help(format!("enter a single {what}")).into())
        }
    }
}

fn count_mismatch(source: &str, fields: &[Field<'_>], expected: usize) -> Diagnostic {
    let found = fields.len();
    let span = match (fields.first(), fields.last()) {
        (Some(first), Some(last)) => first.span().union(last.span()),
        _ => Span::new(0..source.len()),
    };

    Diagnostic::error(format!("expected {expected} requests, found {found}"))
        .with_code(ErrorCode::E103)
        .with_label(span, ErrorCode::E103.description())
        .with_help(format!("enter exactly {expected} requests or change the request count"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> TrackSpace {
        TrackSpace::new(199)
    }

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics()
            .iter()
            .filter_map(Diagnostic::code)
            .collect()
    }

    #[test]
    fn test_parse_requests_keeps_order_and_duplicates() {
        let tracks = parse_requests("98 183 37 98", space(), None).unwrap();
        let values: Vec<u32> = tracks.iter().map(|t| t.value()).collect();

        assert_eq!(values, [98, 183, 37, 98]);
    }

    #[test]
    fn test_parse_requests_blank_is_empty() {
        assert!(parse_requests("  ", space(), None).unwrap().is_empty());
    }

    #[test]
    fn test_parse_requests_reports_every_bad_field() {
        let err = parse_requests("98, abc, 250, 37, 12.5, -1", space(), None).unwrap_err();

        assert_eq!(
            codes(&err),
            [ErrorCode::E100, ErrorCode::E200, ErrorCode::E100, ErrorCode::E200]
        );
    }

    #[test]
    fn test_parse_requests_label_points_at_field() {
        let source = "98, 250, 37";
        let err = parse_requests(source, space(), None).unwrap_err();
        let span = err.diagnostics()[0].labels()[0].span();

        assert_eq!(&source[span.start()..span.end()], "250");
    }

    #[test]
    fn test_parse_requests_count_mismatch() {
        let err = parse_requests("1, 2, 3", space(), Some(4)).unwrap_err();
        assert_eq!(codes(&err), [ErrorCode::E103]);
        assert_eq!(err.diagnostics()[0].message(), "expected 4 requests, found 3");

        assert!(parse_requests("1, 2, 3", space(), Some(3)).is_ok());
    }

    #[test]
    fn test_parse_requests_empty_count_mismatch_spans_input() {
        let err = parse_requests("", space(), Some(2)).unwrap_err();
        assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(0..0));
    }

    #[test]
    fn test_parse_track() {
        assert_eq!(parse_track(" 53 ", space()).unwrap(), Track::new(53));

        let err = parse_track("200", space()).unwrap_err();
        assert_eq!(codes(&err), [ErrorCode::E200]);
        assert_eq!(
            err.diagnostics()[0].help(),
            Some("choose a track between 0 and 199")
        );
    }

    #[test]
    fn test_parse_track_missing() {
        let err = parse_track("", space()).unwrap_err();
        assert_eq!(codes(&err), [ErrorCode::E101]);
    }

    #[test]
    fn test_parse_track_multiple_values() {
        let err = parse_track("53 54 55", space()).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels().len(), 3);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1..].iter().all(|label| !label.is_primary()));
    }

    #[test]
    fn test_parse_max_track() {
        assert_eq!(parse_max_track("199").unwrap(), TrackSpace::new(199));
        assert_eq!(parse_max_track("0").unwrap(), TrackSpace::new(0));

        let err = parse_max_track("-5").unwrap_err();
        assert_eq!(codes(&err), [ErrorCode::E201]);

        let err = parse_max_track("big").unwrap_err();
        assert_eq!(codes(&err), [ErrorCode::E201]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn separator_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![",", ", ", ";", " ", "\t", "\n", " ; "])
    }

    fn requests_strategy() -> impl Strategy<Value = (u32, Vec<u32>, Vec<&'static str>)> {
        (0u32..500).prop_flat_map(|max| {
            let values = prop::collection::vec(0..=max, 0..20);
            let separators = prop::collection::vec(separator_strategy(), 20);
            (Just(max), values, separators)
        })
    }

    fn join(values: &[u32], separators: &[&str]) -> String {
        let mut source = String::new();
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                source.push_str(separators[index % separators.len()]);
            }
            source.push_str(&value.to_string());
        }
        source
    }

    fn check_valid_input_round_trips(max: u32, values: &[u32], separators: &[&str]) {
        let source = join(values, separators);
        let tracks = parse_requests(&source, TrackSpace::new(max), Some(values.len()))
            .expect("every value is in range");
        let parsed: Vec<u32> = tracks.iter().map(|t| t.value()).collect();

        assert_eq!(parsed, values);
    }

    fn check_one_diagnostic_per_bad_field(max: u32, values: &[u32], separators: &[&str]) {
        let mut out_of_range = values.to_vec();
        let bad = out_of_range.len().div_ceil(2);
        for value in out_of_range.iter_mut().take(bad) {
            *value = max + 1 + *value;
        }
        let source = join(&out_of_range, separators);

        match parse_requests(&source, TrackSpace::new(max), None) {
            Ok(tracks) => assert_eq!(bad, 0, "accepted {tracks:?}"),
            Err(err) => {
                assert_eq!(err.diagnostics().len(), bad);
                for diag in err.diagnostics() {
                    assert_eq!(diag.code(), Some(ErrorCode::E200));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn valid_input_round_trips((max, values, separators) in requests_strategy()) {
            check_valid_input_round_trips(max, &values, &separators);
        }

        #[test]
        fn one_diagnostic_per_bad_field((max, values, separators) in requests_strategy()) {
            check_one_diagnostic_per_bad_field(max, &values, &separators);
        }
    }
}
