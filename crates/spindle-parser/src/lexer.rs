//! Lexical analyzer for textual track input.
//!
//! Input is a flat list of values separated by commas, semicolons or
//! whitespace. The lexer splits it into [`Field`]s carrying their source
//! spans so later stages can point diagnostics at the offending text.
//!
//! The public entry point is [`tokenize`], which recovers from unexpected
//! characters and reports all of them in a single pass.

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::take_while,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// A raw value as written in the source, before any numeric validation.
pub type Field<'a> = Spanned<&'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Value(&'a str),
    Separator,
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

fn is_value_char(c: char) -> bool {
    !is_separator(c) && !c.is_control()
}

/// Parse a run of separators
fn separator<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_separator)
        .value(Token::Separator)
        .parse_next(input)
}

/// Parse a single value up to the next separator
fn value<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_value_char)
        .map(Token::Value)
        .parse_next(input)
}

fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<(Token<'a>, Span)> {
    let start_pos = input.current_token_start();
    let token = alt((separator, value)).parse_next(input)?;
    let end_pos = input.current_token_start();

    Ok((token, Span::new(start_pos..end_pos)))
}

/// Lexer that accumulates fields and diagnostics during tokenization.
struct Lexer<'a> {
    fields: Vec<Field<'a>>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Lexer<'a> {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            match positioned_token(&mut input) {
                Ok((Token::Value(text), span)) => self.fields.push(Spanned::new(text, span)),
                Ok((Token::Separator, _)) => {}
                Err(_) => {
                    let error_pos = input.current_token_start();
                    let width = input.next_token().map_or(1, char::len_utf8);
                    let span = Span::new(error_pos..error_pos + width);

                    self.diagnostics.emit(
                        Diagnostic::error("unexpected control character")
                            .with_code(ErrorCode::E001)
                            .with_label(span, ErrorCode::E001.description())
                            .with_help("separate values with commas, semicolons or spaces"),
                    );
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<Field<'a>>, ParseError> {
        self.diagnostics.finish().map(|()| self.fields)
    }
}

/// Split textual input into its fields.
///
/// # Returns
///
/// - `Ok(fields)` - Every value in source order; empty for blank input
/// - `Err(ParseError)` - The input contains characters that cannot appear
///   in a value; contains one diagnostic per such character
pub fn tokenize(input: &str) -> Result<Vec<Field<'_>>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(fields: &[Field<'a>]) -> Vec<&'a str> {
        fields.iter().map(|field| *field.value()).collect()
    }

    #[test]
    fn test_mixed_separators() {
        let fields = tokenize("98, 183;37\t122\n14 ,, 124").unwrap();
        assert_eq!(texts(&fields), ["98", "183", "37", "122", "14", "124"]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "  12,abc ; 7";
        let fields = tokenize(source).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].span(), Span::new(2..4));
        assert_eq!(fields[1].span(), Span::new(5..8));
        assert_eq!(fields[2].span(), Span::new(11..12));
        for field in &fields {
            let span = field.span();
            assert_eq!(&source[span.start()..span.end()], *field.value());
        }
    }

    #[test]
    fn test_blank_input_has_no_fields() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" , ;\n").unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_values_are_still_fields() {
        let fields = tokenize("12.5 -3 x").unwrap();
        assert_eq!(texts(&fields), ["12.5", "-3", "x"]);
    }

    #[test]
    fn test_control_characters_are_reported() {
        let err = tokenize("1\u{0}2, 3\u{7}").unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        for diag in err.diagnostics() {
            assert_eq!(diag.code(), Some(ErrorCode::E001));
        }
        assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(1..2));
        assert_eq!(err.diagnostics()[1].labels()[0].span(), Span::new(6..7));
    }
}
