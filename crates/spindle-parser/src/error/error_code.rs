//! Error codes for the Spindle diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Field errors (shape of the input)
//! - `E2xx` - Range errors (values outside the track space)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unreadable input.
    ///
    /// The input could not be split into fields.
    E001,

    // =========================================================================
    // Field Errors (E1xx)
    // =========================================================================
    /// Not a number.
    ///
    /// A field is not a plain decimal integer.
    E100,

    /// Missing value.
    ///
    /// A required field is empty.
    E101,

    /// Too many values.
    ///
    /// More than one value was given where a single track was expected.
    E102,

    /// Request count mismatch.
    ///
    /// The number of requests differs from the declared request count.
    E103,

    // =========================================================================
    // Range Errors (E2xx)
    // =========================================================================
    /// Track out of range.
    ///
    /// A head position or request lies outside `[0, max_track]`.
    E200,

    /// Invalid max track.
    ///
    /// The maximum track is negative, too large, or not a number.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unreadable input",
            ErrorCode::E100 => "not a number",
            ErrorCode::E101 => "missing value",
            ErrorCode::E102 => "too many values",
            ErrorCode::E103 => "request count mismatch",
            ErrorCode::E200 => "track out of range",
            ErrorCode::E201 => "invalid max track",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for code in [ErrorCode::E001, ErrorCode::E100, ErrorCode::E200] {
            assert_eq!(code.to_string(), code.as_str());
        }
    }
}
