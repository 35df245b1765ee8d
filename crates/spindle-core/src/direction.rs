//! Initial sweep direction for the SCAN family of algorithms.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;

/// The initial traversal bias of the head.
///
/// Only SCAN, C-SCAN, LOOK and C-LOOK consult the direction. The names match
/// external configuration strings (`toward-zero`, `toward-max`); the legacy
/// spellings `left` and `right` are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    /// Sweep toward track 0 first.
    TowardZero,
    /// Sweep toward the maximum track first (default)
    #[default]
    TowardMax,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "toward-zero" | "left" => Ok(Self::TowardZero),
            "toward-max" | "right" => Ok(Self::TowardMax),
            _ => Err("Unsupported direction, expected `toward-zero` or `toward-max`"),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TowardZero => "toward-zero",
            Direction::TowardMax => "toward-max",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
