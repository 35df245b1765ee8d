//! Track addressing and validation.
//!
//! A [`Track`] is a position on the simulated medium. A [`TrackSpace`] is the
//! closed domain `[0, max]` that every head position and request of a run
//! must lie in. Validation failures are reported as [`TrackError`].
//!
//! # Example
//!
//! ```
//! use spindle_core::track::{TrackError, TrackSpace};
//!
//! let space = TrackSpace::new(199);
//!
//! assert_eq!(space.parse_track("53").map(|t| t.value()), Ok(53));
//! assert!(matches!(space.parse_track("200"), Err(TrackError::OutOfRange { .. })));
//! assert!(matches!(space.parse_track("abc"), Err(TrackError::NotANumber { .. })));
//! ```

use std::{fmt, num::IntErrorKind};

use thiserror::Error;

/// Errors produced while validating tracks against a [`TrackSpace`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The text could not be read as an integer.
    #[error("`{text}` is not a number")]
    NotANumber { text: String },

    /// The value lies outside `[0, max]`.
    #[error("track {value} is outside the valid range 0..={max}")]
    OutOfRange { value: i64, max: u32 },

    /// The maximum track is negative, too large, or not a number.
    #[error("max track `{text}` must be a non-negative integer no greater than {}", u32::MAX)]
    InvalidMaxTrack { text: String },
}

/// A position on the simulated storage medium.
///
/// A `Track` on its own carries no bound; it is only meaningful relative to
/// the [`TrackSpace`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Track(u32);

impl Track {
    /// The lowest track of every space.
    pub const ZERO: Track = Track(0);

    /// Create a track from its raw index.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw track index.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the seek distance between two tracks.
    pub fn distance(self, other: Track) -> u64 {
        u64::from(self.0.abs_diff(other.0))
    }
}

impl From<u32> for Track {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed track domain `[0, max]` of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackSpace {
    max: Track,
}

impl TrackSpace {
    /// Create a space spanning `[0, max]`.
    pub fn new(max: u32) -> Self {
        Self { max: Track(max) }
    }

    /// Create a space from an untyped maximum.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidMaxTrack`] for negative values and for
    /// values that do not fit a track index.
    pub fn from_raw(max: i64) -> Result<Self, TrackError> {
        u32::try_from(max)
            .map(Self::new)
            .map_err(|_| TrackError::InvalidMaxTrack {
                text: max.to_string(),
            })
    }

    /// Parse the textual maximum track of a run.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidMaxTrack`] when `text` is not a
    /// non-negative integer.
    pub fn parse_max(text: &str) -> Result<Self, TrackError> {
        let trimmed = text.trim();
        trimmed
            .parse::<u32>()
            .map(Self::new)
            .map_err(|_| TrackError::InvalidMaxTrack {
                text: trimmed.to_string(),
            })
    }

    /// The lowest boundary track.
    pub fn min_track(&self) -> Track {
        Track::ZERO
    }

    /// The highest boundary track.
    pub fn max_track(&self) -> Track {
        self.max
    }

    /// Returns `true` if `track` lies inside the space.
    pub fn contains(&self, track: Track) -> bool {
        track <= self.max
    }

    /// Validate an untyped value against the space.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::OutOfRange`] if `value` is negative or above the
    /// maximum track.
    pub fn track(&self, value: i64) -> Result<Track, TrackError> {
        u32::try_from(value)
            .ok()
            .map(Track)
            .filter(|track| self.contains(*track))
            .ok_or(TrackError::OutOfRange {
                value,
                max: self.max.0,
            })
    }

    /// Validate a track that already carries a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::OutOfRange`] if `track` exceeds the maximum.
    pub fn check(&self, track: Track) -> Result<Track, TrackError> {
        self.track(i64::from(track.0))
    }

    /// Parse and validate a textual track.
    ///
    /// Only plain decimal integers (with an optional sign) are accepted;
    /// fractional or suffixed input such as `12.5` or `7k` is not a number.
    /// Integers too large to represent are reported as out of range.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotANumber`] or [`TrackError::OutOfRange`].
    pub fn parse_track(&self, text: &str) -> Result<Track, TrackError> {
        let trimmed = text.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    return Err(TrackError::NotANumber {
                        text: trimmed.to_string(),
                    });
                }
            },
        };
        self.track(value)
    }
}

impl fmt::Display for TrackSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0..={}", self.max)
    }
}
