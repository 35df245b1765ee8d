//! Validated scheduling problems.
//!
//! A [`Workload`] bundles everything an ordering algorithm needs: the track
//! space, the head position, the sweep direction and the pending requests.
//! Construction validates every track up front and fails as a whole, so an
//! algorithm never sees an out-of-range value and a bad request never
//! produces a partial result.

use log::debug;

use crate::{
    direction::Direction,
    track::{Track, TrackError, TrackSpace},
};

/// A validated set of inputs for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    space: TrackSpace,
    head: Track,
    direction: Direction,
    requests: Vec<Track>,
}

impl Workload {
    /// Create a workload from typed tracks.
    ///
    /// # Arguments
    ///
    /// * `space` - The track domain of the run.
    /// * `head` - Starting head position.
    /// * `direction` - Initial sweep direction for the SCAN family.
    /// * `requests` - Pending requests in arrival order. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns the first [`TrackError::OutOfRange`] found, checking the head
    /// before the requests.
    pub fn new(
        space: TrackSpace,
        head: Track,
        direction: Direction,
        requests: Vec<Track>,
    ) -> Result<Self, TrackError> {
        space.check(head)?;
        for request in &requests {
            space.check(*request)?;
        }

        debug!(
            max_track = space.max_track().value(),
            head = head.value(),
            direction:% = direction,
            request_count = requests.len();
            "Workload validated"
        );

        Ok(Self {
            space,
            head,
            direction,
            requests,
        })
    }

    /// Create a workload from untyped integers.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidMaxTrack`] for a negative maximum and
    /// [`TrackError::OutOfRange`] for the first head or request outside the
    /// space.
    pub fn from_raw(
        max_track: i64,
        head: i64,
        direction: Direction,
        requests: impl IntoIterator<Item = i64>,
    ) -> Result<Self, TrackError> {
        let space = TrackSpace::from_raw(max_track)?;
        let head = space.track(head)?;
        let requests = requests
            .into_iter()
            .map(|value| space.track(value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(space, head, direction, requests)
    }

    /// Returns the track domain.
    pub fn space(&self) -> TrackSpace {
        self.space
    }

    /// Returns the starting head position.
    pub fn head(&self) -> Track {
        self.head
    }

    /// Returns the sweep direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the pending requests in arrival order.
    pub fn requests(&self) -> &[Track] {
        &self.requests
    }

    /// Returns `true` if there are no pending requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns a copy of this workload sweeping in `direction`.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
