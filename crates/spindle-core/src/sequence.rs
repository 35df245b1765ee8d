//! Visit sequences produced by the ordering algorithms.

use std::fmt;

use crate::track::Track;

/// The ordered list of tracks visited by the head during one run.
///
/// A sequence always starts at the head position, so it is never empty. It
/// may contain boundary tracks that were visited without servicing a request
/// (SCAN and C-SCAN insert them when reversing or wrapping).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    tracks: Vec<Track>,
}

impl Sequence {
    /// Create a sequence starting at `head` followed by `visits`.
    pub fn new(head: Track, visits: impl IntoIterator<Item = Track>) -> Self {
        let mut tracks = vec![head];
        tracks.extend(visits);
        Self { tracks }
    }

    /// Returns the starting head position.
    pub fn head(&self) -> Track {
        self.tracks[0]
    }

    /// Returns every visited track, head first.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Returns the tracks visited after leaving the head.
    pub fn visits(&self) -> &[Track] {
        &self.tracks[1..]
    }

    /// Number of tracks in the sequence, head included.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always `false`; a sequence contains at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over consecutive `(from, to)` head movements.
    pub fn hops(&self) -> impl Iterator<Item = (Track, Track)> + '_ {
        self.tracks.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{track}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(values: &[u32]) -> Vec<Track> {
        values.iter().copied().map(Track::new).collect()
    }

    #[test]
    fn test_singleton_sequence() {
        let sequence = Sequence::new(Track::new(50), []);

        assert_eq!(sequence.head(), Track::new(50));
        assert_eq!(sequence.len(), 1);
        assert!(sequence.visits().is_empty());
        assert_eq!(sequence.hops().count(), 0);
    }

    #[test]
    fn test_hops_pair_consecutive_tracks() {
        let sequence = Sequence::new(Track::new(53), tracks(&[65, 67, 37]));

        let hops: Vec<_> = sequence
            .hops()
            .map(|(from, to)| (from.value(), to.value()))
            .collect();
        assert_eq!(hops, vec![(53, 65), (65, 67), (67, 37)]);
    }

    #[test]
    fn test_display() {
        let sequence = Sequence::new(Track::new(1), tracks(&[2, 3]));
        assert_eq!(sequence.to_string(), "1 -> 2 -> 3");
    }
}
