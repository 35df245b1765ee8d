//! Frame-by-frame playback of a visit sequence.
//!
//! An [`Animation`] lazily walks a [`Sequence`], yielding one [`Frame`] per
//! visited track together with the seek distance accumulated so far. It holds
//! no timing of its own; wrap it with [`Pace::paced`] to insert a delay
//! between frames.
//!
//! # Example
//!
//! ```
//! use spindle::animation::Animation;
//! use spindle::{algorithm::Algorithm, direction::Direction, workload::Workload};
//!
//! let workload = Workload::from_raw(199, 53, Direction::TowardMax, [98, 37]).unwrap();
//! let run = Algorithm::Fcfs.run(&workload);
//!
//! let messages: Vec<String> = Animation::new(run.sequence())
//!     .map(|frame| frame.to_string())
//!     .collect();
//! assert_eq!(messages, ["Starting at 53", "Moving 53 → 98", "Moving 98 → 37"]);
//! ```

use std::{fmt, thread, time::Duration};

use spindle_core::{sequence::Sequence, track::Track};

/// One step of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    index: usize,
    from: Option<Track>,
    to: Track,
    running_seek: u64,
    visited: &'a [Track],
}

impl<'a> Frame<'a> {
    /// Position of the frame; `0` is the starting frame.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The track the head moves away from, `None` for the starting frame.
    pub fn previous(&self) -> Option<Track> {
        self.from
    }

    /// The track the head arrives at.
    pub fn current(&self) -> Track {
        self.to
    }

    /// Seek distance of this frame's hop.
    pub fn seek(&self) -> u64 {
        self.from.map_or(0, |from| from.distance(self.to))
    }

    /// Total seek distance up to and including this frame.
    pub fn running_seek(&self) -> u64 {
        self.running_seek
    }

    /// Every track visited so far, ending with [`Frame::current`].
    pub fn visited(&self) -> &'a [Track] {
        self.visited
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            None => write!(f, "Starting at {}", self.to),
            Some(from) => write!(f, "Moving {from} → {}", self.to),
        }
    }
}

/// A cancellable, restartable iterator of [`Frame`]s over a sequence.
#[derive(Debug, Clone)]
pub struct Animation<'a> {
    tracks: &'a [Track],
    next: usize,
    running_seek: u64,
    cancelled: bool,
}

impl<'a> Animation<'a> {
    pub fn new(sequence: &'a Sequence) -> Self {
        Self {
            tracks: sequence.tracks(),
            next: 0,
            running_seek: 0,
            cancelled: false,
        }
    }

    /// Stop the animation; every later call to `next` returns `None`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Rewind to the first frame, clearing a cancellation.
    pub fn restart(&mut self) {
        self.next = 0;
        self.running_seek = 0;
        self.cancelled = false;
    }

    /// Returns `true` once every frame has been yielded.
    pub fn is_finished(&self) -> bool {
        self.next >= self.tracks.len()
    }
}

impl<'a> Iterator for Animation<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancelled {
            return None;
        }
        let tracks = self.tracks;
        let index = self.next;
        let to = *tracks.get(index)?;
        let from = index
            .checked_sub(1)
            .and_then(|previous| tracks.get(previous))
            .copied();

        self.running_seek += from.map_or(0, |from| from.distance(to));
        self.next += 1;

        Some(Frame {
            index,
            from,
            to,
            running_seek: self.running_seek,
            visited: &tracks[..=index],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.cancelled {
            0
        } else {
            self.tracks.len().saturating_sub(self.next)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Animation<'_> {}

/// Iterator adapter that waits `delay` between consecutive items.
///
/// Nothing waits before the first item or after the last one, and a zero
/// delay never sleeps.
pub struct Paced<I, S = fn(Duration)> {
    inner: I,
    delay: Duration,
    sleep: S,
    started: bool,
}

impl<I, S> Paced<I, S>
where
    I: Iterator,
    S: FnMut(Duration),
{
    /// Pace `inner` with a custom sleep function.
    pub fn with_sleeper(inner: I, delay: Duration, sleep: S) -> Self {
        Self {
            inner,
            delay,
            sleep,
            started: false,
        }
    }
}

impl<I, S> Iterator for Paced<I, S>
where
    I: Iterator,
    S: FnMut(Duration),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if self.started && !self.delay.is_zero() {
            (self.sleep)(self.delay);
        }
        self.started = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension for pacing any iterator with a real sleep.
pub trait Pace: Iterator + Sized {
    fn paced(self, delay: Duration) -> Paced<Self> {
        Paced::with_sleeper(self, delay, thread::sleep as fn(Duration))
    }
}

impl<I: Iterator> Pace for I {}

#[cfg(test)]
mod tests {
    use super::*;

    use spindle_core::{algorithm::Algorithm, direction::Direction, workload::Workload};

    fn scan_sequence() -> Sequence {
        let workload =
            Workload::from_raw(199, 53, Direction::TowardMax, [98, 183, 37, 122, 14, 124, 65, 67])
                .unwrap();
        Algorithm::Scan.order(&workload)
    }

    #[test]
    fn test_frames_cover_sequence() {
        let sequence = scan_sequence();
        let frames: Vec<Frame<'_>> = Animation::new(&sequence).collect();

        assert_eq!(frames.len(), sequence.len());
        assert_eq!(frames[0].previous(), None);
        assert_eq!(frames[0].running_seek(), 0);
        assert_eq!(frames[1].to_string(), "Moving 53 → 65");
        assert_eq!(frames[1].seek(), 12);

        let last = frames.last().unwrap();
        assert_eq!(last.running_seek(), 331);
        assert_eq!(last.visited(), sequence.tracks());
    }

    #[test]
    fn test_visited_prefix_grows() {
        let sequence = scan_sequence();
        for frame in Animation::new(&sequence) {
            assert_eq!(frame.visited().len(), frame.index() + 1);
            assert_eq!(frame.visited().last(), Some(&frame.current()));
        }
    }

    #[test]
    fn test_single_frame_for_empty_workload() {
        let sequence = Sequence::new(Track::new(50), []);
        let frames: Vec<_> = Animation::new(&sequence).collect();

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].to_string(), "Starting at 50");
    }

    #[test]
    fn test_cancel_and_restart() {
        let sequence = scan_sequence();
        let mut animation = Animation::new(&sequence);

        assert!(animation.next().is_some());
        assert!(animation.next().is_some());
        animation.cancel();
        assert!(animation.next().is_none());
        assert_eq!(animation.len(), 0);

        animation.restart();
        assert_eq!(animation.len(), sequence.len());
        let first = animation.next().unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(first.running_seek(), 0);
    }

    #[test]
    fn test_paced_sleeps_between_frames_only() {
        let sequence = scan_sequence();
        let mut sleeps = Vec::new();

        let count = Paced::with_sleeper(
            Animation::new(&sequence),
            Duration::from_millis(200),
            |delay| sleeps.push(delay),
        )
        .count();

        assert_eq!(count, sequence.len());
        assert_eq!(sleeps.len(), sequence.len() - 1);
        assert!(sleeps.iter().all(|delay| *delay == Duration::from_millis(200)));
    }

    #[test]
    fn test_zero_delay_never_sleeps() {
        let sequence = scan_sequence();
        let mut sleeps = 0;

        Paced::with_sleeper(Animation::new(&sequence), Duration::ZERO, |_| sleeps += 1)
            .for_each(drop);

        assert_eq!(sleeps, 0);
    }

    #[test]
    fn test_paced_real_sleep_with_zero_delay() {
        let sequence = scan_sequence();
        assert_eq!(Animation::new(&sequence).paced(Duration::ZERO).count(), sequence.len());
    }
}
