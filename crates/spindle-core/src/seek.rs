//! Seek distance metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total | Sum of `|s[i] - s[i-1]|` over the sequence |
//! | Steps | Number of head movements, `len - 1` |
//! | Average | `total / steps`, or `0.0` when there are no steps |
//!
//! A sequence holding only the head position (no requests) is a valid,
//! degenerate run: total and step count are zero and the average is defined
//! as `0.0` rather than left undefined.

use std::fmt;

use crate::sequence::Sequence;

/// Head movement totals for one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeekMetric {
    total: u64,
    step_count: usize,
}

impl SeekMetric {
    /// Computes the metric for a visit sequence.
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let total = sequence.hops().map(|(from, to)| from.distance(to)).sum();
        Self {
            total,
            step_count: sequence.len() - 1,
        }
    }

    /// Total seek distance in tracks.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of head movements, boundary visits included.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Mean seek distance per movement; `0.0` for a run without movements.
    pub fn average(&self) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }
        self.total as f64 / self.step_count as f64
    }
}

impl fmt::Display for SeekMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {} over {} steps (average {:.2})",
            self.total,
            self.step_count,
            self.average()
        )
    }
}
