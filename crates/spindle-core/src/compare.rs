//! Running every algorithm on one workload and ranking the results.
//!
//! [`compare_all`] evaluates the six algorithms against identical inputs
//! and selects the one with the smallest total seek distance. Ties go to the
//! algorithm that comes first in [`Algorithm::ALL`].
//!
//! # Example
//!
//! ```
//! use spindle_core::{
//!     algorithm::Algorithm, compare::compare_all, direction::Direction, workload::Workload,
//! };
//!
//! let workload = Workload::from_raw(
//!     199,
//!     53,
//!     Direction::TowardMax,
//!     [98, 183, 37, 122, 14, 124, 65, 67],
//! )
//! .expect("valid workload");
//!
//! let comparison = compare_all(&workload);
//! assert_eq!(comparison.best(), Algorithm::Sstf);
//! assert_eq!(comparison.totals()[&Algorithm::Fcfs], 640);
//! ```

use indexmap::IndexMap;
use log::debug;

use crate::{algorithm::Algorithm, seek::SeekMetric, sequence::Sequence, workload::Workload};

/// The outcome of one algorithm on one workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    algorithm: Algorithm,
    sequence: Sequence,
    metric: SeekMetric,
}

impl Run {
    /// Bundle a computed sequence with its metric.
    pub fn new(algorithm: Algorithm, sequence: Sequence) -> Self {
        let metric = SeekMetric::from_sequence(&sequence);
        Self {
            algorithm,
            sequence,
            metric,
        }
    }

    /// The algorithm that produced this run.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The visited tracks, head first.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Seek totals of the sequence.
    pub fn metric(&self) -> SeekMetric {
        self.metric
    }
}

/// Results of every algorithm on a shared workload.
#[derive(Debug, Clone)]
pub struct Comparison {
    runs: IndexMap<Algorithm, Run>,
    best: Algorithm,
}

impl Comparison {
    /// The algorithm with the lowest total seek, first in enumeration order
    /// on ties.
    pub fn best(&self) -> Algorithm {
        self.best
    }

    /// The run of the best algorithm.
    pub fn best_run(&self) -> &Run {
        &self.runs[&self.best]
    }

    /// The run of a specific algorithm.
    pub fn get(&self, algorithm: Algorithm) -> &Run {
        &self.runs[&algorithm]
    }

    /// Iterate over all runs in enumeration order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.values()
    }

    /// Total seek distance per algorithm, in enumeration order.
    pub fn totals(&self) -> IndexMap<Algorithm, u64> {
        self.runs
            .iter()
            .map(|(algorithm, run)| (*algorithm, run.metric().total()))
            .collect()
    }

    /// Runs sorted by ascending total seek; equal totals keep enumeration order.
    pub fn ranking(&self) -> Vec<&Run> {
        let mut ranked: Vec<&Run> = self.runs.values().collect();
        ranked.sort_by_key(|run| run.metric().total());
        ranked
    }
}

/// Runs all six algorithms on `workload` and picks the best.
pub fn compare_all(workload: &Workload) -> Comparison {
    let runs: IndexMap<Algorithm, Run> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, algorithm.run(workload)))
        .collect();

    let mut best = Algorithm::ALL[0];
    for (algorithm, run) in &runs {
        if run.metric().total() < runs[&best].metric().total() {
            best = *algorithm;
        }
    }

    debug!(
        best:% = best,
        best_total = runs[&best].metric().total();
        "Comparison complete"
    );

    Comparison { runs, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn classic(direction: Direction) -> Workload {
        Workload::from_raw(199, 53, direction, [98, 183, 37, 122, 14, 124, 65, 67])
            .expect("valid workload")
    }

    #[test]
    fn test_classic_totals() {
        let totals = compare_all(&classic(Direction::TowardMax)).totals();

        let expected = [
            (Algorithm::Fcfs, 640),
            (Algorithm::Sstf, 236),
            (Algorithm::Scan, 331),
            (Algorithm::CScan, 382),
            (Algorithm::Look, 299),
            (Algorithm::CLook, 322),
        ];
        let actual: Vec<_> = totals.into_iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_best_is_minimum() {
        let comparison = compare_all(&classic(Direction::TowardMax));

        assert_eq!(comparison.best(), Algorithm::Sstf);
        let best_total = comparison.best_run().metric().total();
        assert!(comparison.runs().all(|run| run.metric().total() >= best_total));
    }

    #[test]
    fn test_tie_goes_to_first_in_enumeration() {
        // Every algorithm visits 60 then 70: all totals equal.
        let workload = Workload::from_raw(100, 50, Direction::TowardMax, [60, 70])
            .expect("valid workload");
        let comparison = compare_all(&workload);

        assert_eq!(comparison.best(), Algorithm::Fcfs);
    }

    #[test]
    fn test_ranking_keeps_enumeration_order_on_ties() {
        // FCFS, SSTF, LOOK and C-LOOK all total 30.
        let workload = Workload::from_raw(100, 50, Direction::TowardZero, [60, 40])
            .expect("valid workload");
        let comparison = compare_all(&workload);

        assert_eq!(comparison.get(Algorithm::Fcfs).metric().total(), 30);
        assert_eq!(comparison.get(Algorithm::Sstf).metric().total(), 30);
        assert_eq!(comparison.best(), Algorithm::Fcfs);

        let ranking: Vec<_> = comparison.ranking().iter().map(|r| r.algorithm()).collect();
        assert_eq!(ranking[0], Algorithm::Fcfs);
        assert_eq!(ranking[1], Algorithm::Sstf);
    }

    #[test]
    fn test_empty_workload_compares_to_zero() {
        let workload =
            Workload::from_raw(100, 50, Direction::TowardMax, []).expect("valid workload");
        let comparison = compare_all(&workload);

        assert!(comparison.runs().all(|run| run.metric().total() == 0));
        assert_eq!(comparison.best(), Algorithm::Fcfs);
    }
}
