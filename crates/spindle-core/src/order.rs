//! The six disk-head ordering algorithms.
//!
//! Every function maps a [`Workload`] to the [`Sequence`] of tracks the head
//! visits, starting at the head position. An empty request set always
//! yields the singleton sequence `[head]`.
//!
//! # SCAN family partitioning
//!
//! SCAN, C-SCAN, LOOK and C-LOOK split the requests around the head:
//!
//! ```text
//!   left = { r | r <  head }   (ascending)
//!  right = { r | r >= head }   (ascending)
//! ```
//!
//! A request equal to the head belongs to `right`. When sweeping toward the
//! maximum it is serviced first with a zero-length hop.
//!
//! # Boundary visits
//!
//! | Algorithm | Toward max | Toward zero |
//! |-----------|-----------|-------------|
//! | SCAN | right ↑, `max`, left ↓ | left ↓, `0`, right ↑ |
//! | C-SCAN | right ↑, `max`, `0`, left ↑ | left ↓, `0`, `max`, right ↓ |
//! | LOOK | right ↑, left ↓ | left ↓, right ↑ |
//! | C-LOOK | right ↑, left ↑ | left ↓, right ↓ |
//!
//! Boundary tracks are inserted only when requests remain on the far side.

use crate::{direction::Direction, sequence::Sequence, track::Track, workload::Workload};

/// Requests split around the head, both halves ascending.
struct Partition {
    left: Vec<Track>,
    right: Vec<Track>,
}

impl Partition {
    fn new(workload: &Workload) -> Self {
        let head = workload.head();
        let (mut left, mut right): (Vec<Track>, Vec<Track>) =
            workload.requests().iter().copied().partition(|track| *track < head);
        left.sort_unstable();
        right.sort_unstable();
        Self { left, right }
    }

    fn left_descending(&self) -> impl Iterator<Item = Track> + '_ {
        self.left.iter().rev().copied()
    }

    fn right_descending(&self) -> impl Iterator<Item = Track> + '_ {
        self.right.iter().rev().copied()
    }
}

/// First-Come-First-Served: requests in arrival order.
pub fn fcfs(workload: &Workload) -> Sequence {
    Sequence::new(workload.head(), workload.requests().iter().copied())
}

/// Shortest-Seek-Time-First: repeatedly the closest pending request.
///
/// The pending requests are stably re-sorted by distance before each pick,
/// so among equidistant requests the one the previous sort left first wins.
pub fn sstf(workload: &Workload) -> Sequence {
    let mut pending = workload.requests().to_vec();
    let mut current = workload.head();
    let mut visits = Vec::with_capacity(pending.len());

    while !pending.is_empty() {
        pending.sort_by_key(|track| track.distance(current));
        current = pending.remove(0);
        visits.push(current);
    }

    Sequence::new(workload.head(), visits)
}

/// SCAN (elevator): sweep to the boundary, then reverse.
pub fn scan(workload: &Workload) -> Sequence {
    let partition = Partition::new(workload);
    let (min, max) = (workload.space().min_track(), workload.space().max_track());
    let mut visits = Vec::with_capacity(workload.requests().len() + 1);

    match workload.direction() {
        Direction::TowardMax => {
            visits.extend(partition.right.iter().copied());
            if !partition.left.is_empty() {
                visits.push(max);
                visits.extend(partition.left_descending());
            }
        }
        Direction::TowardZero => {
            visits.extend(partition.left_descending());
            if !partition.right.is_empty() {
                visits.push(min);
                visits.extend(partition.right.iter().copied());
            }
        }
    }

    Sequence::new(workload.head(), visits)
}

/// Circular SCAN: sweep to the boundary, jump to the opposite boundary and
/// continue in the same direction.
pub fn c_scan(workload: &Workload) -> Sequence {
    let partition = Partition::new(workload);
    let (min, max) = (workload.space().min_track(), workload.space().max_track());
    let mut visits = Vec::with_capacity(workload.requests().len() + 2);

    match workload.direction() {
        Direction::TowardMax => {
            visits.extend(partition.right.iter().copied());
            if !partition.left.is_empty() {
                visits.extend([max, min]);
                visits.extend(partition.left.iter().copied());
            }
        }
        Direction::TowardZero => {
            visits.extend(partition.left_descending());
            if !partition.right.is_empty() {
                visits.extend([min, max]);
                visits.extend(partition.right_descending());
            }
        }
    }

    Sequence::new(workload.head(), visits)
}

/// LOOK: like SCAN, but reverses at the last request instead of the boundary.
pub fn look(workload: &Workload) -> Sequence {
    let partition = Partition::new(workload);
    let visits: Vec<Track> = match workload.direction() {
        Direction::TowardMax => partition
            .right
            .iter()
            .copied()
            .chain(partition.left_descending())
            .collect(),
        Direction::TowardZero => partition
            .left_descending()
            .chain(partition.right.iter().copied())
            .collect(),
    };

    Sequence::new(workload.head(), visits)
}

/// Circular LOOK: jumps from the last request on one side straight to the
/// first request on the other, keeping the sweep direction.
pub fn c_look(workload: &Workload) -> Sequence {
    let partition = Partition::new(workload);
    let visits: Vec<Track> = match workload.direction() {
        Direction::TowardMax => partition
            .right
            .iter()
            .chain(partition.left.iter())
            .copied()
            .collect(),
        Direction::TowardZero => partition
            .left_descending()
            .chain(partition.right_descending())
            .collect(),
    };

    Sequence::new(workload.head(), visits)
}
