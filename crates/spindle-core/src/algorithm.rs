//! Algorithm identities and dispatch.
//!
//! [`Algorithm`] names one of the six supported orderings and maps it to its
//! function in [`crate::order`]. The mapping is an exhaustive `match`, so
//! adding a variant without an ordering fails to compile.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::trace;
use serde::Deserialize;

use crate::{compare::Run, order, sequence::Sequence, workload::Workload};

/// Signature shared by every ordering function.
pub type OrderFn = fn(&Workload) -> Sequence;

/// The supported disk-head scheduling algorithms.
///
/// The declaration order is the fixed enumeration order used for
/// comparisons and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// First-Come-First-Served (default)
    #[default]
    Fcfs,
    /// Shortest-Seek-Time-First
    Sstf,
    /// Elevator sweep with boundary reversal
    Scan,
    /// Circular SCAN
    CScan,
    /// SCAN reversing at the last request
    Look,
    /// Circular LOOK
    CLook,
}

impl Algorithm {
    /// Every algorithm in enumeration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    /// Returns the ordering function implementing this algorithm.
    pub fn ordering(self) -> OrderFn {
        match self {
            Self::Fcfs => order::fcfs,
            Self::Sstf => order::sstf,
            Self::Scan => order::scan,
            Self::CScan => order::c_scan,
            Self::Look => order::look,
            Self::CLook => order::c_look,
        }
    }

    /// Computes the visit sequence for `workload`.
    pub fn order(self, workload: &Workload) -> Sequence {
        let sequence = self.ordering()(workload);
        trace!(algorithm:% = self, sequence:% = sequence; "Computed visit order");
        sequence
    }

    /// Computes the visit sequence and its seek metric.
    pub fn run(self, workload: &Workload) -> Run {
        Run::new(self, self.order(workload))
    }

    /// Returns `true` if the result depends on the sweep direction.
    pub fn uses_direction(self) -> bool {
        !matches!(self, Self::Fcfs | Self::Sstf)
    }

    /// Returns `true` if the algorithm may visit boundary tracks that hold no
    /// request.
    pub fn visits_boundaries(self) -> bool {
        matches!(self, Self::Scan | Self::CScan)
    }

    /// Human-readable long name.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::Sstf => "Shortest-Seek-Time-First",
            Self::Scan => "SCAN (elevator)",
            Self::CScan => "Circular SCAN",
            Self::Look => "LOOK",
            Self::CLook => "Circular LOOK",
        }
    }
}

impl FromStr for Algorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sstf" => Ok(Self::Sstf),
            "scan" => Ok(Self::Scan),
            "c-scan" | "cscan" => Ok(Self::CScan),
            "look" => Ok(Self::Look),
            "c-look" | "clook" => Ok(Self::CLook),
            _ => Err("Unsupported algorithm, expected one of FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK"),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(val: Algorithm) -> Self {
        match val {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::CLook => "C-LOOK",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        // `pad` so width specifiers work in tables
        f.pad(s)
    }
}
