//! Spindle Core Types and Algorithms
//!
//! This crate provides the foundational types and the scheduling logic for
//! Spindle. It is pure: nothing here performs I/O or keeps state between
//! calls. It includes:
//!
//! - **Tracks**: Bounded track addressing and validation ([`track`] module)
//! - **Direction**: Initial sweep bias for the SCAN family ([`direction::Direction`])
//! - **Workload**: A validated scheduling problem ([`workload::Workload`])
//! - **Ordering**: The six head-ordering algorithms ([`order`] module, [`algorithm::Algorithm`])
//! - **Seek metric**: Total and average head movement ([`seek::SeekMetric`])
//! - **Comparison**: Running every algorithm and ranking them ([`compare`] module)
//!
//! # Example
//!
//! ```
//! use spindle_core::{algorithm::Algorithm, direction::Direction, workload::Workload};
//!
//! let workload = Workload::from_raw(199, 53, Direction::TowardMax, [98, 183, 37, 122])
//!     .expect("all tracks are in range");
//!
//! let run = Algorithm::Fcfs.run(&workload);
//! assert_eq!(run.sequence().head().value(), 53);
//! assert_eq!(run.metric().total(), 45 + 85 + 146 + 85);
//! ```

pub mod algorithm;
pub mod compare;
pub mod direction;
pub mod order;
pub mod seek;
pub mod sequence;
pub mod track;
pub mod workload;
