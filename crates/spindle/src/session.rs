//! Presentation state for one interactive lifetime.
//!
//! A [`Session`] owns the "animation in progress" flag and the most recent
//! [`Dashboard`] values. Starting a run hands out a [`Playback`] that
//! borrows the session; while it is alive, further starts are ignored.
//!
//! # Example
//!
//! ```
//! use spindle::session::Session;
//! use spindle::{algorithm::Algorithm, direction::Direction, workload::Workload};
//!
//! let workload = Workload::from_raw(199, 53, Direction::TowardMax, [98, 37]).unwrap();
//! let run = Algorithm::Fcfs.run(&workload);
//! let session = Session::new();
//!
//! let playback = session.start_run(&run).expect("nothing is playing");
//! assert!(session.start_run(&run).is_none());
//!
//! assert_eq!(playback.count(), 3);
//! assert_eq!(session.dashboard().total_seek(), 45 + 61);
//! assert!(!session.is_animating());
//! ```

use std::{
    cell::{Cell, RefCell},
    fmt,
};

use log::debug;

use spindle_core::{
    algorithm::Algorithm,
    compare::{Comparison, Run},
};

use crate::animation::{Animation, Frame};

/// Headline numbers shown after a run or comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    total_seek: u64,
    average_seek: f64,
    steps: usize,
    best: Option<Algorithm>,
}

impl Dashboard {
    /// Total seek distance of the last run.
    pub fn total_seek(&self) -> u64 {
        self.total_seek
    }

    /// Average seek per request of the last run.
    pub fn average_seek(&self) -> f64 {
        self.average_seek
    }

    /// Number of head movements in the last run.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The best algorithm of the last comparison, if any.
    pub fn best(&self) -> Option<Algorithm> {
        self.best
    }

    fn record_run(&mut self, run: &Run) {
        let metric = run.metric();
        self.total_seek = metric.total();
        self.average_seek = metric.average();
        self.steps = metric.step_count();
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total seek: {}  Average seek: {:.2}  Steps: {}  Best: ",
            self.total_seek, self.average_seek, self.steps
        )?;
        match self.best {
            Some(best) => write!(f, "{best}"),
            None => write!(f, "--"),
        }
    }
}

/// Owner of the in-progress flag and last results.
#[derive(Debug, Default)]
pub struct Session {
    animating: Cell<bool>,
    dashboard: RefCell<Dashboard>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a [`Playback`] from this session is alive.
    pub fn is_animating(&self) -> bool {
        self.animating.get()
    }

    /// A snapshot of the current dashboard values.
    pub fn dashboard(&self) -> Dashboard {
        self.dashboard.borrow().clone()
    }

    /// Begin playing back `run`.
    ///
    /// Returns `None` without side effects if another playback is still
    /// alive. Dashboard values follow the playback frame by frame and are
    /// finalised once the last frame has been yielded.
    pub fn start_run<'r>(&self, run: &'r Run) -> Option<Playback<'_, 'r>> {
        if self.animating.get() {
            debug!(algorithm:% = run.algorithm(); "Animation in progress, ignoring run");
            return None;
        }
        self.animating.set(true);
        debug!(algorithm:% = run.algorithm(), frames = run.sequence().len(); "Playback started");

        Some(Playback {
            session: self,
            run,
            animation: Animation::new(run.sequence()),
        })
    }

    /// Record the outcome of a comparison.
    ///
    /// Returns `None` without side effects if a playback is still alive,
    /// otherwise the updated dashboard.
    pub fn start_comparison(&self, comparison: &Comparison) -> Option<Dashboard> {
        if self.animating.get() {
            debug!(best:% = comparison.best(); "Animation in progress, ignoring comparison");
            return None;
        }

        let mut dashboard = self.dashboard.borrow_mut();
        dashboard.best = Some(comparison.best());
        Some(dashboard.clone())
    }

    /// Clear the dashboard and the in-progress flag.
    pub fn reset(&self) {
        debug!("Session reset");
        self.animating.set(false);
        *self.dashboard.borrow_mut() = Dashboard::default();
    }
}

/// A running animation of one [`Run`], tied to its [`Session`].
///
/// Dropping the playback, finished or not, ends the animation.
pub struct Playback<'s, 'r> {
    session: &'s Session,
    run: &'r Run,
    animation: Animation<'r>,
}

impl<'r> Playback<'_, 'r> {
    /// The run being played back.
    pub fn run(&self) -> &'r Run {
        self.run
    }

    /// Stop yielding frames. The session stays busy until the playback is dropped.
    pub fn cancel(&mut self) {
        self.animation.cancel();
    }
}

impl<'r> Iterator for Playback<'_, 'r> {
    type Item = Frame<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.animation.next()?;

        let mut dashboard = self.session.dashboard.borrow_mut();
        if self.animation.is_finished() {
            dashboard.record_run(self.run);
        } else {
            dashboard.total_seek = frame.running_seek();
            dashboard.steps = frame.index();
        }

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.animation.size_hint()
    }
}

impl Drop for Playback<'_, '_> {
    fn drop(&mut self) {
        debug!(algorithm:% = self.run.algorithm(); "Playback ended");
        self.session.animating.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;
    use spindle_core::{compare::compare_all, direction::Direction, workload::Workload};

    fn classic() -> Workload {
        Workload::from_raw(199, 53, Direction::TowardMax, [98, 183, 37, 122, 14, 124, 65, 67])
            .unwrap()
    }

    #[test]
    fn test_second_start_is_ignored_while_playing() {
        let workload = classic();
        let run = Algorithm::Scan.run(&workload);
        let session = Session::new();

        let playback = session.start_run(&run);
        assert!(playback.is_some());
        assert!(session.is_animating());
        assert!(session.start_run(&run).is_none());

        drop(playback);
        assert!(!session.is_animating());
        assert!(session.start_run(&run).is_some());
    }

    #[test]
    fn test_comparison_is_ignored_while_playing() {
        let workload = classic();
        let run = Algorithm::Fcfs.run(&workload);
        let comparison = compare_all(&workload);
        let session = Session::new();

        let _playback = session.start_run(&run).unwrap();
        assert!(session.start_comparison(&comparison).is_none());
        assert_eq!(session.dashboard().best(), None);
    }

    #[test]
    fn test_dashboard_follows_frames() {
        let workload = classic();
        let run = Algorithm::Scan.run(&workload);
        let session = Session::new();

        let mut playback = session.start_run(&run).unwrap();
        playback.next();
        playback.next();

        let dashboard = session.dashboard();
        assert_eq!(dashboard.total_seek(), 12);
        assert_eq!(dashboard.steps(), 1);
    }

    #[test]
    fn test_finished_playback_records_run() {
        let workload = classic();
        let run = Algorithm::Scan.run(&workload);
        let session = Session::new();

        session.start_run(&run).unwrap().for_each(drop);

        let dashboard = session.dashboard();
        assert_eq!(dashboard.total_seek(), 331);
        assert_eq!(dashboard.steps(), 9);
        assert!(approx_eq!(f64, dashboard.average_seek(), 331.0 / 9.0, epsilon = 1e-9));
        assert_eq!(
            dashboard.to_string(),
            "Total seek: 331  Average seek: 36.78  Steps: 9  Best: --"
        );
    }

    #[test]
    fn test_cancelled_playback_releases_on_drop() {
        let workload = classic();
        let run = Algorithm::Look.run(&workload);
        let session = Session::new();

        let mut playback = session.start_run(&run).unwrap();
        playback.next();
        playback.cancel();
        assert!(playback.next().is_none());
        assert!(session.is_animating());

        drop(playback);
        assert!(!session.is_animating());
    }

    #[test]
    fn test_comparison_sets_best_and_reset_clears() {
        let workload = classic();
        let session = Session::new();

        let dashboard = session.start_comparison(&compare_all(&workload)).unwrap();
        assert_eq!(dashboard.best(), Some(Algorithm::Sstf));
        assert!(dashboard.to_string().ends_with("Best: SSTF"));

        session.reset();
        assert_eq!(session.dashboard(), Dashboard::default());
        assert!(session.dashboard().to_string().ends_with("Best: --"));
    }

    #[test]
    fn test_reset_clears_in_progress_flag() {
        let workload = classic();
        let run = Algorithm::Fcfs.run(&workload);
        let session = Session::new();

        let _playback = session.start_run(&run).unwrap();
        session.reset();
        assert!(!session.is_animating());
        assert!(session.start_run(&run).is_some());
    }

    #[test]
    fn test_empty_workload_records_zero() {
        let workload = Workload::from_raw(100, 50, Direction::TowardMax, []).unwrap();
        let run = Algorithm::Sstf.run(&workload);
        let session = Session::new();

        assert_eq!(session.start_run(&run).unwrap().count(), 1);
        let dashboard = session.dashboard();
        assert_eq!(dashboard.total_seek(), 0);
        assert_eq!(dashboard.steps(), 0);
        assert_eq!(dashboard.average_seek(), 0.0);
    }
}
