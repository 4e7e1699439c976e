//! The life cycle shared by every search algorithm.
//!
//! A search starts out [Phase::Terminated]. [Search::initialize] moves it to
//! [Phase::Initialized] once the problem is ready, [Search::run] moves it to
//! [Phase::Running] for the duration of the search and back to
//! [Phase::Terminated] afterwards. Cancellation is cooperative: the only way
//! to end a run early is [Search::stop] (or [StopHandle::stop]), which the
//! algorithms poll before every pop and every recursive call.

use std::sync::atomic::{self, AtomicU8};
use std::sync::Arc;

use log::debug;

use crate::errors::{Result, SearchError};

/// Where a search is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Terminated,
    Initialized,
    Running,
}

impl Phase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Phase::Initialized,
            2 => Phase::Running,
            _ => Phase::Terminated,
        }
    }
}

/// A shareable handle onto the phase of one search.
///
/// Clones observe the same search, so a problem (or another thread)
/// holding a handle can cancel a running search.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    phase: Arc<AtomicU8>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(atomic::Ordering::SeqCst))
    }

    pub fn running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Terminates the search if it is currently running.
    ///
    /// Returns `true` when this call stopped the search.
    pub fn stop(&self) -> bool {
        self.phase
            .compare_exchange(
                Phase::Running as u8,
                Phase::Terminated as u8,
                atomic::Ordering::SeqCst,
                atomic::Ordering::SeqCst,
            )
            .is_ok()
    }

    fn set(&self, phase: Phase) {
        self.phase.store(phase as u8, atomic::Ordering::SeqCst);
    }
}

/// The outcome of one search run: the result, the number of steps
/// taken to find it, and the phase of the run.
#[derive(Debug)]
pub struct SearchRun<T> {
    result: Option<T>,
    steps: usize,
    handle: StopHandle,
}

impl<T> Default for SearchRun<T> {
    fn default() -> Self {
        SearchRun {
            result: None,
            steps: 0,
            handle: StopHandle::new(),
        }
    }
}

impl<T> SearchRun<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    pub fn set_result(&mut self, state: T) {
        self.result = Some(state);
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn needed_steps(&self) -> usize {
        self.steps
    }

    /// Count one more step of the algorithm.
    pub fn step(&mut self) {
        self.steps += 1;
    }

    pub fn running(&self) -> bool {
        self.handle.running()
    }

    /// Whether a recursive algorithm should unwind: either a result
    /// was found or the run was stopped.
    pub fn finished(&self) -> bool {
        self.result.is_some() || !self.running()
    }

    pub fn handle(&self) -> &StopHandle {
        &self.handle
    }

    fn reset(&mut self) {
        self.result = None;
        self.steps = 0;
    }
}

/// Common interface of all search algorithms.
///
/// Implementors provide access to their [SearchRun], the readiness check,
/// the preparation and the algorithm body. The life cycle itself is
/// provided.
pub trait Search {
    type State;

    fn search_run(&self) -> &SearchRun<Self::State>;

    fn search_run_mut(&mut self) -> &mut SearchRun<Self::State>;

    /// Whether the problem is ready to be searched. Must not fail.
    fn can_prepare(&self) -> bool;

    /// Resets algorithm specific state. Only called after
    /// [Search::can_prepare] returned `true`.
    fn prepare(&mut self);

    /// The algorithm body. Must poll [SearchRun::running] and return
    /// promptly once it is `false`.
    fn search(&mut self);

    fn phase(&self) -> Phase {
        self.search_run().handle().phase()
    }

    fn initialized(&self) -> bool {
        self.phase() == Phase::Initialized
    }

    fn running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Prepares the search for a run.
    ///
    /// Does nothing if the search is already initialized. Returns
    /// whether the search is initialized afterwards.
    fn initialize(&mut self) -> bool {
        if self.initialized() {
            return true;
        }
        if self.can_prepare() {
            self.search_run_mut().reset();
            self.prepare();
            self.search_run().handle().set(Phase::Initialized);
        }
        self.initialized()
    }

    /// Initializes the search and runs it until it completes or is stopped.
    fn run(&mut self) {
        if !self.initialize() {
            debug!("Search could not be initialized");
            return;
        }
        let handle = self.stop_handle();
        handle.set(Phase::Running);
        debug!("Search started");
        self.search();
        handle.set(Phase::Terminated);
        debug!(
            "Search terminated after {} steps (result found: {})",
            self.needed_steps(),
            self.search_run().has_result()
        );
    }

    /// Stops a running search. Has no effect in any other phase.
    fn stop(&self) -> bool {
        self.search_run().handle().stop()
    }

    fn stop_handle(&self) -> StopHandle {
        self.search_run().handle().clone()
    }

    /// The result of the last run, if one was found.
    fn result(&self) -> Option<&Self::State> {
        self.search_run().result()
    }

    fn take_result(&mut self) -> Option<Self::State> {
        self.search_run_mut().take_result()
    }

    /// Number of steps the last run needed.
    fn needed_steps(&self) -> usize {
        self.search_run().needed_steps()
    }

    /// Runs the search and hands over its result.
    fn solve(&mut self) -> Result<Self::State> {
        if !self.initialize() {
            return Err(SearchError::NoInitialState);
        }
        self.run();
        self.take_result().ok_or(SearchError::NoResultFound)
    }
}
