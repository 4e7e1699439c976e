//! Iterative deepening search.
//!
//! Runs depth-limited searches with a growing depth limit, starting at 1.
//! Within one iteration, a state is descended into again only when it is
//! reached at a strictly smaller depth than before, so shallow paths found
//! late still get explored to the full limit. The revisit map is cleared
//! between iterations.

use std::hash::Hash;

use log::{debug, warn};

use super::cache::{DepthCache, DepthMap};
use crate::errors::{Result, SearchError};
use crate::lifecycle::{Search, SearchRun};
use crate::traits::{Problem, TreeProblem};

/// Maximum depth used by [IterativeDeepeningSearch::new].
pub const DEFAULT_MAXIMUM_DEPTH: usize = 1000;

/// Iterative deepening search over a [TreeProblem].
///
/// Stops when a goal is found, when the depth limit reaches the maximum
/// depth, or when an iteration expands no more nodes than the one before.
#[derive(Debug)]
pub struct IterativeDeepeningSearch<P, C = DepthMap<<P as Problem>::State>>
where
    P: TreeProblem,
{
    problem: P,
    cache: C,
    maximum_depth: usize,
    expanded: usize,
    iterations: usize,
    run: SearchRun<P::State>,
}

impl<P, C> IterativeDeepeningSearch<P, C>
where
    P: TreeProblem,
    P::State: Clone,
    C: DepthCache<P::State> + Default,
{
    pub fn new(problem: P) -> Self {
        IterativeDeepeningSearch {
            problem,
            cache: C::default(),
            maximum_depth: DEFAULT_MAXIMUM_DEPTH,
            expanded: 0,
            iterations: 0,
            run: SearchRun::new(),
        }
    }

    /// Fails unless `maximum_depth` is greater than one.
    pub fn with_maximum_depth(problem: P, maximum_depth: usize) -> Result<Self> {
        Self::with_cache(problem, maximum_depth, C::default())
    }
}

impl<P, C> IterativeDeepeningSearch<P, C>
where
    P: TreeProblem,
    P::State: Clone,
    C: DepthCache<P::State>,
{
    pub fn with_cache(problem: P, maximum_depth: usize, cache: C) -> Result<Self> {
        if maximum_depth <= 1 {
            return Err(SearchError::InvalidMaximumDepth(maximum_depth));
        }
        Ok(IterativeDeepeningSearch {
            problem,
            cache,
            maximum_depth,
            expanded: 0,
            iterations: 0,
            run: SearchRun::new(),
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn maximum_depth(&self) -> usize {
        self.maximum_depth
    }

    /// Changes the maximum depth. Only effective while the search
    /// is not initialized.
    pub fn set_maximum_depth(&mut self, maximum_depth: usize) -> bool {
        if self.initialized() || maximum_depth <= 1 {
            warn!("Ignoring maximum depth {}", maximum_depth);
            return false;
        }
        self.maximum_depth = maximum_depth;
        true
    }

    /// Nodes expanded during the last iteration.
    pub fn expanded_nodes(&self) -> usize {
        self.expanded
    }

    /// Number of depth-limited iterations of the last run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// One depth-limited iteration.
struct Iteration<'s, P, C>
where
    P: TreeProblem,
{
    problem: &'s P,
    cache: &'s mut C,
    run: &'s mut SearchRun<P::State>,
    limit: usize,
    expanded: usize,
}

impl<'s, P, C> Iteration<'s, P, C>
where
    P: TreeProblem,
    C: DepthCache<P::State>,
{
    fn descend(&mut self, state: P::State) {
        if self.run.finished() {
            return;
        }
        if self.problem.is_goal(&state) {
            self.run.set_result(state);
            return;
        }
        self.expanded += 1;
        self.run.step();
        if !self.cache.visit(&state, self.problem.depth(&state)) {
            return;
        }
        for successor in self.problem.expand(&state) {
            if self.problem.depth(&successor) < self.limit {
                self.descend(successor);
            }
        }
    }
}

impl<P, C> Search for IterativeDeepeningSearch<P, C>
where
    P: TreeProblem,
    P::State: Clone,
    C: DepthCache<P::State>,
{
    type State = P::State;

    fn search_run(&self) -> &SearchRun<P::State> {
        &self.run
    }

    fn search_run_mut(&mut self) -> &mut SearchRun<P::State> {
        &mut self.run
    }

    fn can_prepare(&self) -> bool {
        self.problem.initial().is_some()
    }

    fn prepare(&mut self) {
        self.cache.clear();
        self.expanded = 0;
        self.iterations = 0;
    }

    fn search(&mut self) {
        let initial = match self.problem.initial() {
            Some(initial) => initial,
            None => return,
        };

        let mut limit = 1;
        let mut last = 0;
        while limit < self.maximum_depth && !self.run.finished() {
            self.cache.clear();
            let mut iteration = Iteration {
                problem: &self.problem,
                cache: &mut self.cache,
                run: &mut self.run,
                limit,
                expanded: 0,
            };
            iteration.descend(initial.clone());
            self.expanded = iteration.expanded;
            self.iterations += 1;
            debug!("limit={}, nodes={}", limit, self.expanded);

            if self.expanded <= last {
                break;
            }
            last = self.expanded;
            limit += 1;
        }
    }
}

/// Iterative deepening search with the default maximum depth.
pub fn iterative_deepening<P>(problem: P) -> Result<P::State>
where
    P: TreeProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search: IterativeDeepeningSearch<P> = IterativeDeepeningSearch::new(problem);
    search.solve()
}
