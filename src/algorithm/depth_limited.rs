//! Depth-first search which never descends past a fixed depth.

use log::warn;

use super::cache::{BasicCache, Cache};
use crate::errors::{Result, SearchError};
use crate::lifecycle::{Search, SearchRun};
use crate::traits::{Problem, TreeProblem};

/// Recursive depth-first search bounded by [TreeProblem::depth].
///
/// A successor is only descended into when its depth is strictly
/// smaller than the limit.
#[derive(Debug)]
pub struct DepthLimitedSearch<P, C = BasicCache<<P as Problem>::State>>
where
    P: TreeProblem,
{
    problem: P,
    cache: C,
    limit: usize,
    run: SearchRun<P::State>,
}

impl<P, C> DepthLimitedSearch<P, C>
where
    P: TreeProblem,
    C: Cache<P::State> + Default,
{
    /// Fails unless `limit` is positive.
    pub fn new(problem: P, limit: usize) -> Result<Self> {
        Self::with_cache(problem, limit, C::default())
    }
}

impl<P, C> DepthLimitedSearch<P, C>
where
    P: TreeProblem,
    C: Cache<P::State>,
{
    pub fn with_cache(problem: P, limit: usize, cache: C) -> Result<Self> {
        if limit == 0 {
            return Err(SearchError::InvalidDepthLimit(limit));
        }
        Ok(DepthLimitedSearch {
            problem,
            cache,
            limit,
            run: SearchRun::new(),
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn depth_limit(&self) -> usize {
        self.limit
    }

    /// Changes the limit. Only effective while the search is not initialized.
    pub fn set_depth_limit(&mut self, limit: usize) -> bool {
        if self.initialized() || limit == 0 {
            warn!("Ignoring depth limit {}", limit);
            return false;
        }
        self.limit = limit;
        true
    }

    pub fn branched_nodes(&self) -> usize {
        self.run.needed_steps()
    }
}

struct Descent<'s, P, C>
where
    P: TreeProblem,
{
    problem: &'s P,
    cache: &'s mut C,
    run: &'s mut SearchRun<P::State>,
    limit: usize,
}

impl<'s, P, C> Descent<'s, P, C>
where
    P: TreeProblem,
    C: Cache<P::State>,
{
    fn descend(&mut self, state: P::State) {
        if self.run.finished() {
            return;
        }
        if self.problem.is_goal(&state) {
            self.run.set_result(state);
            return;
        }
        self.run.step();
        if !self.cache.insert(&state) {
            return;
        }
        for successor in self.problem.expand(&state) {
            if self.problem.depth(&successor) < self.limit {
                self.descend(successor);
            }
        }
    }
}

impl<P, C> Search for DepthLimitedSearch<P, C>
where
    P: TreeProblem,
    C: Cache<P::State>,
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
    }

    fn search(&mut self) {
        if let Some(initial) = self.problem.initial() {
            Descent {
                problem: &self.problem,
                cache: &mut self.cache,
                run: &mut self.run,
                limit: self.limit,
            }
            .descend(initial);
        }
    }
}
