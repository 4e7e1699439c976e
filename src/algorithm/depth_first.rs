//! Recursive depth-first search.

use std::hash::Hash;

use super::cache::{BasicCache, Cache};
use crate::errors::Result;
use crate::lifecycle::{Search, SearchRun};
use crate::traits::Problem;

/// Depth-first search which recurses into every successor.
///
/// Only terminates if the search tree has no infinite branch that
/// duplicate detection cannot cut off. Recursion depth equals the
/// depth of the explored path.
#[derive(Debug)]
pub struct DepthFirstSearch<P, C = BasicCache<<P as Problem>::State>>
where
    P: Problem,
{
    problem: P,
    cache: C,
    run: SearchRun<P::State>,
}

impl<P, C> DepthFirstSearch<P, C>
where
    P: Problem,
    C: Cache<P::State> + Default,
{
    pub fn new(problem: P) -> Self {
        Self::with_cache(problem, C::default())
    }
}

impl<P, C> DepthFirstSearch<P, C>
where
    P: Problem,
    C: Cache<P::State>,
{
    pub fn with_cache(problem: P, cache: C) -> Self {
        DepthFirstSearch {
            problem,
            cache,
            run: SearchRun::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn branched_nodes(&self) -> usize {
        self.run.needed_steps()
    }
}

/// State threaded through one recursive descent.
struct Descent<'s, P, C>
where
    P: Problem,
{
    problem: &'s P,
    cache: &'s mut C,
    run: &'s mut SearchRun<P::State>,
}

impl<'s, P, C> Descent<'s, P, C>
where
    P: Problem,
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
            self.descend(successor);
        }
    }
}

impl<P, C> Search for DepthFirstSearch<P, C>
where
    P: Problem,
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
            }
            .descend(initial);
        }
    }
}

/// Depth-first search, where the order is determined
/// by the states returned by [Problem::expand].
pub fn dfs<P>(problem: P) -> Result<P::State>
where
    P: Problem,
    P::State: Hash + Eq + Clone,
{
    let mut search: DepthFirstSearch<P> = DepthFirstSearch::new(problem);
    search.solve()
}
