//! Iterative deepening A*.
//!
//! Each iteration is a depth-first search which prunes every state whose
//! `f = g + h` exceeds the current bound. The next bound is the smallest
//! `f` that was pruned, and the search gives up once no state was pruned.

use std::hash::Hash;

use log::debug;

use super::cache::{DepthCache, DepthMap};
use crate::errors::Result;
use crate::lifecycle::{Search, SearchRun};
use crate::traits::{HeuristicProblem, Problem};

#[derive(Debug)]
pub struct IterativeDeepeningAStar<P, C = DepthMap<<P as Problem>::State>>
where
    P: HeuristicProblem,
{
    problem: P,
    cache: C,
    iterations: usize,
    run: SearchRun<P::State>,
}

impl<P, C> IterativeDeepeningAStar<P, C>
where
    P: HeuristicProblem,
    C: DepthCache<P::State> + Default,
{
    pub fn new(problem: P) -> Self {
        Self::with_cache(problem, C::default())
    }
}

impl<P, C> IterativeDeepeningAStar<P, C>
where
    P: HeuristicProblem,
    C: DepthCache<P::State>,
{
    pub fn with_cache(problem: P, cache: C) -> Self {
        IterativeDeepeningAStar {
            problem,
            cache,
            iterations: 0,
            run: SearchRun::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Evaluation `g + h` of a state.
    pub fn f(&self, state: &P::State) -> f64 {
        self.problem.g(state) + self.problem.h(state)
    }

    /// Number of bounded iterations of the last run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

struct Bounded<'s, P, C>
where
    P: HeuristicProblem,
{
    problem: &'s P,
    cache: &'s mut C,
    run: &'s mut SearchRun<P::State>,
    bound: f64,
}

impl<'s, P, C> Bounded<'s, P, C>
where
    P: HeuristicProblem,
    C: DepthCache<P::State>,
{
    /// Returns the smallest evaluation exceeding the bound below `state`.
    fn descend(&mut self, state: P::State) -> f64 {
        if self.run.finished() {
            return self.bound;
        }
        let f = self.problem.g(&state) + self.problem.h(&state);
        if f > self.bound {
            return f;
        }
        if self.problem.is_goal(&state) {
            self.run.set_result(state);
            return self.bound;
        }
        if !self.cache.visit(&state, self.problem.depth(&state)) {
            return f64::INFINITY;
        }
        self.run.step();

        let mut next = f64::INFINITY;
        for successor in self.problem.expand(&state) {
            next = next.min(self.descend(successor));
        }
        next
    }
}

impl<P, C> Search for IterativeDeepeningAStar<P, C>
where
    P: HeuristicProblem,
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
        self.iterations = 0;
    }

    fn search(&mut self) {
        let initial = match self.problem.initial() {
            Some(initial) => initial,
            None => return,
        };

        let mut bound = self.f(&initial);
        while !self.run.finished() && bound.is_finite() {
            self.cache.clear();
            self.iterations += 1;
            debug!("bound={}, steps={}", bound, self.run.needed_steps());
            bound = Bounded {
                problem: &self.problem,
                cache: &mut self.cache,
                run: &mut self.run,
                bound,
            }
            .descend(initial.clone());
        }
    }
}

/// Iterative deepening A* with duplicate detection by depth.
pub fn ida_star<P>(problem: P) -> Result<P::State>
where
    P: HeuristicProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search: IterativeDeepeningAStar<P> = IterativeDeepeningAStar::new(problem);
    search.solve()
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::algorithm::cache::NoCache;
    use crate::errors::SearchError;
    use crate::testing::{PathGrid, Recorded};

    #[test_log::test]
    fn ida_star_empty() {
        let grid = PathGrid::empty();
        let mut search: IterativeDeepeningAStar<&PathGrid> = IterativeDeepeningAStar::new(&grid);
        assert!(!search.initialize());
        search.run();
        assert!(search.result().is_none());
        assert_eq!(search.needed_steps(), 0);
        assert_eq!(ida_star(&grid).err(), Some(SearchError::NoInitialState));
    }

    #[test_log::test]
    fn ida_star_run() {
        let grid = PathGrid::new(0, 24);
        let mut search: IterativeDeepeningAStar<&PathGrid> = IterativeDeepeningAStar::new(&grid);
        for _ in 0..2 {
            search.run();
            let result = search.result().expect("goal is reachable");
            assert_eq!(result.path(), vec![24, 19, 18, 13, 12, 7, 2, 1, 0]);
            assert_eq!(search.needed_steps(), 57);
            assert_eq!(search.iterations(), 7);
            assert_eq!(grid.order(), vec![0, 1, 2, 3, 7, 8, 12, 13, 18, 19]);
        }
        // Pruning by depth keeps only the first path reaching a cell at a
        // given depth, so this is not the cheapest path (A* finds cost 10).
        let goal = search.take_result().unwrap();
        assert_eq!(search.f(&goal), 11.0);
    }

    #[test_log::test]
    fn ida_star_walk() {
        let grid = PathGrid::new(0, 25);
        let mut search: IterativeDeepeningAStar<&PathGrid> = IterativeDeepeningAStar::new(&grid);
        search.run();
        assert!(search.result().is_none());
        assert_eq!(search.needed_steps(), 357);
        assert_eq!(search.iterations(), 23);
        assert_eq!(
            grid.order(),
            vec![
                0, 1, 2, 3, 4, 9, 14, 19, 24, 8, 13, 18, 23, 7, 12, 17, 22, 6, 11, 16, 21, 5, 10,
                15, 20
            ]
        );
    }

    #[test_log::test]
    fn ida_star_without_cache() {
        let grid = PathGrid::new(0, 25);
        let mut search: IterativeDeepeningAStar<&PathGrid, NoCache> =
            IterativeDeepeningAStar::new(&grid);
        search.run();
        assert!(search.result().is_none());
        assert_eq!(search.needed_steps(), 3343);
        assert_eq!(search.iterations(), 28);
    }

    #[test_log::test]
    fn ida_star_stopped() {
        let grid = PathGrid::new(0, 24).stopping_after(5);
        let mut search: IterativeDeepeningAStar<&PathGrid> = IterativeDeepeningAStar::new(&grid);
        grid.attach(search.stop_handle());
        search.run();
        assert!(search.result().is_none());
        assert_eq!(search.needed_steps(), 5);
        assert_eq!(grid.order(), vec![0, 1, 6, 5]);
    }

    #[test_log::test]
    fn ida_star_finds_the_start() -> anyhow::Result<()> {
        let grid = PathGrid::new(12, 12);
        let found = ida_star(&grid)?;
        assert_eq!(found.path(), vec![12]);
        assert_eq!(grid.expansions(), 0);
        Ok(())
    }
}
