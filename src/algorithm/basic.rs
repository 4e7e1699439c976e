//! Uninformed searches over the shared traversal engine.

use std::collections::VecDeque;
use std::hash::Hash;

use super::cache::BasicCache;
use super::{DirectedSearch, SearchQueue};
use crate::errors::Result;
use crate::lifecycle::Search;
use crate::traits::Problem;

/// First in, first out frontier.
#[derive(Debug)]
pub struct BreadthQueue<T> {
    queue: VecDeque<T>,
}

impl<T> Default for BreadthQueue<T> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<P> SearchQueue<P> for BreadthQueue<P::State>
where
    P: Problem + ?Sized,
{
    fn push(&mut self, _problem: &P, state: P::State) {
        self.queue.push_back(state);
    }

    fn pop(&mut self, _problem: &P) -> Option<P::State> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last in, first out frontier.
#[derive(Debug)]
pub struct DepthQueue<T> {
    queue: VecDeque<T>,
}

impl<T> Default for DepthQueue<T> {
    fn default() -> Self {
        DepthQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<P> SearchQueue<P> for DepthQueue<P::State>
where
    P: Problem + ?Sized,
{
    fn push(&mut self, _problem: &P, state: P::State) {
        self.queue.push_front(state);
    }

    fn pop(&mut self, _problem: &P) -> Option<P::State> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Breadth-first search. Returns a shallowest goal.
pub type BreadthFirstSearch<P, C = BasicCache<<P as Problem>::State>> =
    DirectedSearch<P, BreadthQueue<<P as Problem>::State>, C>;

/// Depth-first search driven by an explicit stack instead of recursion.
///
/// Successors are pushed in the order [Problem::expand] returns them,
/// so the last successor is explored first.
pub type SlowDepthFirstSearch<P, C = BasicCache<<P as Problem>::State>> =
    DirectedSearch<P, DepthQueue<<P as Problem>::State>, C>;

/// Breadth-first search, where the order is determined
/// by the states returned by [Problem::expand].
pub fn bfs<P>(problem: P) -> Result<P::State>
where
    P: Problem,
    P::State: Hash + Eq + Clone,
{
    let mut search: BreadthFirstSearch<P> = DirectedSearch::new(problem);
    search.solve()
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::algorithm::cache::{Cache, NoCache};
    use crate::errors::SearchError;
    use crate::testing::{Grid, Recorded};

    #[test_log::test]
    fn empty_problem() {
        let grid = Grid::empty();
        let mut search: BreadthFirstSearch<&Grid> = DirectedSearch::new(&grid);
        assert!(!search.initialize());
        search.run();
        assert_eq!(search.result(), None);
        assert_eq!(search.needed_steps(), 0);
        assert_eq!(search.branched_nodes(), 0);
        assert!(grid.order().is_empty());
        assert_eq!(bfs(&grid), Err(SearchError::NoInitialState));
    }

    #[test_log::test]
    fn breadth_first_walk() {
        let grid = Grid::new(0, None);
        let mut search: BreadthFirstSearch<&Grid> = DirectedSearch::new(&grid);

        for _ in 0..2 {
            search.run();
            assert_eq!(search.result(), None);
            assert_eq!(search.needed_steps(), 41);
            assert_eq!(search.branched_nodes(), 41);
            assert_eq!(search.cache().len(), 25);
            assert_eq!(
                grid.order(),
                vec![
                    0, 1, 5, 2, 6, 10, 3, 7, 11, 15, 4, 8, 12, 16, 20, 9, 13, 17, 21, 14, 18, 22,
                    19, 23, 24
                ]
            );
        }
    }

    #[test_log::test]
    fn breadth_first_run() {
        let grid = Grid::new(0, Some(24));
        let mut search: BreadthFirstSearch<&Grid> = DirectedSearch::new(&grid);
        search.run();
        assert_eq!(search.result(), Some(&24));
        assert_eq!(search.needed_steps(), 39);

        // Level order: no cell is expanded before a shallower one.
        let order = grid.order();
        let depths: Vec<_> = order.iter().map(|id| id % 5 + id / 5).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));

        assert_eq!(bfs(&Grid::new(0, Some(24))), Ok(24));
        assert_eq!(bfs(&Grid::new(0, Some(25))), Err(SearchError::NoResultFound));
    }

    #[test_log::test]
    fn breadth_first_without_cache() {
        let grid = Grid::new(0, Some(12));
        let mut search: BreadthFirstSearch<&Grid, NoCache> = DirectedSearch::new(&grid);
        search.run();
        assert_eq!(search.result(), Some(&12));

        // Every path to a cell is expanded on its own.
        let order = grid.order();
        assert!(order.len() > 12);
        assert_eq!(order.iter().filter(|&&id| id == 6).count(), 2);
    }

    #[test_log::test]
    fn stopped_breadth_first() {
        let grid = Grid::new(0, Some(24)).stopping_after(5);
        let mut search: BreadthFirstSearch<&Grid> = DirectedSearch::new(&grid);
        grid.attach(search.stop_handle());
        search.run();
        assert_eq!(search.result(), None);
        assert_eq!(search.needed_steps(), 5);
        assert_eq!(grid.order(), vec![0, 1, 5, 2, 6]);
    }

    #[test_log::test]
    fn slow_depth_first_walk() {
        let grid = Grid::new(0, None);
        let mut search: SlowDepthFirstSearch<&Grid> = DirectedSearch::new(&grid);
        search.run();
        assert_eq!(search.result(), None);
        assert_eq!(search.needed_steps(), 41);
        assert_eq!(
            grid.order(),
            vec![
                0, 5, 10, 15, 20, 21, 22, 23, 24, 16, 17, 18, 19, 11, 12, 13, 14, 6, 7, 8, 9, 1,
                2, 3, 4
            ]
        );
    }

    #[test_log::test]
    fn slow_depth_first_run() {
        let grid = Grid::new(0, Some(24));
        let mut search: SlowDepthFirstSearch<&Grid> = DirectedSearch::new(&grid);
        search.run();
        assert_eq!(search.result(), Some(&24));
        assert_eq!(search.needed_steps(), 8);
        assert_eq!(grid.order(), vec![0, 5, 10, 15, 20, 21, 22, 23]);
    }
}
