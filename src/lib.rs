#![deny(clippy::all)]

//! Generic state-space search.
//!
//! Describe a search space by implementing [Problem] (and, depending on the
//! algorithm, [TreeProblem], [HeuristicProblem], [BidirectionalProblem],
//! [HillClimbingProblem] or [SimulatedAnnealingProblem]), then hand it to one
//! of the searches in [algorithm] or [local]. Every search shares the life
//! cycle of the [Search] trait: initialize, run, and read the result and the
//! number of steps it took. A running search can be cancelled from outside
//! through a [StopHandle].
//!
//! For a single answer, the free functions ([bfs], [astar],
//! [iterative_deepening], ...) build a search, run it, and return the result.

pub mod algorithm;
mod errors;
pub mod lifecycle;
pub mod local;
pub mod queue;
mod traits;

#[cfg(test)]
mod testing;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::BidirectionalProblem;
pub use traits::HeuristicProblem;
pub use traits::HillClimbingProblem;
pub use traits::Problem;
pub use traits::SimulatedAnnealingProblem;
pub use traits::TreeProblem;

pub use lifecycle::{Phase, Search, SearchRun, StopHandle};
pub use queue::SortedQueue;

pub use algorithm::basic::{bfs, BreadthFirstSearch, SlowDepthFirstSearch};
pub use algorithm::best_first::{
    astar, greedy, uniform_cost, AStarSearch, BestFirstSearch, Frontier, GreedySearch,
    UniformCostSearch,
};
pub use algorithm::bidirectional::{bidirectional, BidirectionalSearch};
pub use algorithm::cache::{BasicCache, Cache, DepthCache, DepthMap, NoCache};
pub use algorithm::depth_first::{dfs, DepthFirstSearch};
pub use algorithm::depth_limited::DepthLimitedSearch;
pub use algorithm::idastar::{ida_star, IterativeDeepeningAStar};
pub use algorithm::iterative::{iterative_deepening, IterativeDeepeningSearch};
pub use algorithm::{DirectedSearch, SearchOptions};

pub use local::annealing::{anneal, Schedule, SimulatedAnnealing};
pub use local::hill_climbing::{hill_climb, HillClimbing};
pub use local::strategy::{BestChoice, FirstChoice, Strategy};
pub use local::Direction;
