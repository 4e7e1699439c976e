//! Best-first search: A*, greedy and uniform-cost search.
//!
//! All three share the traversal of [DirectedSearch] and differ only in the
//! [Evaluation] ordering their frontier. The frontier either evaluates a state
//! once when it is queued ([Frontier::Static]) or re-evaluates every queued
//! state whenever it pops ([Frontier::Updating]). The static heap is only
//! correct when a queued state's evaluation can never change, which holds
//! for non-decreasing path costs. Use the updating frontier when the problem
//! lowers the cost of states which are already queued, or when the
//! evaluation itself changes over time.

use std::cmp::Ordering;
use std::hash::Hash;

use super::cache::{BasicCache, Cache};
use super::heap::EvaluatedHeap;
use super::{DirectedSearch, SearchQueue};
use crate::errors::Result;
use crate::lifecycle::Search;
use crate::queue::SortedQueue;
use crate::traits::{HeuristicProblem, Problem};

/// Evaluation function ordering a best-first frontier. Smaller is better.
///
/// Implemented for closures taking the problem and a state.
pub trait Evaluation<P>
where
    P: Problem + ?Sized,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> f64;
}

impl<P, F> Evaluation<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P, &P::State) -> f64,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> f64 {
        self(problem, state)
    }
}

/// `f = g + h`. Optimal for admissible, consistent heuristics.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl<P> Evaluation<P> for AStar
where
    P: HeuristicProblem + ?Sized,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> f64 {
        problem.g(state) + problem.h(state)
    }
}

/// `f = h`: always follow the estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl<P> Evaluation<P> for Greedy
where
    P: HeuristicProblem + ?Sized,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> f64 {
        problem.h(state)
    }
}

/// `f = g`, also known as Dijkstra's algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCost;

impl<P> Evaluation<P> for UniformCost
where
    P: HeuristicProblem + ?Sized,
{
    fn evaluate(&self, problem: &P, state: &P::State) -> f64 {
        problem.g(state)
    }
}

/// How a best-first frontier orders its states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frontier {
    /// Evaluate once on insertion, O(log n) per operation.
    #[default]
    Static,
    /// Evaluate every queued state on each pop, O(n) per pop.
    Updating,
}

#[derive(Debug)]
enum Storage<T> {
    Static(EvaluatedHeap<T>),
    Updating(SortedQueue<T>),
}

/// Comparator stored in an updating frontier. Every pop orders the queue
/// through [SortedQueue::poll_by] instead, because the evaluation needs the
/// problem, which only `pop` receives.
fn by_insertion<T>(_: &T, _: &T) -> Ordering {
    Ordering::Equal
}

/// A frontier ordered by an evaluation function.
#[derive(Debug)]
pub struct BestFirstQueue<T, E> {
    evaluation: E,
    storage: Storage<T>,
}

impl<T, E> BestFirstQueue<T, E> {
    pub fn new(evaluation: E, frontier: Frontier) -> Self {
        let storage = match frontier {
            Frontier::Static => Storage::Static(EvaluatedHeap::default()),
            Frontier::Updating => Storage::Updating(SortedQueue::new(by_insertion::<T>)),
        };
        BestFirstQueue {
            evaluation,
            storage,
        }
    }

    pub fn evaluation(&self) -> &E {
        &self.evaluation
    }

    pub fn frontier(&self) -> Frontier {
        match self.storage {
            Storage::Static(_) => Frontier::Static,
            Storage::Updating(_) => Frontier::Updating,
        }
    }
}

impl<T, E> Default for BestFirstQueue<T, E>
where
    E: Default,
{
    fn default() -> Self {
        BestFirstQueue::new(E::default(), Frontier::default())
    }
}

impl<P, E> SearchQueue<P> for BestFirstQueue<P::State, E>
where
    P: Problem + ?Sized,
    E: Evaluation<P>,
{
    fn push(&mut self, problem: &P, state: P::State) {
        match &mut self.storage {
            Storage::Static(heap) => {
                let key = self.evaluation.evaluate(problem, &state);
                heap.push(key, state);
            }
            Storage::Updating(queue) => queue.offer(state),
        }
    }

    fn pop(&mut self, problem: &P) -> Option<P::State> {
        match &mut self.storage {
            Storage::Static(heap) => heap.pop(),
            Storage::Updating(queue) => {
                let evaluation = &self.evaluation;
                queue.poll_by(|a, b| {
                    evaluation
                        .evaluate(problem, a)
                        .total_cmp(&evaluation.evaluate(problem, b))
                })
            }
        }
    }

    fn len(&self) -> usize {
        match &self.storage {
            Storage::Static(heap) => heap.len(),
            Storage::Updating(queue) => queue.len(),
        }
    }

    fn clear(&mut self) {
        match &mut self.storage {
            Storage::Static(heap) => heap.clear(),
            Storage::Updating(queue) => queue.clear(),
        }
    }
}

/// Best-first search ordered by the evaluation `E`.
pub type BestFirstSearch<P, E, C = BasicCache<<P as Problem>::State>> =
    DirectedSearch<P, BestFirstQueue<<P as Problem>::State, E>, C>;

pub type AStarSearch<P, C = BasicCache<<P as Problem>::State>> = BestFirstSearch<P, AStar, C>;

pub type GreedySearch<P, C = BasicCache<<P as Problem>::State>> = BestFirstSearch<P, Greedy, C>;

pub type UniformCostSearch<P, C = BasicCache<<P as Problem>::State>> =
    BestFirstSearch<P, UniformCost, C>;

impl<P, E, C> DirectedSearch<P, BestFirstQueue<P::State, E>, C>
where
    P: Problem,
    E: Evaluation<P> + Default,
    C: Cache<P::State> + Default,
{
    pub fn with_frontier(problem: P, frontier: Frontier) -> Self {
        Self::with_parts(
            problem,
            BestFirstQueue::new(E::default(), frontier),
            C::default(),
        )
    }

    /// A best-first search whose frontier re-evaluates states on every pop.
    pub fn updating(problem: P) -> Self {
        Self::with_frontier(problem, Frontier::Updating)
    }
}

/// A* search with duplicate detection and a static frontier.
pub fn astar<P>(problem: P) -> Result<P::State>
where
    P: HeuristicProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search: AStarSearch<P> = DirectedSearch::new(problem);
    search.solve()
}

/// Greedy best-first search with duplicate detection.
pub fn greedy<P>(problem: P) -> Result<P::State>
where
    P: HeuristicProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search: GreedySearch<P> = DirectedSearch::new(problem);
    search.solve()
}

/// Uniform-cost search (Dijkstra's algorithm) with duplicate detection.
pub fn uniform_cost<P>(problem: P) -> Result<P::State>
where
    P: HeuristicProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search: UniformCostSearch<P> = DirectedSearch::new(problem);
    search.solve()
}
