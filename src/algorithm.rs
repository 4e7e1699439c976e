//! Provides the building blocks for search algorithms

use log::{debug, trace};

use self::cache::Cache;
use crate::lifecycle::{Search, SearchRun};
use crate::traits::Problem;

pub mod basic;
pub mod best_first;
pub mod bidirectional;
pub mod cache;
pub mod depth_first;
pub mod depth_limited;
pub(crate) mod heap;
pub mod idastar;
pub mod iterative;

/// Trait used to implement frontiers of states which
/// are waiting to be expanded.
///
/// The problem is handed to every operation so that ordered
/// frontiers can evaluate states.
pub trait SearchQueue<P>
where
    P: Problem + ?Sized,
{
    fn push(&mut self, problem: &P, state: P::State);

    fn pop(&mut self, problem: &P) -> Option<P::State>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Options which adjust how a search reports on itself.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Log a progress line every this many steps.
    pub verbose: Option<usize>,
}

impl SearchOptions {
    pub fn verbose(every: usize) -> Self {
        SearchOptions {
            verbose: Some(every),
        }
    }

    fn report(&self, step: usize) -> bool {
        match self.verbose {
            Some(every) if every > 0 => step.is_multiple_of(every),
            _ => false,
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to provide
/// a single foundation for breadth-first, depth-first and all
/// best-first searches. The goal test happens when a state is
/// popped, so breadth-first search returns a shallowest goal.
#[derive(Debug)]
pub struct DirectedSearch<P, Q, C>
where
    P: Problem,
{
    problem: P,
    queue: Q,
    cache: C,
    options: SearchOptions,
    run: SearchRun<P::State>,
}

impl<P, Q, C> DirectedSearch<P, Q, C>
where
    P: Problem,
    Q: SearchQueue<P> + Default,
    C: Cache<P::State> + Default,
{
    pub fn new(problem: P) -> Self {
        Self::with_parts(problem, Q::default(), C::default())
    }
}

impl<P, Q, C> DirectedSearch<P, Q, C>
where
    P: Problem,
    Q: SearchQueue<P>,
    C: Cache<P::State>,
{
    /// Builds a search from an explicit frontier and duplicate tracker.
    pub fn with_parts(problem: P, queue: Q, cache: C) -> Self {
        DirectedSearch {
            problem,
            queue,
            cache,
            options: SearchOptions::default(),
            run: SearchRun::new(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn frontier(&self) -> &Q {
        &self.queue
    }

    /// Number of nodes branched during the last run.
    pub fn branched_nodes(&self) -> usize {
        self.run.needed_steps()
    }
}

impl<P, Q, C> Search for DirectedSearch<P, Q, C>
where
    P: Problem,
    Q: SearchQueue<P>,
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
        self.queue.clear();
        self.cache.clear();
    }

    fn search(&mut self) {
        let problem = &self.problem;
        let queue = &mut self.queue;
        let cache = &mut self.cache;
        let run = &mut self.run;

        queue.clear();
        cache.clear();
        if let Some(initial) = problem.initial() {
            queue.push(problem, initial);
        }

        while run.running() {
            let current = match queue.pop(problem) {
                Some(current) => current,
                None => break,
            };

            if problem.is_goal(&current) {
                run.set_result(current);
                break;
            }

            run.step();
            if self.options.report(run.needed_steps()) {
                debug!(
                    "Q{} C{} S{}",
                    queue.len(),
                    cache.len(),
                    run.needed_steps()
                );
            }

            if cache.insert(&current) {
                let successors = problem.expand(&current);
                trace!(
                    "Step {} branched into {} states",
                    run.needed_steps(),
                    successors.len()
                );
                for successor in successors {
                    queue.push(problem, successor);
                }
            }
        }
    }
}
