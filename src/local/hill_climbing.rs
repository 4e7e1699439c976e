//! Hill climbing with a pluggable selection strategy and side steps.

use std::cmp::Ordering;

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::strategy::{BestChoice, Strategy};
use super::Direction;
use crate::errors::Result;
use crate::lifecycle::{Search, SearchRun};
use crate::traits::HillClimbingProblem;

/// Greedy local search.
///
/// Moves to the successor picked by the strategy for as long as it is
/// strictly better than the current state. A successor which is only as
/// good as the current state is a side step; up to `side_steps` of them
/// are taken in a row before the climb gives up. The state the climb
/// ends on is the result.
#[derive(Debug)]
pub struct HillClimbing<P, S = BestChoice, R = StdRng>
where
    P: HillClimbingProblem,
{
    problem: P,
    strategy: S,
    direction: Direction,
    side_steps: usize,
    needed_side_steps: usize,
    rng: R,
    run: SearchRun<P::State>,
}

impl<P, S> HillClimbing<P, S, StdRng>
where
    P: HillClimbingProblem,
    S: Strategy<P::State> + Default,
{
    /// A minimum search seeded from the operating system.
    pub fn new(problem: P) -> Self {
        Self::with_rng(problem, StdRng::from_os_rng())
    }
}

impl<P, S, R> HillClimbing<P, S, R>
where
    P: HillClimbingProblem,
    S: Strategy<P::State>,
    R: Rng,
{
    pub fn with_rng(problem: P, rng: R) -> Self
    where
        S: Default,
    {
        Self::with_strategy(problem, S::default(), rng)
    }

    pub fn with_strategy(problem: P, strategy: S, rng: R) -> Self {
        HillClimbing {
            problem,
            strategy,
            direction: Direction::default(),
            side_steps: 0,
            needed_side_steps: 0,
            rng,
            run: SearchRun::new(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_side_steps(mut self, side_steps: usize) -> Self {
        self.side_steps = side_steps;
        self
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Only effective while the search is not initialized.
    pub fn set_strategy(&mut self, strategy: S) -> bool {
        if self.initialized() {
            warn!("Ignoring strategy change of an initialized search");
            return false;
        }
        self.strategy = strategy;
        true
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Only effective while the search is not initialized.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.initialized() {
            warn!("Ignoring direction change of an initialized search");
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn search_minimum(&mut self) -> bool {
        self.set_direction(Direction::Minimum)
    }

    pub fn search_maximum(&mut self) -> bool {
        self.set_direction(Direction::Maximum)
    }

    /// Number of consecutive side steps a climb may take.
    pub fn side_steps(&self) -> usize {
        self.side_steps
    }

    pub fn set_side_steps(&mut self, side_steps: usize) {
        self.side_steps = side_steps;
    }

    /// Side steps taken during the last run.
    pub fn needed_side_steps(&self) -> usize {
        self.needed_side_steps
    }
}

impl<P, S, R> Search for HillClimbing<P, S, R>
where
    P: HillClimbingProblem,
    S: Strategy<P::State>,
    R: Rng,
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
        self.needed_side_steps = 0;
    }

    fn search(&mut self) {
        let problem = &self.problem;
        let strategy = &self.strategy;
        let rng = &mut self.rng;
        let run = &mut self.run;
        let direction = self.direction;
        let allowance = self.side_steps;

        let mut current = match problem.initial() {
            Some(initial) => initial,
            None => return,
        };
        let better =
            |a: &P::State, b: &P::State| -> Ordering { direction.orient(problem.compare(a, b)) };

        let mut consecutive = 0;
        while run.running() {
            let successors = problem.expand(&current);
            if successors.is_empty() {
                run.set_result(current);
                break;
            }
            let next = strategy.select(successors, &current, &better, &mut *rng);
            run.step();

            match better(&next, &current) {
                Ordering::Greater => consecutive = 0,
                Ordering::Equal if consecutive < allowance => {
                    consecutive += 1;
                    self.needed_side_steps += 1;
                    trace!("Side step {} of {}", consecutive, allowance);
                }
                _ => {
                    run.set_result(current);
                    break;
                }
            }
            current = next;
        }
    }
}

/// Climbs from the initial state of `problem` using [BestChoice].
pub fn hill_climb<P>(problem: P, direction: Direction) -> Result<P::State>
where
    P: HillClimbingProblem,
{
    let mut search: HillClimbing<P> = HillClimbing::new(problem).with_direction(direction);
    search.solve()
}
