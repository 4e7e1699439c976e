//! Simulated annealing over a [SimulatedAnnealingProblem].
//!
//! Each step picks one successor of the current state at random. Better
//! successors are always accepted, worse ones with probability
//! `exp(delta / temperature)`. The temperature cools by a constant factor
//! on every step which does not improve on the best state seen so far,
//! and the search ends after `patience` such steps in a row.

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Direction;
use crate::errors::{Result, SearchError};
use crate::lifecycle::{Search, SearchRun};
use crate::traits::SimulatedAnnealingProblem;

/// Cooling schedule of a [SimulatedAnnealing] search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    temperature: f64,
    factor: f64,
    patience: usize,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            temperature: 10.0,
            factor: 0.95,
            patience: 100,
        }
    }
}

fn valid_temperature(temperature: f64) -> bool {
    temperature > 0.0
}

fn valid_factor(factor: f64) -> bool {
    factor > 0.0 && factor < 1.0
}

impl Schedule {
    /// Fails unless `temperature > 0`, `0 < factor < 1` and `patience > 0`.
    pub fn new(temperature: f64, factor: f64, patience: usize) -> Result<Self> {
        if !valid_temperature(temperature) {
            return Err(SearchError::InvalidTemperature(temperature));
        }
        if !valid_factor(factor) {
            return Err(SearchError::InvalidCoolingFactor(factor));
        }
        if patience == 0 {
            return Err(SearchError::InvalidPatience(patience));
        }
        Ok(Schedule {
            temperature,
            factor,
            patience,
        })
    }

    /// Temperature at the start of every run.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Number of steps in a row without a new best state before
    /// the search gives up.
    pub fn patience(&self) -> usize {
        self.patience
    }
}

#[derive(Debug)]
pub struct SimulatedAnnealing<P, R = StdRng>
where
    P: SimulatedAnnealingProblem,
{
    problem: P,
    direction: Direction,
    schedule: Schedule,
    rng: R,
    run: SearchRun<P::State>,
}

impl<P> SimulatedAnnealing<P, StdRng>
where
    P: SimulatedAnnealingProblem,
{
    /// A minimum search with the default schedule, seeded from the
    /// operating system.
    pub fn new(problem: P) -> Self {
        Self::with_rng(problem, StdRng::from_os_rng())
    }
}

impl<P, R> SimulatedAnnealing<P, R>
where
    P: SimulatedAnnealingProblem,
    R: Rng,
{
    pub fn with_rng(problem: P, rng: R) -> Self {
        SimulatedAnnealing {
            problem,
            direction: Direction::default(),
            schedule: Schedule::default(),
            rng,
            run: SearchRun::new(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Replaces the cooling schedule. A [Schedule] is validated when it is
    /// built, so this cannot fail.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Ignores temperatures which are not positive.
    pub fn set_initial_temperature(&mut self, temperature: f64) -> bool {
        if !valid_temperature(temperature) {
            warn!("Ignoring initial temperature {}", temperature);
            return false;
        }
        self.schedule.temperature = temperature;
        true
    }

    /// Ignores factors outside of `(0, 1)`.
    pub fn set_factor(&mut self, factor: f64) -> bool {
        if !valid_factor(factor) {
            warn!("Ignoring cooling factor {}", factor);
            return false;
        }
        self.schedule.factor = factor;
        true
    }

    /// Ignores a patience of zero.
    pub fn set_patience(&mut self, patience: usize) -> bool {
        if patience == 0 {
            warn!("Ignoring patience {}", patience);
            return false;
        }
        self.schedule.patience = patience;
        true
    }

    /// How much better `a` is than `b` in the search direction.
    fn gain(&self, a: &P::State, b: &P::State) -> f64 {
        self.direction
            .orient_difference(self.problem.difference(a, b))
    }
}

impl<P, R> Search for SimulatedAnnealing<P, R>
where
    P: SimulatedAnnealingProblem,
    P::State: Clone,
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

    fn prepare(&mut self) {}

    fn search(&mut self) {
        let mut current = match self.problem.initial() {
            Some(initial) => initial,
            None => return,
        };
        let mut best = current.clone();
        let mut successors = self.problem.expand(&current);
        let mut temperature = self.schedule.temperature;
        let mut same = 0;

        while same < self.schedule.patience && self.run.running() {
            if successors.is_empty() {
                break;
            }
            let pick = self.rng.random_range(0..successors.len());
            self.run.step();

            let delta = self.gain(&successors[pick], &current);
            if delta > 0.0 || self.rng.random::<f64>() < (delta / temperature).exp() {
                current = successors.swap_remove(pick);
                successors = self.problem.expand(&current);
                trace!("Moved by {} at temperature {}", delta, temperature);
            }

            if self.gain(&current, &best) > 0.0 {
                best = current.clone();
                same = 0;
            } else {
                same += 1;
                temperature *= self.schedule.factor;
            }
        }
        self.run.set_result(best);
    }
}

/// Anneals from the initial state of `problem` with the default schedule.
pub fn anneal<P>(problem: P, direction: Direction) -> Result<P::State>
where
    P: SimulatedAnnealingProblem,
    P::State: Clone,
{
    let mut search = SimulatedAnnealing::new(problem).with_direction(direction);
    search.solve()
}
