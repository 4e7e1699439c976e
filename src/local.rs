//! Local searches which only ever look at the current state and its
//! successors.
//!
//! Neither search needs a goal test, and neither is complete or optimal.
//! Both return some state whenever the initial state exists.

use std::cmp::Ordering;

pub mod annealing;
pub mod hill_climbing;
pub mod strategy;

/// Which end of the value range a local search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Minimum,
    Maximum,
}

impl Direction {
    /// Turns the natural order of two states into a preference:
    /// `Greater` means the first state is the better one.
    pub fn orient(self, natural: Ordering) -> Ordering {
        match self {
            Direction::Minimum => natural.reverse(),
            Direction::Maximum => natural,
        }
    }

    /// Turns `value(a) - value(b)` into how much better `a` is than `b`.
    pub fn orient_difference(self, difference: f64) -> f64 {
        match self {
            Direction::Minimum => -difference,
            Direction::Maximum => difference,
        }
    }
}
