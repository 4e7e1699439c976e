//! Ways for hill climbing to pick the next state.

use std::cmp::Ordering;

use rand::Rng;

/// Picks the next state of a hill climb from a non-empty list of successors.
///
/// `better(a, b)` returns `Greater` when `a` is better than `b`. An
/// implementation must return a strictly better successor than `current`
/// if there is one, otherwise an equally good one if there is one,
/// otherwise any successor.
pub trait Strategy<T> {
    fn select<R>(
        &self,
        successors: Vec<T>,
        current: &T,
        better: &dyn Fn(&T, &T) -> Ordering,
        rng: &mut R,
    ) -> T
    where
        R: Rng;
}

/// Scans every successor, starting at a random offset, and keeps the best.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestChoice;

impl<T> Strategy<T> for BestChoice {
    fn select<R>(
        &self,
        mut successors: Vec<T>,
        _current: &T,
        better: &dyn Fn(&T, &T) -> Ordering,
        rng: &mut R,
    ) -> T
    where
        R: Rng,
    {
        let size = successors.len();
        let base = rng.random_range(0..size);
        let mut best = base;
        for offset in 1..size {
            let next = (base + offset) % size;
            if better(&successors[next], &successors[best]) == Ordering::Greater {
                best = next;
            }
        }
        successors.swap_remove(best)
    }
}

/// Returns the first strictly better successor, starting at a random offset.
///
/// Without one, falls back to the last equally good successor seen, and
/// without that to the successor at the offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstChoice;

impl<T> Strategy<T> for FirstChoice {
    fn select<R>(
        &self,
        mut successors: Vec<T>,
        current: &T,
        better: &dyn Fn(&T, &T) -> Ordering,
        rng: &mut R,
    ) -> T
    where
        R: Rng,
    {
        let size = successors.len();
        let base = rng.random_range(0..size);
        let mut alternative = base;
        for offset in 0..size {
            let next = (base + offset) % size;
            match better(&successors[next], current) {
                Ordering::Greater => return successors.swap_remove(next),
                Ordering::Equal => alternative = next,
                Ordering::Less => {}
            }
        }
        successors.swap_remove(alternative)
    }
}
