//! Breadth-first search from both ends of a problem.
//!
//! One frontier grows forward from the initial state with
//! [crate::Problem::expand], the other backward from the goal with
//! [BidirectionalProblem::implode]. Each step pops one state from
//! each side, and the search ends when a popped state has already
//! been generated by the opposite side.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use log::trace;

use crate::errors::{Result, SearchError};
use crate::lifecycle::{Search, SearchRun};
use crate::traits::BidirectionalProblem;

#[derive(Debug)]
pub struct BidirectionalSearch<P>
where
    P: BidirectionalProblem,
{
    problem: P,
    forward: VecDeque<P::State>,
    backward: VecDeque<P::State>,
    forward_seen: HashSet<P::State>,
    backward_seen: HashSet<P::State>,
    back_hit: Option<P::State>,
    run: SearchRun<P::State>,
}

impl<P> BidirectionalSearch<P>
where
    P: BidirectionalProblem,
    P::State: Hash + Eq + Clone,
{
    pub fn new(problem: P) -> Self {
        BidirectionalSearch {
            problem,
            forward: VecDeque::new(),
            backward: VecDeque::new(),
            forward_seen: HashSet::new(),
            backward_seen: HashSet::new(),
            back_hit: None,
            run: SearchRun::new(),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The meeting state as generated by the forward search.
    pub fn hit_from_front(&self) -> Option<&P::State> {
        self.run.result()
    }

    /// The meeting state as generated by the backward search.
    ///
    /// Equal to [BidirectionalSearch::hit_from_front], but it may carry
    /// the backward path where states record how they were reached.
    pub fn hit_from_back(&self) -> Option<&P::State> {
        self.back_hit.as_ref()
    }

    pub fn take_hit_from_back(&mut self) -> Option<P::State> {
        self.back_hit.take()
    }

    /// Each step branches one node on either side.
    pub fn branched_nodes(&self) -> usize {
        2 * self.run.needed_steps()
    }
}

impl<P> Search for BidirectionalSearch<P>
where
    P: BidirectionalProblem,
    P::State: Hash + Eq + Clone,
{
    type State = P::State;

    fn search_run(&self) -> &SearchRun<P::State> {
        &self.run
    }

    fn search_run_mut(&mut self) -> &mut SearchRun<P::State> {
        &mut self.run
    }

    fn can_prepare(&self) -> bool {
        self.problem.initial().is_some() && self.problem.goal().is_some()
    }

    fn prepare(&mut self) {
        self.forward.clear();
        self.backward.clear();
        self.forward_seen.clear();
        self.backward_seen.clear();
        self.back_hit = None;
    }

    fn search(&mut self) {
        let (start, goal) = match (self.problem.initial(), self.problem.goal()) {
            (Some(start), Some(goal)) => (start, goal),
            _ => return,
        };
        self.forward_seen.insert(start.clone());
        self.forward.push_back(start);
        self.backward_seen.insert(goal.clone());
        self.backward.push_back(goal);

        while self.run.running() {
            let (upper, lower) = match (self.forward.pop_front(), self.backward.pop_front()) {
                (Some(upper), Some(lower)) => (upper, lower),
                _ => break,
            };

            if let Some(hit) = self.backward_seen.get(&upper) {
                self.back_hit = Some(hit.clone());
                self.run.set_result(upper);
                break;
            }
            if let Some(hit) = self.forward_seen.get(&lower) {
                self.run.set_result(hit.clone());
                self.back_hit = Some(lower);
                break;
            }

            self.run.step();
            for successor in self.problem.expand(&upper) {
                if !self.forward_seen.contains(&successor) {
                    self.forward_seen.insert(successor.clone());
                    self.forward.push_back(successor);
                }
            }
            for predecessor in self.problem.implode(&lower) {
                if !self.backward_seen.contains(&predecessor) {
                    self.backward_seen.insert(predecessor.clone());
                    self.backward.push_back(predecessor);
                }
            }
            trace!(
                "Step {}: {} forward, {} backward",
                self.run.needed_steps(),
                self.forward.len(),
                self.backward.len()
            );
        }
    }
}

/// Runs a bidirectional search and returns the meeting state as seen
/// from the front and from the back.
pub fn bidirectional<P>(problem: P) -> Result<(P::State, P::State)>
where
    P: BidirectionalProblem,
    P::State: Hash + Eq + Clone,
{
    let mut search = BidirectionalSearch::new(problem);
    let front = search.solve()?;
    let back = search
        .take_hit_from_back()
        .ok_or(SearchError::NoResultFound)?;
    Ok((front, back))
}
