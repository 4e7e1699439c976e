use std::cmp::Ordering;

/// Describes a search space to the search algorithms.
///
/// The algorithms never look inside a state, they only hand states
/// back to the problem. When duplicate detection is used, the
/// `Hash` and `Eq` implementations of the state must agree on
/// which states are identical.
pub trait Problem {
    type State;

    /// The state where every search starts.
    ///
    /// Returning `None` means the problem is not ready to be searched,
    /// in which case searches refuse to initialize.
    fn initial(&self) -> Option<Self::State>;

    /// Indicates that this state solves the problem.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the successors of a state. Terminal states
    /// produce an empty list.
    fn expand(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A problem whose states sit at a known depth in the search tree.
pub trait TreeProblem: Problem {
    /// Depth of a state, zero for the initial state by convention.
    fn depth(&self, state: &Self::State) -> usize;
}

/// An interface for searching when a heuristic can be provided.
///
/// The algorithms cannot verify it, but A* and IDA* are only optimal
/// when `h` is admissible (it never overestimates the remaining cost)
/// and consistent (`h(s) <= h(s') + cost(s, s')` along every edge).
pub trait HeuristicProblem: TreeProblem {
    /// Cost of the path which led to this state.
    fn g(&self, state: &Self::State) -> f64;

    /// Best guess of the remaining cost to a goal.
    fn h(&self, state: &Self::State) -> f64;
}

/// A problem which can also be searched backwards from an explicit goal.
pub trait BidirectionalProblem: Problem {
    /// The goal state where the backward search starts.
    fn goal(&self) -> Option<Self::State>;

    /// Produces the predecessors of a state.
    fn implode(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A problem whose states are totally ordered by quality.
pub trait HillClimbingProblem: Problem {
    /// Natural order of the two states' values. A minimum search
    /// prefers `Less`, a maximum search prefers `Greater`.
    fn compare(&self, a: &Self::State, b: &Self::State) -> Ordering;
}

/// A problem with a signed distance between state values.
pub trait SimulatedAnnealingProblem: Problem {
    /// `value(a) - value(b)`. Must be antisymmetric.
    fn difference(&self, a: &Self::State, b: &Self::State) -> f64;
}

impl<P> Problem for &P
where
    P: Problem + ?Sized,
{
    type State = P::State;

    fn initial(&self) -> Option<Self::State> {
        (**self).initial()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn expand(&self, state: &Self::State) -> Vec<Self::State> {
        (**self).expand(state)
    }
}

impl<P> TreeProblem for &P
where
    P: TreeProblem + ?Sized,
{
    fn depth(&self, state: &Self::State) -> usize {
        (**self).depth(state)
    }
}

impl<P> HeuristicProblem for &P
where
    P: HeuristicProblem + ?Sized,
{
    fn g(&self, state: &Self::State) -> f64 {
        (**self).g(state)
    }

    fn h(&self, state: &Self::State) -> f64 {
        (**self).h(state)
    }
}

impl<P> BidirectionalProblem for &P
where
    P: BidirectionalProblem + ?Sized,
{
    fn goal(&self) -> Option<Self::State> {
        (**self).goal()
    }

    fn implode(&self, state: &Self::State) -> Vec<Self::State> {
        (**self).implode(state)
    }
}

impl<P> HillClimbingProblem for &P
where
    P: HillClimbingProblem + ?Sized,
{
    fn compare(&self, a: &Self::State, b: &Self::State) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<P> SimulatedAnnealingProblem for &P
where
    P: SimulatedAnnealingProblem + ?Sized,
{
    fn difference(&self, a: &Self::State, b: &Self::State) -> f64 {
        (**self).difference(a, b)
    }
}
