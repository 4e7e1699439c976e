//! Search cacheing support to eliminate already explored states.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Defines the behavior required of a duplicate tracker.
pub trait Cache<T> {
    /// Records a state as expanded.
    ///
    /// Returns `true` if the state was not seen before, so its
    /// successors should be generated.
    fn insert(&mut self, state: &T) -> bool;

    fn contains(&self, state: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Defines the behavior required of a depth-keyed duplicate tracker.
///
/// Used by the recursive algorithms, where reaching a state again on
/// a shorter path makes it worth descending into once more.
pub trait DepthCache<T> {
    /// Records that `state` was reached at `depth`.
    ///
    /// Returns `true` if the state was never reached before, or only
    /// at a strictly greater depth.
    fn visit(&mut self, state: &T, depth: usize) -> bool;

    /// Smallest depth the state was reached at.
    fn depth(&self, state: &T) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Provides no-op caching: every state looks new and nothing is
/// remembered, which disables duplicate detection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoCache;

impl<T> Cache<T> for NoCache {
    fn insert(&mut self, _state: &T) -> bool {
        true
    }

    fn contains(&self, _state: &T) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}

impl<T> DepthCache<T> for NoCache {
    fn visit(&mut self, _state: &T, _depth: usize) -> bool {
        true
    }

    fn depth(&self, _state: &T) -> Option<usize> {
        None
    }

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}

/// Provides a simple hash set cache which
/// will store every search state expanded.
#[derive(Debug, Clone)]
pub struct BasicCache<T> {
    seen: HashSet<T>,
}

impl<T> Default for BasicCache<T> {
    fn default() -> Self {
        BasicCache {
            seen: HashSet::new(),
        }
    }
}

impl<T> Cache<T> for BasicCache<T>
where
    T: Hash + Eq + Clone,
{
    fn insert(&mut self, state: &T) -> bool {
        if self.seen.contains(state) {
            return false;
        }
        self.seen.insert(state.clone())
    }

    fn contains(&self, state: &T) -> bool {
        self.seen.contains(state)
    }

    fn len(&self) -> usize {
        self.seen.len()
    }

    fn clear(&mut self) {
        self.seen.clear();
    }
}

/// Remembers the smallest depth at which each state was reached.
#[derive(Debug, Clone)]
pub struct DepthMap<T> {
    depths: HashMap<T, usize>,
}

impl<T> Default for DepthMap<T> {
    fn default() -> Self {
        DepthMap {
            depths: HashMap::new(),
        }
    }
}

impl<T> DepthCache<T> for DepthMap<T>
where
    T: Hash + Eq + Clone,
{
    fn visit(&mut self, state: &T, depth: usize) -> bool {
        match self.depths.get_mut(state) {
            Some(known) if depth < *known => {
                *known = depth;
                true
            }
            Some(_) => false,
            None => {
                self.depths.insert(state.clone(), depth);
                true
            }
        }
    }

    fn depth(&self, state: &T) -> Option<usize> {
        self.depths.get(state).copied()
    }

    fn len(&self) -> usize {
        self.depths.len()
    }

    fn clear(&mut self) {
        self.depths.clear();
    }
}
