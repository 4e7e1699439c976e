//! A priority queue which tolerates priorities changing after insertion.
//!
//! [SortedQueue] keeps its elements in insertion order and searches for the
//! minimum on every [SortedQueue::peek] and [SortedQueue::poll]. Offering is
//! O(1), polling is O(n). Unlike a heap, the queue stays correct when the
//! comparison result of an element already in the queue changes, either
//! because the element was mutated through [SortedQueue::iter_mut] or because
//! the comparator reads state which changed.

use std::cmp::Ordering;
use std::fmt;

/// Position of the first minimal element under `compare`.
fn min_position<T, C>(items: &[T], mut compare: C) -> Option<usize>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let mut best: Option<usize> = None;
    for (index, item) in items.iter().enumerate() {
        match best {
            Some(b) if compare(item, &items[b]) != Ordering::Less => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Insertion-ordered queue which polls its current minimum.
///
/// Ties are broken in favor of the element which was offered first.
pub struct SortedQueue<T, F = fn(&T, &T) -> Ordering> {
    items: Vec<T>,
    compare: F,
}

impl<T> SortedQueue<T>
where
    T: Ord,
{
    /// A queue ordered by the natural order of its elements.
    pub fn natural() -> Self {
        SortedQueue {
            items: Vec::new(),
            compare: T::cmp,
        }
    }
}

impl<T, F> SortedQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        SortedQueue {
            items: Vec::new(),
            compare,
        }
    }

    /// Appends an element. Its position in the queue does not depend on
    /// its priority.
    ///
    /// Debug builds panic when the comparator does not consider `value`
    /// equal to itself (a NaN priority, for example). Release builds skip
    /// this check and such an element polls in an unspecified position.
    pub fn offer(&mut self, value: T) {
        debug_assert!(
            (self.compare)(&value, &value) == Ordering::Equal,
            "comparator must consider an element equal to itself"
        );
        self.items.push(value);
    }

    /// The current minimum.
    pub fn peek(&self) -> Option<&T> {
        let compare = &self.compare;
        min_position(&self.items, |a, b| compare(a, b)).map(|index| &self.items[index])
    }

    /// Removes and returns the current minimum.
    pub fn poll(&mut self) -> Option<T> {
        let compare = &self.compare;
        let index = min_position(&self.items, |a, b| compare(a, b))?;
        Some(self.items.remove(index))
    }
}

impl<T, F> SortedQueue<T, F> {
    /// The minimum under an external comparator.
    pub fn peek_by<C>(&self, compare: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        min_position(&self.items, compare).map(|index| &self.items[index])
    }

    /// Removes the minimum under an external comparator.
    pub fn poll_by<C>(&mut self, compare: C) -> Option<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let index = min_position(&self.items, compare)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Walks the queue in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Walks the queue in insertion order, allowing priorities to change.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Keeps only the elements matching the predicate, in their original order.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
    }
}

impl<T, F> fmt::Debug for SortedQueue<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedQueue")
            .field("items", &self.items)
            .finish()
    }
}

impl<T, F> Extend<T> for SortedQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

impl<T, F> IntoIterator for SortedQueue<T, F> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, F> IntoIterator for &'a SortedQueue<T, F> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashMap;

    #[test]
    fn polls_in_priority_order() {
        let mut queue = SortedQueue::natural();
        queue.extend(vec![5, 3, 8, 1, 9, 2]);

        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 6);

        let mut polled = Vec::new();
        while let Some(value) = queue.poll() {
            polled.push(value);
        }
        assert_eq!(polled, vec![1, 2, 3, 5, 8, 9]);
        assert!(queue.is_empty());
        assert_eq!(queue.poll(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut queue = SortedQueue::natural();
        queue.extend(vec![4, 1, 3]);
        queue.poll();
        queue.offer(0);
        let values: Vec<_> = queue.iter().copied().collect();
        assert_eq!(values, vec![4, 3, 0]);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![4, 3, 0]);
    }

    #[test]
    fn ties_go_to_the_earliest_insertion() {
        let mut queue = SortedQueue::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        queue.offer((2, 'a'));
        queue.offer((1, 'b'));
        queue.offer((1, 'c'));
        queue.offer((2, 'd'));
        queue.offer((1, 'e'));

        let order: String = std::iter::from_fn(|| queue.poll()).map(|(_, c)| c).collect();
        assert_eq!(order, "bcead");
    }

    #[test]
    fn mutated_elements_are_reordered() {
        let mut queue = SortedQueue::natural();
        queue.extend(vec![10, 20, 30]);

        for value in queue.iter_mut() {
            if *value == 30 {
                *value = 5;
            }
        }
        assert_eq!(queue.poll(), Some(5));

        for value in queue.iter_mut() {
            *value = 40 - *value;
        }
        assert_eq!(queue.poll(), Some(20));
        assert_eq!(queue.poll(), Some(30));
    }

    #[test]
    fn comparator_reading_shared_priorities() {
        let priorities: RefCell<HashMap<&str, u32>> = RefCell::new(HashMap::new());
        let mut queue = SortedQueue::new(|a: &&str, b: &&str| {
            let priorities = priorities.borrow();
            priorities[a].cmp(&priorities[b])
        });

        for (name, priority) in [("alpha", 3), ("beta", 2), ("gamma", 1)] {
            priorities.borrow_mut().insert(name, priority);
            queue.offer(name);
        }
        assert_eq!(queue.peek(), Some(&"gamma"));

        priorities.borrow_mut().insert("alpha", 0);
        assert_eq!(queue.poll(), Some("alpha"));

        priorities.borrow_mut().insert("beta", 1);
        assert_eq!(queue.poll(), Some("beta"));
        assert_eq!(queue.poll(), Some("gamma"));
    }

    #[test]
    fn external_comparator() {
        let mut queue = SortedQueue::natural();
        queue.extend(vec![1, 2, 3]);
        assert_eq!(queue.peek_by(|a: &i32, b: &i32| b.cmp(a)), Some(&3));
        assert_eq!(queue.poll_by(|a: &i32, b: &i32| b.cmp(a)), Some(3));

        queue.retain(|v| *v != 1);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&2]);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "comparator must consider an element equal to itself")]
    fn incomparable_element_is_rejected() {
        let mut queue =
            SortedQueue::new(|a: &f64, b: &f64| a.partial_cmp(b).unwrap_or(Ordering::Less));
        queue.offer(1.0);
        queue.offer(f64::NAN);
    }
}
