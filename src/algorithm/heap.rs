//! A binary min-heap of states keyed by an evaluation fixed at insertion.
//!
//! [std::collections::BinaryHeap] would need a total order on the entries
//! and breaks ties differently. This heap sifts an entry up only past
//! strictly larger parents and down only past strictly smaller children,
//! preferring the left child on ties, so runs are reproducible across
//! platforms and match the classic array heap layout.

use std::cmp::Ordering;

#[derive(Debug)]
struct Entry<T> {
    key: f64,
    state: T,
}

#[derive(Debug)]
pub(crate) struct EvaluatedHeap<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for EvaluatedHeap<T> {
    fn default() -> Self {
        EvaluatedHeap {
            entries: Vec::new(),
        }
    }
}

fn less(a: f64, b: f64) -> bool {
    a.total_cmp(&b) == Ordering::Less
}

impl<T> EvaluatedHeap<T> {
    pub(crate) fn push(&mut self, key: f64, state: T) {
        self.entries.push(Entry { key, state });
        let mut child = self.entries.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if !less(self.entries[child].key, self.entries[parent].key) {
                break;
            }
            self.entries.swap(child, parent);
            child = parent;
        }
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);

        let len = self.entries.len();
        let mut parent = 0;
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && less(self.entries[right].key, self.entries[left].key) {
                right
            } else {
                left
            };
            if !less(self.entries[child].key, self.entries[parent].key) {
                break;
            }
            self.entries.swap(parent, child);
            parent = child;
        }
        Some(top.state)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
