//! Bookkeeping shared by the solvers: the predecessor map, which doubles as the visited set,
//! and a binary heap that pops equal priorities in insertion order.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor of the search root.
const ROOT: usize = usize::MAX;

struct SmallestPriorityHolder {
    priority: f64,
    sequence: u64,
    index: usize,
}

impl Eq for SmallestPriorityHolder {}

impl PartialEq for SmallestPriorityHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestPriorityHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestPriorityHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: the max-heap then yields the smallest priority,
        // and among equal priorities the earliest insertion.
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority queue of cell indices with first-in-first-out tie-breaking.
#[derive(Default)]
pub struct StableHeap {
    heap: BinaryHeap<SmallestPriorityHolder>,
    next_sequence: u64,
}

impl StableHeap {
    pub fn new() -> StableHeap {
        StableHeap::default()
    }
    pub fn push(&mut self, priority: f64, index: usize) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.next_sequence,
            index,
        });
        self.next_sequence += 1;
    }
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|holder| holder.index)
    }
}

/// Per-search state. A cell is visited once it has an entry in `parents`; entries are never
/// overwritten, so the first discovery fixes the predecessor.
pub struct SearchContext {
    parents: FxIndexMap<usize, usize>,
    expanded: Vec<usize>,
}

impl SearchContext {
    pub fn new(root: usize) -> SearchContext {
        let mut parents = FxIndexMap::default();
        parents.insert(root, ROOT);
        SearchContext {
            parents,
            expanded: Vec::new(),
        }
    }

    pub fn visited(&self, index: usize) -> bool {
        self.parents.contains_key(&index)
    }

    /// Records `index` as reached from `parent`. Returns [false] if it was already visited.
    pub fn discover(&mut self, index: usize, parent: usize) -> bool {
        match self.parents.entry(index) {
            Vacant(e) => {
                e.insert(parent);
                true
            }
            Occupied(_) => false,
        }
    }

    pub fn expand(&mut self, index: usize) {
        self.expanded.push(index);
    }

    /// Follows predecessor links from `end` back to the root and returns the route root first.
    pub fn reverse_path(&self, end: usize) -> Vec<usize> {
        let mut path: Vec<usize> = std::iter::successors(Some(end), |ix| {
            self.parents.get(ix).copied().filter(|&p| p != ROOT)
        })
        .collect();
        path.reverse();
        path
    }

    /// Cells in expansion order.
    pub fn into_expanded(self) -> Vec<usize> {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_smallest_then_oldest() {
        let mut heap = StableHeap::new();
        heap.push(2.0, 10);
        heap.push(1.0, 11);
        heap.push(2.0, 12);
        heap.push(1.0, 13);
        heap.push(0.5, 14);
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(order, vec![14, 11, 13, 10, 12]);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn first_discovery_wins() {
        let mut ct = SearchContext::new(0);
        assert!(ct.visited(0));
        assert!(ct.discover(1, 0));
        assert!(ct.discover(2, 1));
        assert!(!ct.discover(2, 0));
        assert!(ct.discover(3, 2));
        assert_eq!(ct.reverse_path(3), vec![0, 1, 2, 3]);
        assert_eq!(ct.reverse_path(0), vec![0]);
    }
}
