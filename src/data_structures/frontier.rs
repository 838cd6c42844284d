use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered frontier of (priority, vertex) pairs for relaxation loops.
///
/// Superseded entries are never removed eagerly. A vertex whose priority
/// improves is simply pushed again; callers discard the stale entry at pop
/// time by comparing the popped priority against their current best. Ties on
/// priority fall back to the vertex ordering.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Clone + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap, reversed into a min-heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Clone + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the frontier, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a vertex at the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the minimum-priority entry
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the minimum-priority entry without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (vertex.clone(), *priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Clone + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
