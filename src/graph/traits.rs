use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, Zero};

/// Marker trait for vertex identifiers.
///
/// Any clonable, hashable, totally ordered key works; strings and integers
/// in practice. Ordering is only used to break ties between equal-distance
/// frontier entries, so the choice of order never affects distances.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<K> VertexId for K where K: Clone + Eq + Hash + Ord + Debug {}

/// Trait representing a weighted directed graph keyed by vertex identifier
pub trait Graph<K, W>: Debug
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex key the graph knows about
    fn vertices(&self) -> Box<dyn Iterator<Item = K> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// Keys the graph has never seen yield an empty iterator, so a vertex
    /// that only ever appears as someone's neighbor simply has no outgoing
    /// edges of its own.
    fn neighbors(&self, vertex: &K) -> Box<dyn Iterator<Item = (K, W)> + '_>;

    /// Returns true if the vertex exists in the graph's vertex set
    fn contains_vertex(&self, vertex: &K) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &K, to: &K) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &K, to: &K) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<K, W>: Graph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph; returns false if it was already present
    fn add_vertex(&mut self, vertex: K) -> bool;

    /// Removes a vertex and its connected edges from the graph
    fn remove_vertex(&mut self, vertex: &K) -> bool;

    /// Adds a directed edge between existing vertices with the given
    /// non-negative weight, replacing any previous weight
    fn add_edge(&mut self, from: K, to: K, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &K, to: &K) -> bool;
}
