use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::{Graph, VertexId};

/// Result of one shortest-path computation.
///
/// Both tables contain every vertex of the graph's vertex set plus any
/// phantom neighbors discovered during relaxation, each exactly once.
/// Iteration order over the tables is unspecified.
#[derive(Debug, Clone)]
pub struct ShortestPaths<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Start vertex the tables are relative to
    pub source: K,

    /// Minimum total edge weight from the source to each vertex;
    /// `W::infinity()` when no finite-weight path exists
    pub distances: HashMap<K, W>,

    /// One witness path (source..=vertex) per vertex, empty when the
    /// vertex is unreachable. When several paths tie on total weight the
    /// witness is an arbitrary one of them.
    pub paths: HashMap<K, Vec<K>>,
}

impl<K, W> ShortestPaths<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to a vertex, or None for keys the computation never saw
    pub fn distance(&self, vertex: &K) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Witness path to a vertex, or None for keys the computation never saw
    pub fn path(&self, vertex: &K) -> Option<&[K]> {
        self.paths.get(vertex).map(|path| path.as_slice())
    }

    /// Returns true if a finite-weight path from the source reaches the vertex
    pub fn is_reachable(&self, vertex: &K) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |distance| distance.is_finite())
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
    G: Graph<K, W>,
{
    /// Compute shortest paths from a source vertex to every vertex the
    /// graph knows about.
    ///
    /// Never fails under the non-negative-weight precondition: a source the
    /// graph has never seen yields the degenerate single-vertex result, and
    /// disconnected vertices come back with infinite distance.
    fn shortest_paths(&self, graph: &G, source: &K) -> ShortestPaths<K, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
