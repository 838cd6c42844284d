use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::traits::{Graph, MutableGraph, VertexId};
use crate::{Error, Result};

/// A weighted directed graph stored as nested adjacency maps:
/// vertex key -> neighbor key -> edge weight.
///
/// The vertex set is the set of top-level keys. A neighbor key that never
/// appears at the top level is a "phantom" vertex: it can be reached through
/// incoming edges but has no outgoing edges of its own.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    adjacency: HashMap<K, HashMap<K, W>>,
}

impl<K, W> AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph sized for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from directed (from, to, weight) triples, adding both
    /// endpoints to the vertex set
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a symmetric pair of directed edges with the same weight
    pub fn add_undirected_edge(&mut self, a: K, b: K, weight: W) -> bool {
        self.add_edge(a.clone(), b.clone(), weight) && self.add_edge(b, a, weight)
    }

    /// Checks the non-negativity precondition explicitly.
    ///
    /// The shortest-path engine never inspects weights itself; running it on
    /// a graph that fails this check yields meaningless output rather than a
    /// runtime fault, so callers that cannot trust their input should
    /// validate first.
    pub fn validate_non_negative(&self) -> Result<()> {
        for (from, neighbors) in &self.adjacency {
            for (to, weight) in neighbors {
                if *weight < W::zero() {
                    return Err(Error::NegativeWeight(format!(
                        "{:?} on edge {:?} -> {:?}",
                        weight, from, to
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<K, W> Default for AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a mapping-of-mappings literal directly. Unlike `add_edge`, this
/// performs no weight or vertex checks, so it can express phantom neighbors
/// and (deliberately malformed) negative-weight graphs for validation tests.
impl<K, W> From<HashMap<K, HashMap<K, W>>> for AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn from(adjacency: HashMap<K, HashMap<K, W>>) -> Self {
        AdjacencyGraph { adjacency }
    }
}

impl<K, W> Graph<K, W> for AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(self.adjacency.keys().cloned())
    }

    fn neighbors(&self, vertex: &K) -> Box<dyn Iterator<Item = (K, W)> + '_> {
        if let Some(neighbors) = self.adjacency.get(vertex) {
            Box::new(neighbors.iter().map(|(to, weight)| (to.clone(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_vertex(&self, vertex: &K) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |neighbors| neighbors.contains_key(to))
    }

    fn edge_weight(&self, from: &K, to: &K) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to).copied())
    }
}

impl<K, W> MutableGraph<K, W> for AdjacencyGraph<K, W>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: K) -> bool {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(HashMap::new());
                true
            }
        }
    }

    fn remove_vertex(&mut self, vertex: &K) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        true
    }

    fn add_edge(&mut self, from: K, to: K, weight: W) -> bool {
        if weight < W::zero()
            || !self.adjacency.contains_key(&from)
            || !self.adjacency.contains_key(&to)
        {
            return false;
        }

        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to, weight);
        }
        true
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        self.adjacency
            .get_mut(from)
            .map_or(false, |neighbors| neighbors.remove(to).is_some())
    }
}
