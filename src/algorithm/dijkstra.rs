use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexId};

/// Classic Dijkstra's algorithm over keyed graphs.
///
/// Non-negative edge weights are a precondition; a negative weight breaks
/// the invariant that a popped vertex's distance is final, and the engine
/// does not detect the violation.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(&self, graph: &G, source: &K) -> ShortestPaths<K, W> {
        // Every known vertex starts unreachable
        let mut distances: HashMap<K, W> =
            graph.vertices().map(|v| (v, W::infinity())).collect();
        let mut predecessors: HashMap<K, K> = HashMap::new();

        // A source absent from the vertex set still settles at distance
        // zero; it just has no outgoing edges to relax
        distances.insert(source.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());

        let mut settled = 0usize;

        while let Some((u, dist_u)) = frontier.pop() {
            // A shorter path to u was recorded after this entry was queued
            if dist_u > distances[&u] {
                continue;
            }
            settled += 1;

            for (v, weight) in graph.neighbors(&u) {
                let candidate = dist_u + weight;

                // Phantom neighbors enter the tables here
                let best = distances.entry(v.clone()).or_insert_with(W::infinity);
                if candidate < *best {
                    trace!("relax {:?} -> {:?} at {:?}", u, v, candidate);
                    *best = candidate;
                    predecessors.insert(v.clone(), u.clone());
                    frontier.push(v, candidate);
                }
            }
        }

        debug!(
            "settled {} of {} vertices from {:?}",
            settled,
            distances.len(),
            source
        );

        let paths = reconstruct_paths(source, &distances, &predecessors);

        ShortestPaths {
            source: source.clone(),
            distances,
            paths,
        }
    }
}

/// Materializes one full witness path per vertex from the predecessor tree.
///
/// Equivalent to appending to the predecessor's path at every relaxation,
/// but keeps the hot loop at one pointer write per improvement.
fn reconstruct_paths<K, W>(
    source: &K,
    distances: &HashMap<K, W>,
    predecessors: &HashMap<K, K>,
) -> HashMap<K, Vec<K>>
where
    K: VertexId,
    W: Float + Zero + Debug + Copy,
{
    let mut paths = HashMap::with_capacity(distances.len());

    for (vertex, distance) in distances {
        if !distance.is_finite() {
            paths.insert(vertex.clone(), Vec::new());
            continue;
        }

        // Every settled vertex other than the source has a predecessor, so
        // the walk always terminates at the source
        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while current != source {
            match predecessors.get(current) {
                Some(pred) => {
                    path.push(pred.clone());
                    current = pred;
                }
                None => break,
            }
        }
        path.reverse();

        paths.insert(vertex.clone(), path);
    }

    paths
}
