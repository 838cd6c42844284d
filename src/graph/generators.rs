use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::{AdjacencyGraph, MutableGraph};

/// Generates a G(n, p) random digraph: each ordered pair of distinct
/// vertices carries an edge with probability `p`, weighted uniformly in
/// [1.0, max_weight]
pub fn gnp_random_graph(
    n: usize,
    p: f64,
    max_weight: f64,
    rng: &mut impl Rng,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    assert!((0.0..=1.0).contains(&p), "p must be a probability");
    assert!(max_weight >= 1.0, "max_weight must be at least 1.0");

    let mut graph = AdjacencyGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(p) {
                let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
                graph.add_edge(from, to, weight);
            }
        }
    }

    graph
}

/// Generates a width*height lattice with unit-weight edges between
/// 4-connected neighbors, indexed as y * width + x
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);
    for v in 0..width * height {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(vertex, vertex + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_undirected_edge(vertex, vertex + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}
