//! Minpath - keyed single-source shortest paths
//!
//! This library implements the classic priority-queue relaxation algorithm
//! (Dijkstra) over graphs keyed by an arbitrary hashable vertex identifier
//! with real non-negative edge weights.
//!
//! For every vertex reachable from the start, the engine reports the minimum
//! total edge weight and one witness path achieving it. Unreachable vertices
//! are a defined outcome, not an error: they report an infinite distance and
//! an empty path.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
