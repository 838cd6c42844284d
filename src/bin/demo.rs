use minpath::graph::{Graph, MutableGraph};
use minpath::{AdjacencyGraph, Dijkstra, ShortestPathAlgorithm};
use num_traits::Float;
use ordered_float::OrderedFloat;

fn main() {
    env_logger::init();

    // The four-vertex example graph: undirected, symmetric weights
    let mut graph = AdjacencyGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.add_undirected_edge("A", "B", OrderedFloat(1.0));
    graph.add_undirected_edge("A", "C", OrderedFloat(4.0));
    graph.add_undirected_edge("B", "C", OrderedFloat(2.0));
    graph.add_undirected_edge("B", "D", OrderedFloat(5.0));
    graph.add_undirected_edge("C", "D", OrderedFloat(1.0));

    let start = "A";

    // The engine trusts its precondition, so check it up front
    if let Err(err) = graph.validate_non_negative() {
        eprintln!("invalid graph: {err}");
        std::process::exit(1);
    }

    let result = Dijkstra::new().shortest_paths(&graph, &start);

    println!("--- Shortest paths from {start} ---");
    println!(
        "Graph has {} vertices and {} edges\n",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut vertices: Vec<&str> = result.distances.keys().copied().collect();
    vertices.sort();

    println!("Minimum distances:");
    for v in &vertices {
        match result.distance(v) {
            Some(distance) if distance.is_finite() => {
                println!("  {v}: {}", distance.into_inner());
            }
            _ => println!("  {v}: unreachable"),
        }
    }

    println!("\nWitness paths:");
    for v in &vertices {
        let path = result.path(v).unwrap_or(&[]);
        println!("  {v}: {}", path.join(" -> "));
    }
}
