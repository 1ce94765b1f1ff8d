use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use acyclic_sp::graph::generators::sparse_random_dag;
use acyclic_sp::graph::{DirectedGraph, Graph, Topological};
use acyclic_sp::AcyclicSP;

// Times the topological sort and the relaxation pass separately
fn benchmark_graph(graph: &DirectedGraph<f64>, source: usize) -> Result<(Duration, Duration), acyclic_sp::Error> {
    println!("Running on graph with {} vertices and {} edges...", graph.vertex_count(), graph.edge_count());

    let start = Instant::now();
    let topological = Topological::new(graph)?;
    let sort_time = start.elapsed();

    let start = Instant::now();
    let engine = AcyclicSP::with_order(graph, topological.order(), source)?;
    let relax_time = start.elapsed();

    let reachable = engine.reachable_vertices().count();
    let critical = engine.critical_path();
    println!("  - Found {} reachable vertices, critical path length {:.2} ({} edges)",
             reachable, critical.length, critical.edges.len());
    println!("  - Topological sort {:?}, relaxation {:?}", sort_time, relax_time);

    Ok((sort_time, relax_time))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = vec![
        1_000,
        10_000,
        100_000,
        500_000,
        1_000_000,
    ];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: acyclic shortest/longest paths");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random DAG with {} vertices...", size);
        let graph = sparse_random_dag(size, edge_factor, -50.0..100.0, &mut rng);
        let (sort_time, relax_time) = benchmark_graph(&graph, 0)?;
        results.push((size, graph.edge_count(), sort_time, relax_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12} | {:<12} | {:<12}",
             "Vertices", "Edges", "Sort (ms)", "Relax (ms)", "ns / edge");
    println!("-----------------------------------------------------");

    for (size, edges, sort_time, relax_time) in &results {
        let total = *sort_time + *relax_time;
        let per_edge = total.as_nanos() as f64 / (*edges).max(1) as f64;
        println!("{:<10} | {:<10} | {:<12.2} | {:<12.2} | {:<12.2}",
                 size,
                 edges,
                 sort_time.as_secs_f64() * 1000.0,
                 relax_time.as_secs_f64() * 1000.0,
                 per_edge);
    }

    Ok(())
}
