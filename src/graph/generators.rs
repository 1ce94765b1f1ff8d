use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;
use std::ops::Range;

/// Generates a random DAG with `n` vertices
///
/// Vertices are shuffled into a hidden ranking and every pair `(a, b)` with `a` ranked
/// before `b` gets an edge `a -> b` with probability `edge_probability`, so the result
/// is acyclic by construction. Weights are drawn uniformly from `weights` and may be
/// negative.
pub fn random_dag<R: Rng>(
    n: usize,
    edge_probability: f64,
    weights: Range<f64>,
    rng: &mut R,
) -> DirectedGraph<f64> {
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );
    assert!(weights.start < weights.end, "weight range must be non-empty");

    let mut graph = DirectedGraph::with_vertices(n);
    let mut ranking: Vec<usize> = (0..n).collect();
    ranking.shuffle(rng);

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(weights.clone());
                graph
                    .add_edge(ranking[i], ranking[j], weight)
                    .expect("both endpoints exist and the weight is finite");
            }
        }
    }

    graph
}

/// Generates a sparse random DAG with roughly `edge_factor * n` edges
///
/// Suited to large benchmarks where the quadratic pair scan of [`random_dag`] would
/// dominate: each edge picks two distinct vertices and orients them low-to-high.
pub fn sparse_random_dag<R: Rng>(
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
    rng: &mut R,
) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(weights.clone());
            graph
                .add_edge(u.min(v), u.max(v), weight)
                .expect("both endpoints exist and the weight is finite");
        }
    }

    graph
}

/// Generates a 3D grid DAG with dimensions x*y*z
///
/// Each cell links forward to its `+x`, `+y` and `+z` neighbours with weight `1.0`,
/// so every path from the corner `0` to cell `(i, j, k)` has length `i + j + k`.
pub fn grid_dag(x: usize, y: usize, z: usize) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_vertices(x * y * z);

    let get_index = |i: usize, j: usize, k: usize| -> usize { i * y * z + j * z + k };

    for i in 0..x {
        for j in 0..y {
            for k in 0..z {
                let current = get_index(i, j, k);
                if i + 1 < x {
                    graph
                        .add_edge(current, get_index(i + 1, j, k), 1.0)
                        .expect("grid neighbours are in range");
                }
                if j + 1 < y {
                    graph
                        .add_edge(current, get_index(i, j + 1, k), 1.0)
                        .expect("grid neighbours are in range");
                }
                if k + 1 < z {
                    graph
                        .add_edge(current, get_index(i, j, k + 1), 1.0)
                        .expect("grid neighbours are in range");
                }
            }
        }
    }

    graph
}
