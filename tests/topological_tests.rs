use acyclic_sp::graph::generators::random_dag;
use acyclic_sp::graph::{is_topological_order, DirectedGraph, Graph, MutableGraph, Topological};
use acyclic_sp::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_order_respects_every_edge() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_dag(40, 0.2, -10.0..10.0, &mut rng);
        let topological = Topological::new(&graph).unwrap();

        assert_eq!(topological.len(), graph.vertex_count());
        assert!(is_topological_order(&graph, topological.order()));
        for v in 0..graph.vertex_count() {
            assert_eq!(topological.order()[topological.rank(v)], v);
        }
    }
}

#[test]
fn test_empty_graph() {
    let graph: DirectedGraph<f64> = DirectedGraph::new();
    let topological = Topological::new(&graph).unwrap();
    assert!(topological.is_empty());
    assert_eq!(topological.iter().count(), 0);
}

#[test]
fn test_cycle_is_detected() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph.add_edge(3, 1, 1.0).unwrap();

    match Topological::new(&graph) {
        Err(Error::CycleDetected { vertex }) => assert!((1..=3).contains(&vertex)),
        other => panic!("expected a cycle, got {:?}", other),
    }
}

#[test]
fn test_self_loop_is_a_cycle() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(2);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 1, 1.0).unwrap();

    assert!(matches!(
        Topological::new(&graph),
        Err(Error::CycleDetected { vertex: 1 })
    ));
}

#[test]
fn test_long_chain_does_not_overflow_stack() {
    let n = 200_000;
    let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(n);
    for v in (1..n).rev() {
        graph.add_edge(v, v - 1, 1.0).unwrap();
    }

    let topological = Topological::new(&graph).unwrap();
    assert_eq!(topological.order()[0], n - 1);
    assert_eq!(topological.order()[n - 1], 0);
}

#[test]
fn test_is_topological_order_rejects_bad_orders() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();

    assert!(is_topological_order(&graph, &[0, 1, 2]));
    assert!(!is_topological_order(&graph, &[1, 0, 2]));
    assert!(!is_topological_order(&graph, &[0, 1]));
    assert!(!is_topological_order(&graph, &[0, 0, 2]));
    assert!(!is_topological_order(&graph, &[0, 1, 5]));
}
