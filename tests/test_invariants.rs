//! Quantified invariants from spec §8, checked over randomly generated
//! small graphs (grounded in `petgraph`'s use of `proptest` for its
//! algorithms crate's property tests).

use kpaths::{eppstein_k_shortest_paths, yen_k_shortest_paths_default, Graph, GraphContract};
use proptest::prelude::*;

const K: usize = 5;
const WEIGHT_TOLERANCE: f64 = 5e-8;

fn arb_graph() -> impl Strategy<Value = (Graph<i32, ()>, i32, i32)> {
    (3usize..6).prop_flat_map(|n| {
        let edge_strategy = proptest::collection::vec((0..n as i32, 0..n as i32, 1i32..6i32), 0..10);
        edge_strategy.prop_map(move |edges| {
            let mut graph = Graph::new();
            for v in 0..n as i32 {
                graph.add_vertex(v);
            }
            for (u, v, w) in edges {
                graph.add_edge(u, v, w as f64);
            }
            (graph, 0, n as i32 - 1)
        })
    })
}

fn reversed(graph: &Graph<i32, ()>) -> Graph<i32, ()> {
    let mut out = Graph::new();
    for v in graph.vertices() {
        out.add_vertex(v);
    }
    for edge in graph.edges() {
        out.add_edge(edge.v, edge.u, edge.weight);
    }
    out
}

proptest! {
    /// Invariants 1 (endpoints), 2 (weight sum), 3 (non-decreasing order),
    /// 5 (walk validity) for Eppstein.
    #[test]
    fn eppstein_invariants((graph, s, t) in arb_graph()) {
        let paths = eppstein_k_shortest_paths(&graph, s, t, K).unwrap();

        for path in &paths {
            prop_assert_eq!(*path.start(), s);
            prop_assert_eq!(*path.end(), t);

            let sum: f64 = path.edges().iter().map(|e| e.weight).sum();
            prop_assert!((sum - path.weight()).abs() <= WEIGHT_TOLERANCE);

            for pair in path.edges().windows(2) {
                prop_assert_eq!(pair[0].v, pair[1].u);
            }
        }

        for pair in paths.windows(2) {
            prop_assert!(pair[0].weight() <= pair[1].weight() + 1e-9);
        }
    }

    /// Invariant 4 (Yen paths are always simple) plus 1-3 again against the
    /// fallible Yen iterator.
    #[test]
    fn yen_invariants((graph, s, t) in arb_graph()) {
        let paths = yen_k_shortest_paths_default(&graph, s, t, K).unwrap();

        for path in &paths {
            prop_assert_eq!(*path.start(), s);
            prop_assert_eq!(*path.end(), t);
            prop_assert!(path.is_simple());
        }

        for pair in paths.windows(2) {
            prop_assert!(pair[0].weight() <= pair[1].weight() + 1e-9);
        }
    }

    /// Invariant 6: reversing the graph and swapping (s, t) reproduces the
    /// same weight multiset.
    #[test]
    fn eppstein_reversal_round_trip((graph, s, t) in arb_graph()) {
        let forward = eppstein_k_shortest_paths(&graph, s, t, K).unwrap();
        let backward_graph = reversed(&graph);
        let backward = eppstein_k_shortest_paths(&backward_graph, t, s, K).unwrap();

        let mut forward_weights: Vec<f64> = forward.iter().map(|p| p.weight()).collect();
        let mut backward_weights: Vec<f64> = backward.iter().map(|p| p.weight()).collect();
        forward_weights.sort_by(|a, b| a.partial_cmp(b).unwrap());
        backward_weights.sort_by(|a, b| a.partial_cmp(b).unwrap());

        prop_assert_eq!(forward_weights.len(), backward_weights.len());
        for (a, b) in forward_weights.iter().zip(backward_weights.iter()) {
            prop_assert!((a - b).abs() <= 1e-6);
        }
    }
}

/// Boundary behaviour (spec §8): `t` unreachable from `s` yields an empty
/// sequence for both algorithms, never an error.
#[test]
fn unreachable_sink_yields_empty() {
    let mut graph: Graph<i32, ()> = Graph::new();
    graph.add_vertex(0);
    graph.add_vertex(1);

    let eppstein = eppstein_k_shortest_paths(&graph, 0, 1, 5).unwrap();
    assert!(eppstein.is_empty());

    let yen = yen_k_shortest_paths_default(&graph, 0, 1, 5).unwrap();
    assert!(yen.is_empty());
}

/// Boundary behaviour: a unique shortest path with no sidetracks yields
/// exactly one result, then terminates.
#[test]
fn no_sidetracks_yields_one_path() {
    let mut graph: Graph<i32, ()> = Graph::new();
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);

    let paths = eppstein_k_shortest_paths(&graph, 0, 2, 10).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].weight(), 2.0);
}
