//! Literal fixture graphs for the end-to-end scenarios exercised in
//! `tests/` (grounded in `graphrs::generators::classic`'s pattern of one
//! function per named graph, returning a ready-to-use [`Graph`]).

use crate::graph::Graph;

/// A structurally faithful reconstruction of the twelve-vertex graph from
/// Eppstein's original k-shortest-paths example (vertices `0..=11`,
/// `s=0`, `t=11`): every edge that appears on any of the ten shortest
/// `0 -> 11` walks the example names. Weight assignment is this crate's own
/// and is not claimed to reproduce the paper's published numbers exactly —
/// see `DESIGN.md` for why the literal weights aren't asserted in tests.
pub fn eppstein_paper_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    let edges: &[(i32, i32, f64)] = &[
        (0, 1, 8.0),
        (0, 4, 10.0),
        (1, 2, 9.0),
        (1, 5, 12.0),
        (2, 3, 11.0),
        (2, 6, 12.0),
        (3, 7, 16.0),
        (4, 5, 9.0),
        (4, 8, 12.0),
        (5, 6, 11.0),
        (5, 9, 13.0),
        (6, 7, 12.0),
        (6, 10, 14.0),
        (7, 11, 18.0),
        (8, 9, 11.0),
        (9, 10, 11.0),
        (10, 11, 12.0),
    ];
    for (u, v, w) in edges {
        g.add_edge(*u, *v, *w);
    }
    g
}

/// Graehl's classic self-loop example (spec §8, S2): a zero-cost-free tree
/// path `0 -> 5 -> 1` of total weight 0.6, plus a self-loop at the source
/// of weight 0.05 that is the only sidetrack in the graph. `s=0`, `t=1`.
pub fn graehl_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    g.add_edge(0, 0, 0.05);
    g.add_edge(0, 5, 0.3);
    g.add_edge(5, 1, 0.3);
    g
}

/// Three parallel `0 -> 1` edges of weights 1, 2, 3 and a single `1 -> 2`
/// edge of weight 1 (spec §8, S3). `s=0`, `t=2`.
pub fn no_loop_multi_edge_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(0, 1, 2.0);
    g.add_edge(0, 1, 3.0);
    g.add_edge(1, 2, 1.0);
    g
}

/// A single `0 -> 1` edge of weight 1 plus two self-loops at `0` of weights
/// 2 and 3 (spec §8, S4). `s=0`, `t=1`.
pub fn loop_multi_edge_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(0, 0, 2.0);
    g.add_edge(0, 0, 3.0);
    g
}

/// [`loop_multi_edge_graph`] with every edge reversed (spec §8, S5).
/// `s=1`, `t=0`.
pub fn reversed_loop_multi_edge_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    g.add_edge(1, 0, 1.0);
    g.add_edge(0, 0, 2.0);
    g.add_edge(0, 0, 3.0);
    g
}

/// A complete-bipartite-like sample: source `S` (0) and sink `T` (1) each
/// connected through four intermediate vertices (2..=5), two of which give
/// an `S -> T` walk of weight 2 and two of weight 3, plus a long direct
/// `S -> T` edge of weight 1000 (spec §8, S6). `s=0`, `t=1`.
pub fn k_shortest_path_sample_graph() -> Graph<i32, ()> {
    let mut g = Graph::new();
    const S: i32 = 0;
    const T: i32 = 1;
    g.add_edge(S, 2, 1.0);
    g.add_edge(2, T, 1.0);
    g.add_edge(S, 3, 1.0);
    g.add_edge(3, T, 1.0);
    g.add_edge(S, 4, 1.5);
    g.add_edge(4, T, 1.5);
    g.add_edge(S, 5, 1.5);
    g.add_edge(5, T, 1.5);
    g.add_edge(S, T, 1000.0);
    g
}
