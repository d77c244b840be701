use crate::algorithms::k_shortest_paths::eppstein::reverse_sssp::ReverseShortestPaths;
use crate::edge::Edge;
use crate::graph::GraphContract;
use itertools::Itertools;

/**
A sidetrack edge paired with its cost δ(e) = w(e) + d(target(e)) − d(source(e))
(spec §3). Only edges not on the shortest-path tree, with a finite distance
to `t` at their target, are ever wrapped as a `Sidetrack`.
*/
#[derive(Clone)]
pub struct Sidetrack<T, A> {
    pub edge: Edge<T, A>,
    pub delta: f64,
}

/**
Per-vertex heap of outgoing sidetracks (spec §4.3): `root` is the minimum-δ
sidetrack out of `v`; `rest` holds every other outgoing sidetrack, sorted
ascending by δ so [`super::tree_heap`] can build its balanced "rest" subtree
directly from the slice.
*/
pub struct HOut<T, A> {
    pub root: Sidetrack<T, A>,
    pub rest: Vec<Sidetrack<T, A>>,
}

/**
Builds `H_out(v)`, or `None` if `v` has no outgoing sidetrack (spec §4.3:
"If `v` has no such edge, no `H_out` is produced for `v`").
*/
pub fn build_h_out<G>(
    graph: &G,
    reverse: &ReverseShortestPaths<G::Vertex, G::Attribute>,
    v: &G::Vertex,
) -> Option<HOut<G::Vertex, G::Attribute>>
where
    G: GraphContract,
{
    let d_v = reverse.distance_to_sink(v)?;
    let tree_edge = reverse.parent_edge.get(v);

    let mut sidetracks: Vec<Sidetrack<G::Vertex, G::Attribute>> = graph
        .out_edges(v)
        .into_iter()
        .filter(|e| tree_edge != Some(e))
        .filter_map(|e| {
            let d_target = reverse.distance_to_sink(&e.v)?;
            let delta = e.weight + d_target - d_v;
            Some(Sidetrack { edge: e, delta })
        })
        .sorted_by(|a, b| a.delta.partial_cmp(&b.delta).unwrap())
        .collect();

    if sidetracks.is_empty() {
        return None;
    }

    let root = sidetracks.remove(0);
    Some(HOut {
        root,
        rest: sidetracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::k_shortest_paths::eppstein::reverse_sssp;
    use crate::graph::Graph;

    #[test]
    fn tree_edge_is_excluded_and_rest_is_sorted() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 2, 5.0);
        graph.add_edge(0, 2, 2.0);
        graph.add_edge(1, 2, 1.0);

        let reverse = reverse_sssp::build(&graph, 2).unwrap();
        let h_out = build_h_out(&graph, &reverse, &0).unwrap();

        // the tree edge out of 0 must not appear among the sidetracks at all.
        let tree_edge = reverse.parent_edge.get(&0).cloned().unwrap();
        assert!(h_out.root.edge != tree_edge);
        for s in &h_out.rest {
            assert!(s.edge != tree_edge);
        }

        let deltas: Vec<f64> = std::iter::once(h_out.root.delta)
            .chain(h_out.rest.iter().map(|s| s.delta))
            .collect();
        let mut sorted = deltas.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(deltas, sorted);
    }

    #[test]
    fn vertex_with_only_tree_edge_has_no_h_out() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);

        let reverse = reverse_sssp::build(&graph, 1).unwrap();
        assert!(build_h_out(&graph, &reverse, &0).is_none());
    }
}
