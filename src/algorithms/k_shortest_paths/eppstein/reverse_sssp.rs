use crate::algorithms::shortest_path::dijkstra;
use crate::edge::Edge;
use crate::error::Error;
use crate::graph::{GraphContract, ReversedView};
use std::collections::HashMap;
use std::hash::Hash;

/**
The reverse single-source shortest-path result Eppstein's preprocessing
needs (spec §3, §4.2): `distance[v]` is the shortest-path distance from `v`
to `t` in the original graph; `parent_edge[v]` is the first edge of that
shortest path, i.e. `π(v)`, expressed in the *original* graph's direction
(`v -> next`), not the reversed graph that was actually searched.

Vertices that cannot reach `t` are absent from both maps. `order` lists
every reached vertex in non-decreasing distance-to-`t` order, with `t`
first; [`super::tree_heap`] relies on this order to build `H_T` bottom-up.
*/
pub struct ReverseShortestPaths<T, A> {
    pub distance: HashMap<T, f64>,
    pub parent_edge: HashMap<T, Edge<T, A>>,
    pub order: Vec<T>,
}

impl<T: Eq + Hash, A> ReverseShortestPaths<T, A> {
    pub fn distance_to_sink(&self, v: &T) -> Option<f64> {
        self.distance.get(v).copied()
    }
}

/**
Runs a single closest-first traversal on the edge-reversed view of `graph`,
rooted at `t` (spec §4.2, and the "closest-first traversal" collaborator of
spec §6). Never fails on an unreachable `s`: absence of `d(s)` is how "no
path" is represented (spec §4.2's "Failure: does not fail").
*/
pub fn build<G>(graph: &G, t: G::Vertex) -> Result<ReverseShortestPaths<G::Vertex, G::Attribute>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    let reversed = ReversedView::new(graph);
    let tree = dijkstra::single_source(&reversed, t, None)?;
    let parent_edge = tree
        .tree_edge
        .into_iter()
        .map(|(v, edge_in_reversed_graph)| (v, edge_in_reversed_graph.reversed()))
        .collect();
    Ok(ReverseShortestPaths {
        distance: tree.distance,
        parent_edge,
        order: tree.order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn distances_and_parent_edges_point_toward_the_sink() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(0, 2, 5.0);

        let reverse = build(&graph, 2).unwrap();
        assert_eq!(reverse.distance_to_sink(&2), Some(0.0));
        assert_eq!(reverse.distance_to_sink(&1), Some(1.0));
        assert_eq!(reverse.distance_to_sink(&0), Some(2.0));

        // 0's shortest path to the sink goes through 1, not the direct edge.
        let parent = reverse.parent_edge.get(&0).unwrap();
        assert_eq!(parent.v, 1);
    }

    #[test]
    fn vertex_unable_to_reach_sink_is_absent() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_vertex(2);

        let reverse = build(&graph, 1).unwrap();
        assert_eq!(reverse.distance_to_sink(&2), None);
        assert!(reverse.order.contains(&0));
        assert!(!reverse.order.contains(&2));
    }
}
