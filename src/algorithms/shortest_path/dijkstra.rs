use crate::edge::Edge;
use crate::error::Error;
use crate::graph::GraphContract;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/**
As a graph is explored by Dijkstra's algorithm the vertices at the "fringe"
of the explored part are maintained in a min-priority queue. This struct
holds the bookkeeping for one fringe vertex: its tentative distance, plus an
insertion-order `count` used to break distance ties deterministically.

`distance` is stored negated so that `std::collections::BinaryHeap` (a
max-heap) pops the smallest original distance first without needing a
`Reverse` wrapper at every call site — the same trick
`graphrs::algorithms::shortest_path::dijkstra` uses.
*/
struct FringeNode<T> {
    vertex: T,
    count: i32,
    distance: f64,
}

impl<T: Eq + Ord> Ord for FringeNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self
            .distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => match self.count.cmp(&other.count) {
                Ordering::Equal => self.vertex.cmp(&other.vertex),
                other => other,
            },
            other => other,
        }
    }
}

impl<T: Eq + Ord> PartialOrd for FringeNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq> PartialEq for FringeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.count == other.count && self.vertex == other.vertex
    }
}

impl<T: Eq> Eq for FringeNode<T> {}

/**
The result of a single-source Dijkstra search: the distance to every vertex
reached, and the edge (in the searched graph, not necessarily the caller's
original graph — see [`super::reverse_shortest_path_tree`]) by which each
non-source vertex was first reached.

Vertices not reached are absent from both maps, matching spec §3's "absence
... equivalently treated as +∞".

`order` additionally records vertices in the order they were finalised
(popped), i.e. non-decreasing distance — this is exactly the "closest-first
traversal" collaborator spec §6 describes, and Eppstein's `H_T` construction
(§4.4) relies on processing vertices in this order so that a vertex's tree
parent is always already built when the vertex itself is processed.
*/
pub struct SsspTree<T, A> {
    pub distance: HashMap<T, f64>,
    pub tree_edge: HashMap<T, Edge<T, A>>,
    pub order: Vec<T>,
}

impl<T: Eq + Hash, A> SsspTree<T, A> {
    pub fn distance_to(&self, vertex: &T) -> Option<f64> {
        self.distance.get(vertex).copied()
    }
}

/**
\[Generic\] single-source Dijkstra.

Explores `graph` from `source`, stopping early once `goal` (if given) is
popped off the fringe. Edge weights must be non-negative; a negative weight
on any edge actually explored yields `ErrorKind::UnsupportedConfiguration`
(spec §7 — the violation is only detectable once the engine "would first
consult a misbehaving oracle", i.e. once that edge is on the frontier).

This single routine backs two callers with different intents: Eppstein's
reverse shortest-path-tree preprocessing (§4.2, called over a
[`ReversedView`](crate::graph::ReversedView) rooted at `t`) and Yen's
default baseline/spur-path oracle (§4.7, called directly over the graph or
a [`MaskedView`](crate::graph::MaskedView)).
*/
pub fn single_source<G>(
    graph: &G,
    source: G::Vertex,
    goal: Option<&G::Vertex>,
) -> Result<SsspTree<G::Vertex, G::Attribute>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    let mut distance: HashMap<G::Vertex, f64> = HashMap::new();
    let mut tree_edge: HashMap<G::Vertex, Edge<G::Vertex, G::Attribute>> = HashMap::new();
    let mut order: Vec<G::Vertex> = Vec::new();
    let mut seen: HashMap<G::Vertex, f64> = HashMap::new();
    let mut fringe: BinaryHeap<FringeNode<G::Vertex>> = BinaryHeap::new();
    let mut count = 0;

    seen.insert(source.clone(), 0.0);
    fringe.push(FringeNode {
        vertex: source,
        count: 0,
        distance: -0.0,
    });

    while let Some(popped) = fringe.pop() {
        let d = -popped.distance;
        let v = popped.vertex;

        if distance.contains_key(&v) {
            continue;
        }
        distance.insert(v.clone(), d);
        order.push(v.clone());

        if goal == Some(&v) {
            break;
        }

        for edge in graph.out_edges(&v) {
            if edge.weight < 0.0 {
                return Err(Error::unsupported_configuration(format!(
                    "negative edge weight {} on edge out of a vertex explored by Dijkstra",
                    edge.weight
                )));
            }
            let candidate = d + edge.weight;
            let target = edge.v.clone();
            if distance.contains_key(&target) {
                continue;
            }
            let improves = match seen.get(&target) {
                None => true,
                Some(&best) => candidate < best,
            };
            if improves {
                seen.insert(target.clone(), candidate);
                count += 1;
                fringe.push(FringeNode {
                    vertex: target.clone(),
                    count,
                    distance: -candidate,
                });
                tree_edge.insert(target, edge);
            }
        }
    }

    Ok(SsspTree {
        distance,
        tree_edge,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::Graph;

    #[test]
    fn finds_shortest_distance_and_order() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 2, 4.0);
        graph.add_edge(1, 2, 1.0);

        let tree = single_source(&graph, 0, None).unwrap();
        assert_eq!(tree.distance_to(&2), Some(2.0));
        assert_eq!(tree.order, vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_vertex_is_absent() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);

        let tree = single_source(&graph, 0, None).unwrap();
        assert_eq!(tree.distance_to(&1), None);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, -1.0);

        let err = single_source(&graph, 0, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedConfiguration);
    }
}
