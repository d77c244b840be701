use crate::algorithms::shortest_path::dijkstra::{self, SsspTree};
use crate::edge::Edge;
use crate::error::Error;
use crate::graph::GraphContract;
use crate::path::GraphPath;

/**
A shortest-path oracle bound to one (sub)graph (spec §6's collaborator
contract). `path(u, v)` returns the shortest path from `u` to `v`, or `None`
if `v` is unreachable from `u`.

Per spec §4.7's "Empty-path convention", an oracle that can only represent
"unreachable" as a zero-length path (rather than `None`) is a valid, if
degenerate, implementation — Yen's engine treats a zero-length result from
`u != v`'s spur search the same as `None`.
*/
pub trait SsspOracle<G: GraphContract> {
    fn path(
        &self,
        u: &G::Vertex,
        v: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Attribute>>, Error>;
}

/**
Produces a new [`SsspOracle`] bound to a given (sub)graph (spec §6, §9).
Yen calls this once per spur iteration, against a freshly built
[`MaskedView`](crate::graph::MaskedView), so that Dijkstra, Bellman-Ford, or
any other conforming algorithm can be swapped in without touching the
deviation loop itself.
*/
pub trait SsspFactory<G: GraphContract> {
    type Oracle<'g>: SsspOracle<G>
    where
        G: 'g,
        Self: 'g;

    fn build<'g>(&self, graph: &'g G) -> Self::Oracle<'g>;
}

/// The default oracle: plain Dijkstra (spec §9 — "so Dijkstra, Bellman-Ford,
/// or other variants can be selected"; Dijkstra ships, the trait leaves room
/// for the rest).
pub struct DijkstraOracle<'g, G> {
    graph: &'g G,
}

impl<'g, G: GraphContract> DijkstraOracle<'g, G> {
    pub fn new(graph: &'g G) -> DijkstraOracle<'g, G> {
        DijkstraOracle { graph }
    }
}

impl<'g, G: GraphContract> SsspOracle<G> for DijkstraOracle<'g, G>
where
    G::Vertex: Ord,
{
    fn path(
        &self,
        u: &G::Vertex,
        v: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Attribute>>, Error> {
        if u == v {
            return Ok(Some(GraphPath::empty_at(u.clone())));
        }
        let tree = dijkstra::single_source(self.graph, u.clone(), Some(v))?;
        Ok(reconstruct(&tree, u, v))
    }
}

/// Walks `tree.tree_edge` backward from `v` to `u`, reversing it into a
/// forward edge list, or `None` if `v` was never reached.
fn reconstruct<T, A>(tree: &SsspTree<T, A>, u: &T, v: &T) -> Option<GraphPath<T, A>>
where
    T: Clone + Eq + std::hash::Hash,
    A: Clone,
{
    if !tree.distance.contains_key(v) {
        return None;
    }
    let mut edges: Vec<Edge<T, A>> = Vec::new();
    let mut current = v.clone();
    while &current != u {
        let edge = tree.tree_edge.get(&current)?.clone();
        current = edge.u.clone();
        edges.push(edge);
    }
    edges.reverse();
    let weight = tree.distance_to(v).unwrap();
    Some(GraphPath::from_edges(edges, weight))
}

/// The default [`SsspFactory`] implementation: every oracle it builds is a
/// [`DijkstraOracle`] over the graph it was given.
pub struct DijkstraFactory;

impl<G: GraphContract> SsspFactory<G> for DijkstraFactory
where
    G::Vertex: Ord,
{
    type Oracle<'g> = DijkstraOracle<'g, G> where G: 'g;

    fn build<'g>(&self, graph: &'g G) -> Self::Oracle<'g> {
        DijkstraOracle::new(graph)
    }
}
