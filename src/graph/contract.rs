use crate::edge::Edge;
use std::hash::Hash;

/**
The graph contract the k-shortest-paths core consumes (spec §4.1).

This is the *only* thing Eppstein's and Yen's engines know about a graph:
they never touch [`Graph`](crate::graph::Graph) directly. Implement this
trait for your own graph type to run either algorithm over it without
copying into [`Graph`](crate::graph::Graph) first.

All methods return owned data rather than references or lazy iterators.
That is a deliberate simplicity-over-throughput trade documented in
`DESIGN.md`: [`ReversedView`](crate::graph::ReversedView) and
[`MaskedView`](crate::graph::MaskedView) synthesize edges on the fly and
would otherwise need to hand out references into temporaries.
*/
pub trait GraphContract {
    type Vertex: Clone + Eq + Hash;
    type Attribute: Clone;

    /// Every vertex in the graph, each yielded once.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Every edge whose source is `v`.
    fn out_edges(&self, v: &Self::Vertex) -> Vec<Edge<Self::Vertex, Self::Attribute>>;

    /// One representative edge `u -> v`, or `None` if none exists. Used by
    /// Yen (§4.7) when reconstructing the root path; when several parallel
    /// edges exist the choice of representative is the implementation's,
    /// and Yen's results are defined only up to that choice (§4.7's "Edge
    /// selection rule").
    fn edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<Edge<Self::Vertex, Self::Attribute>> {
        self.all_edges(u, v).into_iter().next()
    }

    /// Every parallel edge `u -> v`.
    fn all_edges(&self, u: &Self::Vertex, v: &Self::Vertex) -> Vec<Edge<Self::Vertex, Self::Attribute>> {
        self.out_edges(u)
            .into_iter()
            .filter(|e| &e.v == v)
            .collect()
    }

    /// Every edge in the graph, each yielded once.
    fn edges(&self) -> Vec<Edge<Self::Vertex, Self::Attribute>> {
        self.vertices()
            .iter()
            .flat_map(|v| self.out_edges(v))
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}
