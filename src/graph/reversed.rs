use crate::edge::Edge;
use crate::graph::contract::GraphContract;

/**
A read-only edge-reversed view over a [`GraphContract`] (spec §4.1): every
edge `u -> v` in the underlying graph appears as `v -> u` here, with the
same weight and attribute. No copy of the underlying graph is made; each
query re-derives the reversed adjacency from the wrapped graph.

Used by Eppstein's preprocessing (§4.2) to run a single closest-first
traversal from `t` and obtain, for every vertex, its distance to `t` in the
original graph.
*/
pub struct ReversedView<'g, G> {
    inner: &'g G,
}

impl<'g, G> ReversedView<'g, G> {
    pub fn new(inner: &'g G) -> ReversedView<'g, G> {
        ReversedView { inner }
    }
}

impl<'g, G: GraphContract> GraphContract for ReversedView<'g, G> {
    type Vertex = G::Vertex;
    type Attribute = G::Attribute;

    fn vertices(&self) -> Vec<Self::Vertex> {
        self.inner.vertices()
    }

    fn out_edges(&self, v: &Self::Vertex) -> Vec<Edge<Self::Vertex, Self::Attribute>> {
        self.inner
            .edges()
            .into_iter()
            .filter(|e| &e.v == v)
            .map(Edge::reversed)
            .collect()
    }
}
