use crate::edge::Edge;
use crate::graph::contract::GraphContract;

/**
A read-only view over a [`GraphContract`] that hides a predicate-selected
set of vertices and edges without mutating the underlying graph (spec §4.1,
§9's "masked subgraph" design note).

Yen's deviation loop (§4.7) builds one of these per spur iteration: vertices
of the root-path prefix are hidden so the spur search cannot walk back
through them, and edges that would repeat a previously explored deviation
from the same root are hidden so the spur search is forced to find a new
one.
*/
pub struct MaskedView<'g, G: GraphContract> {
    inner: &'g G,
    hidden_vertices: Box<dyn Fn(&G::Vertex) -> bool + 'g>,
    hidden_edges: Box<dyn Fn(&Edge<G::Vertex, G::Attribute>) -> bool + 'g>,
}

impl<'g, G: GraphContract> MaskedView<'g, G> {
    pub fn new(
        inner: &'g G,
        hidden_vertices: impl Fn(&G::Vertex) -> bool + 'g,
        hidden_edges: impl Fn(&Edge<G::Vertex, G::Attribute>) -> bool + 'g,
    ) -> MaskedView<'g, G> {
        MaskedView {
            inner,
            hidden_vertices: Box::new(hidden_vertices),
            hidden_edges: Box::new(hidden_edges),
        }
    }
}

impl<'g, G: GraphContract> GraphContract for MaskedView<'g, G> {
    type Vertex = G::Vertex;
    type Attribute = G::Attribute;

    fn vertices(&self) -> Vec<Self::Vertex> {
        self.inner
            .vertices()
            .into_iter()
            .filter(|v| !(self.hidden_vertices)(v))
            .collect()
    }

    fn out_edges(&self, v: &Self::Vertex) -> Vec<Edge<Self::Vertex, Self::Attribute>> {
        if (self.hidden_vertices)(v) {
            return Vec::new();
        }
        self.inner
            .out_edges(v)
            .into_iter()
            .filter(|e| !(self.hidden_vertices)(&e.v) && !(self.hidden_edges)(e))
            .collect()
    }
}
