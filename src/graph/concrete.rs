use crate::edge::Edge;
use crate::error::Error;
use crate::graph::contract::GraphContract;
use crate::node::Node;
use std::collections::HashMap;
use std::hash::Hash;

/**
A directed, weighted adjacency-map graph. Self-loops and parallel edges are
always permitted (spec §3) — unlike `graphrs::GraphSpecs`, there is no
configuration surface to forbid them, since the spec this crate implements
never calls for one.

`T` is the vertex identifier type (must be `Clone + Eq + Hash`); `A` is an
optional per-vertex/per-edge attribute, carried through unexamined by every
algorithm in this crate.
*/
#[derive(Clone)]
pub struct Graph<T, A> {
    nodes: HashMap<T, Node<T, A>>,
    out: HashMap<T, Vec<Edge<T, A>>>,
}

impl<T, A> Graph<T, A>
where
    T: Clone + Eq + Hash,
    A: Clone,
{
    pub fn new() -> Graph<T, A> {
        Graph {
            nodes: HashMap::new(),
            out: HashMap::new(),
        }
    }

    /// Adds `vertex` if it is not already present; a no-op otherwise. Edges
    /// create their endpoints implicitly (see [`Self::add_edge`]), so this
    /// is only needed for vertices with no incident edges.
    pub fn add_vertex(&mut self, vertex: T) {
        self.nodes
            .entry(vertex.clone())
            .or_insert_with(|| Node::from_name(vertex));
    }

    pub fn add_edge(&mut self, u: T, v: T, weight: f64) {
        self.add_edge_with(Edge::new(u, v, weight))
    }

    pub fn add_edge_with(&mut self, edge: Edge<T, A>) {
        self.nodes
            .entry(edge.u.clone())
            .or_insert_with(|| Node::from_name(edge.u.clone()));
        self.nodes
            .entry(edge.v.clone())
            .or_insert_with(|| Node::from_name(edge.v.clone()));
        self.out.entry(edge.u.clone()).or_default().push(edge);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.nodes.contains_key(vertex)
    }

    /// Convenience check mirroring the `InvalidInput` validation every
    /// public entry point in `algorithms::k_shortest_paths` performs against
    /// a generic `GraphContract` before starting any preprocessing (spec
    /// §7): useful for callers building their own validation on top of a
    /// concrete [`Graph`].
    pub fn require_vertex(&self, vertex: &T, label: &str) -> Result<(), Error>
    where
        T: std::fmt::Debug,
    {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::invalid_input(format!(
                "{label} vertex {vertex:?} is not present in the graph"
            )))
        }
    }
}

impl<T, A> Default for Graph<T, A>
where
    T: Clone + Eq + Hash,
    A: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> GraphContract for Graph<T, A>
where
    T: Clone + Eq + Hash,
    A: Clone,
{
    type Vertex = T;
    type Attribute = A;

    fn vertices(&self) -> Vec<T> {
        self.nodes.keys().cloned().collect()
    }

    fn out_edges(&self, v: &T) -> Vec<Edge<T, A>> {
        self.out.get(v).cloned().unwrap_or_default()
    }
}
