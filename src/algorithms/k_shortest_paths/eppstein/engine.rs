use crate::algorithms::k_shortest_paths::eppstein::reverse_sssp::{self, ReverseShortestPaths};
use crate::algorithms::k_shortest_paths::eppstein::tree_heap::{Link, TreeHeap, TreeHeapNode};
use crate::edge::Edge;
use crate::error::Error;
use crate::graph::GraphContract;
use crate::path::GraphPath;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::rc::Rc;

/**
Preprocessing products for one `(graph, s, t)` triple (spec §4.2-§4.4):
the reverse shortest-path tree to `t` and the persistent `H_T` built along
it. Both are immutable once constructed (spec §5 — "its preprocessing
products are immutable thereafter; iteration only mutates the priority
queue it owns").
*/
pub struct EppsteinEngine<T, A> {
    reverse: ReverseShortestPaths<T, A>,
    tree: TreeHeap<T, A>,
    s: T,
    t: T,
}

impl<T: Clone + Eq + Hash + Ord, A: Clone> EppsteinEngine<T, A> {
    pub fn new<G>(graph: &G, s: T, t: T) -> Result<EppsteinEngine<T, A>, Error>
    where
        G: GraphContract<Vertex = T, Attribute = A>,
    {
        let vertices = graph.vertices();
        if !vertices.contains(&s) {
            return Err(Error::invalid_input("s is not a vertex of the graph"));
        }
        if !vertices.contains(&t) {
            return Err(Error::invalid_input("t is not a vertex of the graph"));
        }

        log::debug!("eppstein: building reverse shortest-path tree");
        let reverse = reverse_sssp::build(graph, t.clone())?;
        log::debug!("eppstein: building persistent sidetrack tree (H_T)");
        let tree = TreeHeap::build(graph, &reverse);

        Ok(EppsteinEngine {
            reverse,
            tree,
            s,
            t,
        })
    }

    /// A lazy, best-first, possibly-infinite sequence of `s -> t` walks in
    /// non-decreasing weight order (spec §4.5, §4.8's `pathsIterator`).
    pub fn iter(&self) -> EppsteinPaths<T, A> {
        EppsteinPaths::new(self)
    }
}

enum TokenKind<T, A> {
    Initial,
    Derived {
        node: Rc<TreeHeapNode<T, A>>,
        base: Rc<GraphPath<T, A>>,
    },
}

/// One entry of Eppstein's best-first priority queue (spec §4.5, §9's
/// tagged-variant note). `cost` is stored negated so `BinaryHeap` (a
/// max-heap) pops the cheapest token first; `count` is an insertion-order
/// tie-break, matching the crate's other fringe-node priority structs.
struct PendingToken<T, A> {
    neg_cost: f64,
    count: u64,
    kind: TokenKind<T, A>,
}

impl<T, A> Ord for PendingToken<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self
            .neg_cost
            .partial_cmp(&other.neg_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self.count.cmp(&other.count),
            other => other,
        }
    }
}

impl<T, A> PartialOrd for PendingToken<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, A> PartialEq for PendingToken<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.neg_cost == other.neg_cost && self.count == other.count
    }
}

impl<T, A> Eq for PendingToken<T, A> {}

/// Walks `parent_edge` from `from` to `t`, collecting the π-edges in
/// forward (source-to-sink) order. Empty when `from == t`.
fn pi_chain_edges<T: Clone + Eq + Hash, A: Clone>(
    reverse: &ReverseShortestPaths<T, A>,
    from: &T,
) -> Vec<Edge<T, A>> {
    let mut edges = Vec::new();
    let mut current = from.clone();
    while let Some(edge) = reverse.parent_edge.get(&current) {
        edges.push(edge.clone());
        current = edge.v.clone();
    }
    edges
}

fn materialize_initial<T: Clone + Eq + Hash, A: Clone>(
    reverse: &ReverseShortestPaths<T, A>,
    s: &T,
) -> GraphPath<T, A> {
    let edges = pi_chain_edges(reverse, s);
    let weight = reverse.distance_to_sink(s).unwrap_or(0.0);
    if edges.is_empty() {
        GraphPath::empty_at(s.clone())
    } else {
        GraphPath::from_edges(edges, weight)
    }
}

/// Materialises a derived token's path (spec §4.6): truncate `base` at the
/// last vertex matching the sidetrack's source, splice in the sidetrack,
/// then follow π-edges from the sidetrack's target on to `t`.
fn materialize_derived<T: Clone + Eq + Hash, A: Clone>(
    reverse: &ReverseShortestPaths<T, A>,
    base: &GraphPath<T, A>,
    node: &TreeHeapNode<T, A>,
) -> GraphPath<T, A> {
    let sidetrack = &node.sidetrack;
    let vertices = base.vertices();
    let idx = vertices
        .iter()
        .rposition(|v| *v == sidetrack.edge.u)
        .expect("sidetrack source must lie on its base path");

    let mut edges: Vec<Edge<T, A>> = base.edges()[0..idx].to_vec();
    edges.push(sidetrack.edge.clone());
    edges.extend(pi_chain_edges(reverse, &sidetrack.edge.v));

    let weight = base.weight() + sidetrack.delta;
    GraphPath::from_edges(edges, weight)
}

/**
A lazy, best-first enumeration of Eppstein paths (spec §4.5, §9's
"pull-based, no eager collection" note). Repeatedly calling [`Iterator::next`]
yields `s -> t` walks in non-decreasing weight order; the sequence is
infinite whenever a reachable zero-or-positive-weight cycle lies on some
`s -> t` walk, so unbounded callers must bound their own iteration (spec
§4.5, §8's boundary behaviour).
*/
pub struct EppsteinPaths<'e, T, A> {
    engine: &'e EppsteinEngine<T, A>,
    queue: BinaryHeap<PendingToken<T, A>>,
    next_count: u64,
    seeded: bool,
}

impl<'e, T: Clone + Eq + Hash + Ord, A: Clone> EppsteinPaths<'e, T, A> {
    fn new(engine: &'e EppsteinEngine<T, A>) -> EppsteinPaths<'e, T, A> {
        EppsteinPaths {
            engine,
            queue: BinaryHeap::new(),
            next_count: 0,
            seeded: false,
        }
    }

    fn push(&mut self, neg_cost: f64, kind: TokenKind<T, A>) {
        let count = self.next_count;
        self.next_count += 1;
        self.queue.push(PendingToken {
            neg_cost,
            count,
            kind,
        });
    }

    fn seed(&mut self) {
        self.seeded = true;
        if let Some(d_s) = self.engine.reverse.distance_to_sink(&self.engine.s) {
            self.push(-d_s, TokenKind::Initial);
        }
    }

    fn h_t_root(&self, v: &T) -> Link<T, A> {
        self.engine.tree.get(v)
    }
}

impl<'e, T: Clone + Eq + Hash + Ord, A: Clone> Iterator for EppsteinPaths<'e, T, A> {
    type Item = GraphPath<T, A>;

    fn next(&mut self) -> Option<GraphPath<T, A>> {
        if !self.seeded {
            self.seed();
        }

        let popped = self.queue.pop()?;

        match popped.kind {
            TokenKind::Initial => {
                let path = materialize_initial(&self.engine.reverse, &self.engine.s);
                let rc_path = Rc::new(path.clone());
                if let Some(root) = self.h_t_root(&self.engine.s) {
                    let cost = rc_path.weight() + root.sidetrack.delta;
                    self.push(
                        -cost,
                        TokenKind::Derived {
                            node: root,
                            base: rc_path,
                        },
                    );
                }
                Some(path)
            }
            TokenKind::Derived { node, base } => {
                let path = materialize_derived(&self.engine.reverse, &base, &node);

                if let Some(left) = node.left.clone() {
                    let cost = base.weight() + left.sidetrack.delta;
                    self.push(
                        -cost,
                        TokenKind::Derived {
                            node: left,
                            base: base.clone(),
                        },
                    );
                }
                if let Some(right) = node.right.clone() {
                    let cost = base.weight() + right.sidetrack.delta;
                    self.push(
                        -cost,
                        TokenKind::Derived {
                            node: right,
                            base: base.clone(),
                        },
                    );
                }
                if let Some(rest) = node.rest.clone() {
                    let cost = base.weight() + rest.sidetrack.delta;
                    self.push(
                        -cost,
                        TokenKind::Derived {
                            node: rest,
                            base: base.clone(),
                        },
                    );
                }

                let rc_path = Rc::new(path.clone());
                if let Some(next_root) = self.h_t_root(&node.sidetrack.edge.v) {
                    let cost = rc_path.weight() + next_root.sidetrack.delta;
                    self.push(
                        -cost,
                        TokenKind::Derived {
                            node: next_root,
                            base: rc_path,
                        },
                    );
                }

                Some(path)
            }
        }
    }
}
