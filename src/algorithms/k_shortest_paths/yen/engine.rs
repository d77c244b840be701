use crate::algorithms::shortest_path::oracle::{SsspFactory, SsspOracle};
use crate::edge::Edge;
use crate::error::Error;
use crate::ext::HashSetExt;
use crate::graph::{GraphContract, MaskedView};
use crate::path::GraphPath;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

/**
Yen's k-shortest-simple-paths engine (spec §4.7): a baseline path, then a
spur-node deviation loop over masked subgraphs, with a candidate
min-priority-queue and de-duplication against the last accepted path.

Holds the graph by reference for the lifetime of every [`YenPaths`] it
produces, since each spur iteration builds a fresh
[`MaskedView`](crate::graph::MaskedView) over it.
*/
pub struct YenEngine<'g, G: GraphContract, F> {
    graph: &'g G,
    factory: F,
    s: G::Vertex,
    t: G::Vertex,
}

impl<'g, G, F> YenEngine<'g, G, F>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    pub fn new(graph: &'g G, s: G::Vertex, t: G::Vertex, factory: F) -> Result<Self, Error> {
        let vertices = graph.vertices();
        if !vertices.contains(&s) {
            return Err(Error::invalid_input("s is not a vertex of the graph"));
        }
        if !vertices.contains(&t) {
            return Err(Error::invalid_input("t is not a vertex of the graph"));
        }
        Ok(YenEngine {
            graph,
            factory,
            s,
            t,
        })
    }

    pub fn iter(&'g self) -> YenPaths<'g, G, F> {
        YenPaths::new(self)
    }
}

/// One entry of Yen's candidate min-heap B (spec §4.7), ordered by total
/// weight with an insertion-order tie-break.
struct Candidate<T, A> {
    neg_weight: f64,
    count: u64,
    path: GraphPath<T, A>,
}

impl<T, A> Ord for Candidate<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self
            .neg_weight
            .partial_cmp(&other.neg_weight)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self.count.cmp(&other.count),
            other => other,
        }
    }
}

impl<T, A> PartialOrd for Candidate<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, A> PartialEq for Candidate<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.neg_weight == other.neg_weight && self.count == other.count
    }
}

impl<T, A> Eq for Candidate<T, A> {}

/**
A lazy sequence of Yen paths (spec §4.7, §4.8's `pathsIterator`). Unlike
[`EppsteinPaths`](crate::algorithms::k_shortest_paths::eppstein::EppsteinPaths),
each step may consult a caller-supplied oracle and so may fail; `Item` is
therefore a `Result`. Once an error is yielded, every subsequent call
returns the same error (spec §7 — "no automatic retry").
*/
pub struct YenPaths<'g, G: GraphContract, F> {
    engine: &'g YenEngine<'g, G, F>,
    accepted: Vec<GraphPath<G::Vertex, G::Attribute>>,
    candidates: BinaryHeap<Candidate<G::Vertex, G::Attribute>>,
    next_index: usize,
    next_count: u64,
    error: Option<Error>,
}

impl<'g, G, F> YenPaths<'g, G, F>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    fn new(engine: &'g YenEngine<'g, G, F>) -> YenPaths<'g, G, F> {
        YenPaths {
            engine,
            accepted: Vec::new(),
            candidates: BinaryHeap::new(),
            next_index: 0,
            next_count: 0,
            error: None,
        }
    }

    fn push_candidate(&mut self, path: GraphPath<G::Vertex, G::Attribute>) {
        let count = self.next_count;
        self.next_count += 1;
        self.candidates.push(Candidate {
            neg_weight: -path.weight(),
            count,
            path,
        });
    }

    fn seed(&mut self) -> Result<Option<GraphPath<G::Vertex, G::Attribute>>, Error> {
        let mask = MaskedView::new(
            self.engine.graph,
            |_: &G::Vertex| false,
            |_: &Edge<G::Vertex, G::Attribute>| false,
        );
        let oracle = self.engine.factory.build(&mask);
        oracle.path(&self.engine.s, &self.engine.t)
    }

    /// Runs the full spur-index scan of spec §4.7 against the last accepted
    /// path, pushing every surviving candidate into `B`.
    fn expand_from(&mut self, p: &GraphPath<G::Vertex, G::Attribute>) -> Result<(), Error> {
        let vertices = p.vertices();
        let edges = p.edges();
        let l = edges.len();

        for i in 0..l.saturating_sub(1) {
            let spur_node = vertices[i].clone();
            let root_edges: Vec<Edge<G::Vertex, G::Attribute>> = edges[0..i].to_vec();
            let root_weight: f64 = root_edges.iter().map(|e| e.weight).sum();

            let root_vertices: HashSet<G::Vertex> = vertices[0..i].iter().cloned().collect();
            let masked_vertices = root_vertices.without(&spur_node);

            let mut masked_edges: HashSet<Edge<G::Vertex, G::Attribute>> = HashSet::new();
            for accepted_path in &self.accepted {
                let other_vertices = accepted_path.vertices();
                if other_vertices.len() >= i && other_vertices[0..i] == vertices[0..i] {
                    if let Some(edge) = accepted_path.edges().get(i) {
                        masked_edges.insert(edge.clone());
                    }
                }
            }

            let mask = MaskedView::new(
                self.engine.graph,
                move |v: &G::Vertex| masked_vertices.contains(v),
                move |e: &Edge<G::Vertex, G::Attribute>| masked_edges.contains(e),
            );
            let oracle = self.engine.factory.build(&mask);
            let spur_path = oracle.path(&spur_node, &self.engine.t)?;

            if let Some(spur_path) = spur_path {
                if !spur_path.is_empty() {
                    let mut total_edges = root_edges;
                    total_edges.extend(spur_path.edges().iter().cloned());
                    let total_weight = root_weight + spur_path.weight();
                    self.push_candidate(GraphPath::from_edges(total_edges, total_weight));
                }
            }
        }

        Ok(())
    }
}

impl<'g, G, F> Iterator for YenPaths<'g, G, F>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    type Item = Result<GraphPath<G::Vertex, G::Attribute>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = &self.error {
            return Some(Err(err.clone()));
        }

        if self.next_index < self.accepted.len() {
            let path = self.accepted[self.next_index].clone();
            self.next_index += 1;
            return Some(Ok(path));
        }

        if self.accepted.is_empty() {
            log::debug!("yen: computing baseline path");
            return match self.seed() {
                Ok(Some(path)) => {
                    self.accepted.push(path.clone());
                    self.next_index = 1;
                    Some(Ok(path))
                }
                Ok(None) => None,
                Err(e) => {
                    self.error = Some(e.clone());
                    Some(Err(e))
                }
            };
        }

        let last = self.accepted.last().unwrap().clone();
        log::debug!("yen: expanding spur candidates from last accepted path");
        if let Err(e) = self.expand_from(&last) {
            self.error = Some(e.clone());
            return Some(Err(e));
        }

        loop {
            let candidate = self.candidates.pop()?;
            if candidate.path.edges() == last.edges() {
                continue;
            }
            self.accepted.push(candidate.path.clone());
            self.next_index += 1;
            return Some(Ok(candidate.path));
        }
    }
}

/// A deliberately-failing oracle, used only by this module's tests to prove
/// `YenEngine`/`YenPaths` are actually generic over `F: SsspFactory<...>`
/// rather than exercised by `DijkstraFactory` alone, and to exercise
/// `ErrorKind::OracleFailure` end to end.
#[cfg(test)]
struct FailingOracle;

#[cfg(test)]
impl<G: GraphContract> SsspOracle<G> for FailingOracle {
    fn path(
        &self,
        _u: &G::Vertex,
        _v: &G::Vertex,
    ) -> Result<Option<GraphPath<G::Vertex, G::Attribute>>, Error> {
        Err(Error::oracle_failure("stub oracle always fails"))
    }
}

#[cfg(test)]
struct FailingFactory;

#[cfg(test)]
impl<G: GraphContract> SsspFactory<G> for FailingFactory {
    type Oracle<'g> = FailingOracle where G: 'g;

    fn build<'g>(&self, _graph: &'g G) -> Self::Oracle<'g> {
        FailingOracle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::shortest_path::DijkstraFactory;
    use crate::error::ErrorKind;
    use crate::graph::Graph;

    #[test]
    fn simple_graph_yields_simple_paths_in_nondecreasing_weight() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(0, 2, 3.0);

        let engine = YenEngine::new(&graph, 0, 2, DijkstraFactory).unwrap();
        let paths: Vec<_> = engine.iter().take(5).map(|r| r.unwrap()).collect();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].weight(), 2.0);
        assert_eq!(paths[1].weight(), 3.0);
        for path in &paths {
            assert!(path.is_simple());
        }
    }

    #[test]
    fn failing_oracle_factory_surfaces_oracle_failure_and_is_replayed() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);

        let engine = YenEngine::new(&graph, 0, 1, FailingFactory).unwrap();
        let mut paths = engine.iter();

        let first = paths.next().unwrap().unwrap_err();
        assert_eq!(first.kind, ErrorKind::OracleFailure);

        // no automatic retry: the cached error replays on every later call.
        let second = paths.next().unwrap().unwrap_err();
        assert_eq!(second.kind, ErrorKind::OracleFailure);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let mut graph: Graph<i32, ()> = Graph::new();
        graph.add_edge(0, 1, 1.0);

        let err = YenEngine::new(&graph, 5, 1, DijkstraFactory).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidInput);
    }
}
