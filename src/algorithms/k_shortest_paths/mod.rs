//! The public k-shortest-paths surface (spec §4.8, §6): bounded `paths`
//! collection and unbounded `pathsIterator` forms for both algorithms.

pub mod eppstein;
pub mod yen;

use crate::error::Error;
use crate::graph::{GraphContract, MaskedView};
use crate::path::GraphPath;
use eppstein::{EppsteinEngine, EppsteinPaths};
use yen::{YenEngine, YenPaths};

use crate::algorithms::shortest_path::{DijkstraFactory, SsspFactory};

/// Up to `k` shortest `s -> t` walks, in non-decreasing weight order,
/// repeats permitted (spec §4.8). Fewer than `k` are returned when the
/// iterator terminates first (e.g. no sidetracks remain and `t` is
/// unreachable beyond the one path already produced).
pub fn eppstein_k_shortest_paths<G>(
    graph: &G,
    s: G::Vertex,
    t: G::Vertex,
    k: usize,
) -> Result<Vec<GraphPath<G::Vertex, G::Attribute>>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    if k == 0 {
        return Err(Error::invalid_input("k must be positive"));
    }
    let engine = EppsteinEngine::new(graph, s, t)?;
    Ok(engine.iter().take(k).collect())
}

/// A lazy, possibly-infinite sequence of `s -> t` walks in non-decreasing
/// weight order (spec §4.8's `pathsIterator`). Callers must bound their own
/// iteration when the graph has a reachable non-negative-weight cycle on
/// some `s -> t` walk (spec §4.5, §8).
pub fn eppstein_paths_iter<G>(
    graph: &G,
    s: G::Vertex,
    t: G::Vertex,
) -> Result<EppsteinEngineHandle<G::Vertex, G::Attribute>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    let engine = EppsteinEngine::new(graph, s, t)?;
    Ok(EppsteinEngineHandle { engine })
}

/// Owns the preprocessed [`EppsteinEngine`] so callers can obtain an
/// [`EppsteinPaths`] iterator without juggling the engine's lifetime
/// themselves.
pub struct EppsteinEngineHandle<T, A> {
    engine: EppsteinEngine<T, A>,
}

impl<T: Clone + Eq + std::hash::Hash + Ord, A: Clone> EppsteinEngineHandle<T, A> {
    pub fn iter(&self) -> EppsteinPaths<'_, T, A> {
        self.engine.iter()
    }
}

/// Up to `k` shortest `s -> t` **simple** paths, in non-decreasing weight
/// order, using the given SSSP oracle factory (spec §4.8).
pub fn yen_k_shortest_paths<'g, G, F>(
    graph: &'g G,
    s: G::Vertex,
    t: G::Vertex,
    k: usize,
    factory: F,
) -> Result<Vec<GraphPath<G::Vertex, G::Attribute>>, Error>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    if k == 0 {
        return Err(Error::invalid_input("k must be positive"));
    }
    let engine = YenEngine::new(graph, s, t, factory)?;
    yen_collect(&engine, k)
}

fn yen_collect<'g, G, F>(
    engine: &'g YenEngine<'g, G, F>,
    k: usize,
) -> Result<Vec<GraphPath<G::Vertex, G::Attribute>>, Error>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    let mut out = Vec::with_capacity(k);
    for item in engine.iter().take(k) {
        out.push(item?);
    }
    Ok(out)
}

/// Like [`yen_k_shortest_paths`], but with the built-in Dijkstra-backed
/// oracle factory (spec §6's "`_default` convenience variant").
pub fn yen_k_shortest_paths_default<G>(
    graph: &G,
    s: G::Vertex,
    t: G::Vertex,
    k: usize,
) -> Result<Vec<GraphPath<G::Vertex, G::Attribute>>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    yen_k_shortest_paths(graph, s, t, k, DijkstraFactory)
}

/// A lazy sequence of Yen paths (spec §4.8's `pathsIterator`); each item may
/// fail if the supplied oracle fails (spec §7).
pub fn yen_paths_iter<'g, G, F>(
    graph: &'g G,
    s: G::Vertex,
    t: G::Vertex,
    factory: F,
) -> Result<YenEngineHandle<'g, G, F>, Error>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    let engine = YenEngine::new(graph, s, t, factory)?;
    Ok(YenEngineHandle { engine })
}

/// Like [`yen_paths_iter`], but with the built-in Dijkstra-backed oracle
/// factory.
pub fn yen_paths_iter_default<G>(
    graph: &G,
    s: G::Vertex,
    t: G::Vertex,
) -> Result<YenEngineHandle<'_, G, DijkstraFactory>, Error>
where
    G: GraphContract,
    G::Vertex: Ord,
{
    yen_paths_iter(graph, s, t, DijkstraFactory)
}

/// Owns the [`YenEngine`] so callers can obtain a [`YenPaths`] iterator
/// without juggling the engine's lifetime themselves.
pub struct YenEngineHandle<'g, G: GraphContract, F> {
    engine: YenEngine<'g, G, F>,
}

impl<'g, G, F> YenEngineHandle<'g, G, F>
where
    G: GraphContract,
    F: SsspFactory<MaskedView<'g, G>>,
{
    pub fn iter(&'g self) -> YenPaths<'g, G, F> {
        self.engine.iter()
    }
}
