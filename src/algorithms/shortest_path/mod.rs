/// Generic single-source Dijkstra, shared by Eppstein's reverse
/// shortest-path-tree preprocessing and Yen's default oracle.
pub mod dijkstra;

/// The SSSP-oracle collaborator contract Yen consumes (spec §6, §9), plus
/// the default Dijkstra-backed implementation.
pub mod oracle;

pub use oracle::{DijkstraFactory, DijkstraOracle, SsspFactory, SsspOracle};
