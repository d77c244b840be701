//! Eppstein's k-shortest-walks algorithm (spec §4.2-§4.6): reverse
//! shortest-path-tree preprocessing, sidetrack sets, the persistent `H_T`
//! heap, and best-first enumeration.

mod engine;
mod reverse_sssp;
mod sidetrack;
mod tree_heap;

pub use engine::{EppsteinEngine, EppsteinPaths};
