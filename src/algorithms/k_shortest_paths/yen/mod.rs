//! Yen's k-shortest-simple-paths algorithm (spec §4.7): a baseline path
//! followed by a spur-node deviation loop over masked subgraphs.

mod engine;

pub use engine::{YenEngine, YenPaths};
