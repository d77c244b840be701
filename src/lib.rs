#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

mod edge;
pub use edge::Edge;

mod error;
pub use error::{Error, ErrorKind};

mod ext;

mod graph;
pub use graph::{Graph, GraphContract, MaskedView, ReversedView};

mod node;
pub use node::Node;

mod path;
pub use path::GraphPath;

pub mod algorithms;
pub mod generators;

pub use algorithms::k_shortest_paths::{
    eppstein_k_shortest_paths, eppstein_paths_iter, yen_k_shortest_paths,
    yen_k_shortest_paths_default, yen_paths_iter, yen_paths_iter_default, EppsteinEngineHandle,
    YenEngineHandle,
};
pub use algorithms::shortest_path::{DijkstraFactory, DijkstraOracle, SsspFactory, SsspOracle};
