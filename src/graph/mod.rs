pub mod traits;
pub mod adjacency;
pub mod generators;
pub mod loader;

pub use traits::{Edge, Graph, MutableGraph, Weight};
pub use adjacency::AdjacencyGraph;
