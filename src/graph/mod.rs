pub mod traits;
pub mod adjacency;

pub use traits::{Graph, MutableGraph};
pub use adjacency::AdjacencyGraph;
