pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;

pub use traits::{ShortestPathTree, SingleSourceAlgorithm};
