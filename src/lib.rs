//! Route Solver - shortest paths on weighted directed graphs
//!
//! This library computes shortest paths over small, static, weighted
//! directed graphs whose vertices carry opaque labels. Three independent
//! solvers are provided:
//!
//! - [`Dijkstra`]: single-source via a min-priority queue with lazy
//!   deletion. Requires non-negative edge weights.
//! - [`BellmanFord`]: single-source via iterative edge relaxation.
//!   Tolerates negative weights and detects negative cycles.
//! - [`FloydWarshall`]: all-pairs via dynamic programming, producing a
//!   distance table and a next-hop table for path recovery.
//!
//! The graph is built once and is read-only thereafter; solvers are
//! stateless and may run concurrently against the same graph.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    floyd_warshall::{AllPairsResult, FloydWarshall},
    ShortestPathTree, SingleSourceAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Re-exported so callers can satisfy the `Ord` weight bound required by
/// the priority-queue solver with ordinary floats.
pub use ordered_float::OrderedFloat;

use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("graph contains a negative weight cycle")]
    NegativeCycle,
}

impl Error {
    /// Builds an [`Error::UnknownVertex`] from an opaque vertex label.
    pub(crate) fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
