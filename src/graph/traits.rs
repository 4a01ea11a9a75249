use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted directed graph with opaque vertex labels
pub trait Graph<V, W>: Debug
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all known vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// (destination, weight) pairs. Empty for sinks and unknown vertices.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for incremental graph construction
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Declares a vertex. Returns false if it was already known.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge between two declared vertices, overwriting any
    /// existing weight for the same ordered pair. Fails with
    /// [`crate::Error::UnknownVertex`] if either endpoint is undeclared.
    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<()>;
}
