use std::collections::BTreeMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::path;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a single-source shortest path computation
///
/// Distances and predecessors are sparse: a vertex absent from `distances`
/// is unreachable from the source, and a vertex absent from `predecessors`
/// has no recorded predecessor (the source itself, or unreached vertices).
/// Both tables are private to one solve and discarded with this value.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    source: V,
    distances: BTreeMap<V, W>,
    predecessors: BTreeMap<V, V>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: V, distances: BTreeMap<V, W>, predecessors: BTreeMap<V, V>) -> Self {
        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }

    /// The source vertex this tree was computed from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Minimal distance from the source, or `None` if unreachable
    pub fn distance_to(&self, end: &V) -> Option<W> {
        self.distances.get(end).copied()
    }

    /// Ordered source-to-end vertex sequence, empty if unreachable
    pub fn path_to(&self, end: &V) -> Vec<V> {
        path::reconstruct(&self.predecessors, &self.source, end)
    }
}

/// Trait for single-source shortest path algorithms
pub trait SingleSourceAlgorithm<V, W, G>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn shortest_path_tree(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>>;

    /// Compute the shortest path between two vertices.
    ///
    /// Returns the minimal distance and the ordered path including both
    /// endpoints. An unreachable end is a normal result, `(None, [])`.
    /// `start == end` yields `(Some(zero), [start])`. Unknown start or end
    /// vertices fail with [`Error::UnknownVertex`].
    fn shortest_path(&self, graph: &G, start: &V, end: &V) -> Result<(Option<W>, Vec<V>)> {
        if !graph.has_vertex(end) {
            return Err(Error::unknown_vertex(end));
        }

        let tree = self.shortest_path_tree(graph, start)?;
        Ok((tree.distance_to(end), tree.path_to(end)))
    }
}
