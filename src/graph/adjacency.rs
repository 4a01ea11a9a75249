use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A directed graph stored as label-keyed adjacency maps
///
/// Vertices are opaque labels supplied by the caller. Ordered maps are used
/// throughout so vertex and edge iteration order is deterministic, which in
/// turn makes solver results reproducible across invocations.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Every known vertex, including isolated sinks
    vertices: BTreeSet<V>,

    /// Outgoing edges for each vertex: source -> {destination -> weight}
    outgoing: BTreeMap<V, BTreeMap<V, W>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            vertices: BTreeSet::new(),
            outgoing: BTreeMap::new(),
        }
    }

    /// Builds a graph from a complete adjacency specification.
    ///
    /// Every key is declared as a vertex. Destinations that never appear as
    /// a key are declared as sink vertices with no outgoing edges. Weights
    /// are stored verbatim; the last weight wins if the caller supplies the
    /// same ordered pair twice.
    pub fn from_adjacency(adjacency: BTreeMap<V, BTreeMap<V, W>>) -> Self {
        let mut vertices: BTreeSet<V> = adjacency.keys().cloned().collect();
        for edges in adjacency.values() {
            for destination in edges.keys() {
                vertices.insert(destination.clone());
            }
        }

        AdjacencyGraph {
            vertices,
            outgoing: adjacency,
        }
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().map(|(destination, weight)| (destination, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::unknown_vertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::unknown_vertex(to));
        }

        self.outgoing
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight);
        Ok(())
    }
}
