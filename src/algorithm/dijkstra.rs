use std::collections::BTreeMap;
use std::fmt::Debug;

use log::trace;
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Priority-queue shortest path solver (Dijkstra's algorithm)
///
/// Correct only for graphs with non-negative edge weights. The solver does
/// not validate this precondition; negative weights give silently wrong
/// distances. Use [`crate::BellmanFord`] when weights may be negative.
///
/// The queue uses lazy deletion: a vertex is re-pushed on every distance
/// improvement, and entries worse than the recorded best are skipped when
/// popped. A vertex's distance is final the first time it pops as the
/// minimum.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> SingleSourceAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }

        let mut distances: BTreeMap<V, W> = BTreeMap::new();
        let mut predecessors: BTreeMap<V, V> = BTreeMap::new();

        distances.insert(source.clone(), W::zero());

        let mut queue = MinQueue::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Skip stale entries left behind by lazy deletion
            if let Some(&best) = distances.get(&u) {
                if dist_u > best {
                    trace!("skipping stale queue entry for {:?}", u);
                    continue;
                }
            }

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(&u) {
                let candidate = dist_u + weight;

                let improves = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), candidate);
                }
            }
        }

        Ok(ShortestPathTree::new(source.clone(), distances, predecessors))
    }
}
