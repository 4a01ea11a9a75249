use std::collections::BTreeMap;
use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// Iterative edge relaxation solver (Bellman-Ford algorithm)
///
/// Tolerates negative edge weights. Performs exactly |V| - 1 full passes
/// over every edge, then one extra detection pass: if any edge still
/// relaxes, a negative-weight cycle influences the result and the solve
/// fails with [`Error::NegativeCycle`] instead of returning distances.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<V, W, G> SingleSourceAlgorithm<V, W, G> for BellmanFord
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_path_tree(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }

        let mut distances: BTreeMap<V, W> = BTreeMap::new();
        let mut predecessors: BTreeMap<V, V> = BTreeMap::new();

        distances.insert(source.clone(), W::zero());

        let passes = graph.vertex_count().saturating_sub(1);
        for _ in 0..passes {
            for u in graph.vertices() {
                let dist_u = match distances.get(u) {
                    Some(&d) => d,
                    None => continue,
                };

                for (v, weight) in graph.neighbors(u) {
                    let candidate = dist_u + weight;

                    let improves = match distances.get(v) {
                        None => true,
                        Some(&current) => candidate < current,
                    };

                    if improves {
                        distances.insert(v.clone(), candidate);
                        predecessors.insert(v.clone(), u.clone());
                    }
                }
            }
        }

        // One more pass over every edge: any remaining improvement means a
        // reachable negative-weight cycle.
        for u in graph.vertices() {
            let dist_u = match distances.get(u) {
                Some(&d) => d,
                None => continue,
            };

            for (v, weight) in graph.neighbors(u) {
                let candidate = dist_u + weight;
                let improves = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improves {
                    debug!("edge {:?} -> {:?} still relaxes after {} passes", u, v, passes);
                    return Err(Error::NegativeCycle);
                }
            }
        }

        Ok(ShortestPathTree::new(source.clone(), distances, predecessors))
    }
}
