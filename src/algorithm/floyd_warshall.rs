use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use log::trace;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::{Error, Result};

/// All-pairs shortest path tables with next-hop path recovery
///
/// Both tables are sparse over ordered vertex pairs: a pair absent from the
/// distance table is unreachable, a pair absent from the next-hop table has
/// no path to walk.
#[derive(Debug, Clone)]
pub struct AllPairsResult<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    vertices: BTreeSet<V>,
    distances: BTreeMap<(V, V), W>,
    next_hops: BTreeMap<(V, V), V>,
}

impl<V, W> AllPairsResult<V, W>
where
    V: Clone + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Minimal distance between two vertices, or `None` if unreachable
    pub fn distance(&self, from: &V, to: &V) -> Option<W> {
        self.distances.get(&(from.clone(), to.clone())).copied()
    }

    /// Next vertex to step to on the shortest path from `from` to `to`
    pub fn next_hop(&self, from: &V, to: &V) -> Option<&V> {
        self.next_hops.get(&(from.clone(), to.clone()))
    }

    /// Recovers the shortest path between two vertices from the tables.
    ///
    /// Returns `(None, [])` when no path exists and `(Some(zero), [start])`
    /// when `start == end`. Unknown vertices fail with
    /// [`Error::UnknownVertex`]. The walk follows next hops from `start`
    /// until it reaches `end`, so the result includes both endpoints.
    pub fn path_between(&self, start: &V, end: &V) -> Result<(Option<W>, Vec<V>)> {
        if !self.vertices.contains(start) {
            return Err(Error::unknown_vertex(start));
        }
        if !self.vertices.contains(end) {
            return Err(Error::unknown_vertex(end));
        }

        let mut path = Vec::new();
        let mut current = start.clone();
        while current != *end {
            let next = match self.next_hop(&current, end) {
                Some(next) => next.clone(),
                None => return Ok((None, Vec::new())),
            };
            path.push(current);
            current = next;
        }
        path.push(current);

        Ok((self.distance(start, end), path))
    }
}

/// Dynamic-programming all-pairs shortest path solver (Floyd-Warshall)
///
/// Computes minimal distances for every ordered vertex pair in one cubic
/// pass, along with a next-hop table for path recovery. Negative edge
/// weights are tolerated, but results are undefined for pairs affected by
/// a reachable negative-weight cycle; no detection is attempted.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full distance and next-hop tables for the graph
    pub fn all_pairs<V, W, G>(&self, graph: &G) -> AllPairsResult<V, W>
    where
        V: Clone + Ord + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<V, W>,
    {
        let order: Vec<V> = graph.vertices().cloned().collect();

        let mut distances: BTreeMap<(V, V), W> = BTreeMap::new();
        let mut next_hops: BTreeMap<(V, V), V> = BTreeMap::new();

        // Base case: zero-distance self pairs, then the direct edges. Edge
        // insertion comes second so a self-loop weight overrides the zero.
        for v in &order {
            distances.insert((v.clone(), v.clone()), W::zero());
        }
        for u in &order {
            for (v, weight) in graph.neighbors(u) {
                distances.insert((u.clone(), v.clone()), weight);
                next_hops.insert((u.clone(), v.clone()), v.clone());
            }
        }

        for k in &order {
            trace!("considering paths through intermediate vertex {:?}", k);
            for i in &order {
                let d_ik = match distances.get(&(i.clone(), k.clone())) {
                    Some(&d) => d,
                    None => continue,
                };

                for j in &order {
                    let d_kj = match distances.get(&(k.clone(), j.clone())) {
                        Some(&d) => d,
                        None => continue,
                    };

                    let through_k = d_ik + d_kj;
                    let improves = match distances.get(&(i.clone(), j.clone())) {
                        None => true,
                        Some(&current) => through_k < current,
                    };

                    if improves {
                        distances.insert((i.clone(), j.clone()), through_k);
                        match next_hops.get(&(i.clone(), k.clone())).cloned() {
                            Some(hop) => {
                                next_hops.insert((i.clone(), j.clone()), hop);
                            }
                            None => {
                                next_hops.remove(&(i.clone(), j.clone()));
                            }
                        }
                    }
                }
            }
        }

        AllPairsResult {
            vertices: order.into_iter().collect(),
            distances,
            next_hops,
        }
    }
}
