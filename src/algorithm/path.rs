use std::collections::BTreeMap;
use std::fmt::Debug;

/// Reconstructs an ordered start-to-end vertex sequence from a predecessor
/// table.
///
/// Walks predecessors backward from `end` until a vertex with no recorded
/// predecessor, then reverses. If the walk never reaches `start` the end
/// vertex is unreachable (or the table is inconsistent) and an empty path
/// is returned rather than a partial one. When `start == end` the walk
/// stops immediately and yields `[start]`.
pub fn reconstruct<V>(predecessors: &BTreeMap<V, V>, start: &V, end: &V) -> Vec<V>
where
    V: Clone + Ord + Debug,
{
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(previous) = predecessors.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();

    if path.first() == Some(start) {
        path
    } else {
        Vec::new()
    }
}
