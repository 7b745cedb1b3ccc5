//! Breadth-first distances.

use std::collections::{BTreeSet, VecDeque};

use super::adjacency;

/// Number of edges on a shortest path from `u` to `v`.
///
/// Returns `None` if either vertex is absent or `v` is unreachable.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::graph::distance;
///
/// let vertices = ['A', 'B', 'C', 'F'];
/// let edges: BTreeSet<_> = [('A', 'F'), ('B', 'C'), ('C', 'F')].into_iter().collect();
/// assert_eq!(distance(&vertices, &edges, &'A', &'B'), Some(3));
/// ```
pub fn distance<V: Ord + Clone>(
    vertices: &[V],
    edges: &BTreeSet<(V, V)>,
    u: &V,
    v: &V,
) -> Option<usize> {
    distance_classes(vertices, edges, u)
        .iter()
        .position(|class| class.contains(v))
}

/// Partitions the vertices reachable from `u` by their distance.
///
/// Index `d` of the result holds every vertex at distance `d`; index 0 is
/// `{u}`. Unreachable vertices are omitted. An absent `u` yields no classes.
pub fn distance_classes<V: Ord + Clone>(
    vertices: &[V],
    edges: &BTreeSet<(V, V)>,
    u: &V,
) -> Vec<BTreeSet<V>> {
    let adj = adjacency(vertices, edges);
    if !adj.contains_key(u) {
        return Vec::new();
    }

    let mut classes: Vec<BTreeSet<V>> = Vec::new();
    let mut seen: BTreeSet<&V> = BTreeSet::from([u]);
    let mut queue: VecDeque<(&V, usize)> = VecDeque::from([(u, 0)]);

    while let Some((x, d)) = queue.pop_front() {
        if classes.len() == d {
            classes.push(BTreeSet::new());
        }
        classes[d].insert(x.clone());

        for &y in &adj[x] {
            if seen.insert(y) {
                queue.push_back((y, d + 1));
            }
        }
    }

    classes
}
