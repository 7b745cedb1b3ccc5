//! Topological ordering.
//!
//! # Algorithm
//! Kahn's algorithm: repeatedly emit a vertex with no remaining incoming
//! edges. The ready set is ordered, so among simultaneously available
//! vertices the smallest is emitted first. If vertices remain once the
//! ready set is exhausted, they lie on a cycle.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, BTreeSet};

/// Orders `vertices` so that every edge `(u, v)` has `u` before `v`.
///
/// Returns `None` if the graph contains a cycle (self-loops included).
/// Edges naming unknown vertices are ignored.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::digraph::top_ordering;
///
/// let vertices = BTreeSet::from([0, 1, 2]);
/// let edges = BTreeSet::from([(2, 0), (0, 1)]);
/// assert_eq!(top_ordering(&vertices, &edges), Some(vec![2, 0, 1]));
///
/// let cyclic = BTreeSet::from([(0, 1), (1, 0)]);
/// assert_eq!(top_ordering(&vertices, &cyclic), None);
/// ```
pub fn top_ordering<V: Ord + Clone>(
    vertices: &BTreeSet<V>,
    edges: &BTreeSet<(V, V)>,
) -> Option<Vec<V>> {
    let mut successors: BTreeMap<&V, Vec<&V>> = BTreeMap::new();
    let mut in_degree: BTreeMap<&V, usize> = vertices.iter().map(|v| (v, 0)).collect();

    for (u, v) in edges {
        if !vertices.contains(u) || !vertices.contains(v) {
            continue;
        }
        successors.entry(u).or_default().push(v);
        if let Some(d) = in_degree.get_mut(v) {
            *d += 1;
        }
    }

    let mut ready: BTreeSet<&V> = in_degree
        .iter()
        .filter(|(_, &d)| d == 0)
        .map(|(&v, _)| v)
        .collect();
    let mut order = Vec::with_capacity(vertices.len());

    while let Some(u) = ready.pop_first() {
        order.push(u.clone());
        for &v in successors.get(u).into_iter().flatten() {
            if let Some(d) = in_degree.get_mut(v) {
                *d -= 1;
                if *d == 0 {
                    ready.insert(v);
                }
            }
        }
    }

    (order.len() == vertices.len()).then_some(order)
}
