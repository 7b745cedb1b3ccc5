//! Undirected graph utilities.
//!
//! Free functions over a vertex collection and an edge set. Edges are
//! treated as undirected: `(u, v)` and `(v, u)` are the same edge, and a
//! caller may supply either or both orientations. Nothing here knows about
//! tournaments.
//!
//! # Functions
//!
//! - [`distance`]: shortest-path hop count between two vertices (BFS)
//! - [`distance_classes`]: vertices partitioned by distance from a source
//! - [`min_colouring`]: exact minimum vertex colouring
//! - [`colour_classes_from_colouring`]: vertices grouped by colour
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.2 (BFS)

mod colouring;
mod distance;

pub use colouring::{colour_classes_from_colouring, min_colouring};
pub use distance::{distance, distance_classes};

use std::collections::{BTreeMap, BTreeSet};

/// Builds a symmetric adjacency map restricted to `vertices`.
///
/// Self-loops and edges touching unknown vertices are dropped.
pub(crate) fn adjacency<'a, V: Ord>(
    vertices: impl IntoIterator<Item = &'a V>,
    edges: &'a BTreeSet<(V, V)>,
) -> BTreeMap<&'a V, BTreeSet<&'a V>>
where
    V: 'a,
{
    let mut adj: BTreeMap<&V, BTreeSet<&V>> =
        vertices.into_iter().map(|v| (v, BTreeSet::new())).collect();

    for (u, v) in edges {
        if u == v || !adj.contains_key(u) || !adj.contains_key(v) {
            continue;
        }
        if let Some(n) = adj.get_mut(u) {
            n.insert(v);
        }
        if let Some(n) = adj.get_mut(v) {
            n.insert(u);
        }
    }

    adj
}
