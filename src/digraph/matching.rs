//! Maximum bipartite matching by augmenting paths.
//!
//! # Algorithm
//! For each left vertex in order, search depth-first for an augmenting
//! path: an unmatched right neighbour, or a matched one whose partner can be
//! re-routed to another right vertex. Each successful search grows the
//! matching by one edge; after every left vertex has been tried the
//! matching is maximum (Berge's lemma).
//!
//! # Complexity
//! O(|A| · |E|).

use std::collections::{BTreeMap, BTreeSet};

/// Finds a maximum matching between partite sets `a` and `b`.
///
/// Edges go from `a` to `b`; edges naming a vertex outside either set are
/// ignored. Each vertex appears in at most one returned pair.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::digraph::max_matching;
///
/// let a = BTreeSet::from(["g1", "g2"]);
/// let b = BTreeSet::from(['x', 'y']);
/// let edges = BTreeSet::from([("g1", 'x'), ("g2", 'x'), ("g2", 'y')]);
///
/// let m = max_matching(&a, &b, &edges);
/// assert_eq!(m, BTreeSet::from([("g1", 'x'), ("g2", 'y')]));
/// ```
pub fn max_matching<A, B>(
    a: &BTreeSet<A>,
    b: &BTreeSet<B>,
    edges: &BTreeSet<(A, B)>,
) -> BTreeSet<(A, B)>
where
    A: Ord + Clone,
    B: Ord + Clone,
{
    let left: Vec<&A> = a.iter().collect();
    let right: Vec<&B> = b.iter().collect();
    let left_index: BTreeMap<&A, usize> = left.iter().enumerate().map(|(i, &x)| (x, i)).collect();
    let right_index: BTreeMap<&B, usize> =
        right.iter().enumerate().map(|(j, &y)| (y, j)).collect();

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); left.len()];
    for (x, y) in edges {
        if let (Some(&i), Some(&j)) = (left_index.get(x), right_index.get(y)) {
            adj[i].push(j);
        }
    }

    let mut partner: Vec<Option<usize>> = vec![None; right.len()];
    for i in 0..left.len() {
        let mut visited = vec![false; right.len()];
        augment(i, &adj, &mut visited, &mut partner);
    }

    partner
        .iter()
        .enumerate()
        .filter_map(|(j, p)| p.map(|i| (left[i].clone(), right[j].clone())))
        .collect()
}

fn augment(
    i: usize,
    adj: &[Vec<usize>],
    visited: &mut [bool],
    partner: &mut [Option<usize>],
) -> bool {
    for &j in &adj[i] {
        if visited[j] {
            continue;
        }
        visited[j] = true;

        let free = match partner[j] {
            None => true,
            Some(k) => augment(k, adj, visited, partner),
        };
        if free {
            partner[j] = Some(i);
            return true;
        }
    }
    false
}
