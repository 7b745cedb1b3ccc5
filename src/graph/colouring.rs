//! Exact minimum vertex colouring.
//!
//! # Algorithm
//! Iterative deepening on the colour count `k`. For each `k`, vertices are
//! coloured by backtracking in the caller's order; a vertex may reuse any
//! colour already opened or open exactly one new colour, which removes
//! permutations of equivalent colourings from the search.
//!
//! # Complexity
//! Exponential in the worst case (graph colouring is NP-hard). Tournament
//! conflict graphs are small enough for this to finish quickly.
//!
//! # Reference
//! Brélaz (1979), "New methods to color the vertices of a graph"

use std::collections::{BTreeMap, BTreeSet};

/// Colours `vertices` with the fewest colours so that no edge joins two
/// vertices of the same colour.
///
/// Returns `(k, colouring)` where every colour lies in `0..k`. Duplicate
/// vertices are coloured once. The result depends only on the vertex order
/// and edge set, so identical input always yields an identical colouring.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::graph::min_colouring;
///
/// // Odd cycle needs three colours.
/// let edges: BTreeSet<_> = [(0, 1), (1, 2), (2, 0)].into_iter().collect();
/// let (k, colours) = min_colouring(&[0, 1, 2], &edges);
/// assert_eq!(k, 3);
/// assert_ne!(colours[&0], colours[&1]);
/// ```
pub fn min_colouring<V: Ord + Clone>(
    vertices: &[V],
    edges: &BTreeSet<(V, V)>,
) -> (usize, BTreeMap<V, usize>) {
    let mut order: Vec<&V> = Vec::with_capacity(vertices.len());
    let mut index: BTreeMap<&V, usize> = BTreeMap::new();
    for v in vertices {
        if !index.contains_key(v) {
            index.insert(v, order.len());
            order.push(v);
        }
    }

    let n = order.len();
    let mut earlier: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (u, v) in edges {
        if let (Some(&i), Some(&j)) = (index.get(u), index.get(v)) {
            // Only neighbours coloured before a vertex constrain it.
            match i.cmp(&j) {
                std::cmp::Ordering::Less => earlier[j].push(i),
                std::cmp::Ordering::Greater => earlier[i].push(j),
                std::cmp::Ordering::Equal => {}
            }
        }
    }

    for k in 1..=n {
        let mut colours = vec![0usize; n];
        if extend(0, 0, k, &earlier, &mut colours) {
            let colouring = order
                .iter()
                .zip(colours)
                .map(|(&v, c)| (v.clone(), c))
                .collect();
            return (k, colouring);
        }
    }

    (0, BTreeMap::new())
}

/// Tries to colour vertices `i..` given that colours `0..opened` are in use.
fn extend(
    i: usize,
    opened: usize,
    k: usize,
    earlier: &[Vec<usize>],
    colours: &mut [usize],
) -> bool {
    if i == colours.len() {
        return true;
    }

    for c in 0..(opened + 1).min(k) {
        if earlier[i].iter().any(|&j| colours[j] == c) {
            continue;
        }
        colours[i] = c;
        if extend(i + 1, opened.max(c + 1), k, earlier, colours) {
            return true;
        }
    }

    false
}

/// Groups vertices by colour.
///
/// Index `c` of the result holds the vertices coloured `c`. Colours with no
/// vertices are skipped, so the result never contains an empty class.
pub fn colour_classes_from_colouring<V: Ord + Clone>(
    colouring: &BTreeMap<V, usize>,
) -> Vec<BTreeSet<V>> {
    let mut by_colour: BTreeMap<usize, BTreeSet<V>> = BTreeMap::new();
    for (v, &c) in colouring {
        by_colour.entry(c).or_default().insert(v.clone());
    }
    by_colour.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(u32, u32)]) -> BTreeSet<(u32, u32)> {
        pairs.iter().copied().collect()
    }

    fn assert_proper(colouring: &BTreeMap<u32, usize>, e: &BTreeSet<(u32, u32)>) {
        for (u, v) in e {
            if u != v {
                assert_ne!(colouring[u], colouring[v], "edge ({u}, {v}) is monochrome");
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let (k, c) = min_colouring::<u32>(&[], &BTreeSet::new());
        assert_eq!(k, 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_independent_set() {
        let (k, c) = min_colouring(&[1, 2, 3, 4], &BTreeSet::new());
        assert_eq!(k, 1);
        assert!(c.values().all(|&x| x == 0));
    }

    #[test]
    fn test_bipartite_even_cycle() {
        let e = edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let (k, c) = min_colouring(&[0, 1, 2, 3], &e);
        assert_eq!(k, 2);
        assert_proper(&c, &e);
    }

    #[test]
    fn test_odd_cycle() {
        let e = edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let (k, c) = min_colouring(&[0, 1, 2, 3, 4], &e);
        assert_eq!(k, 3);
        assert_proper(&c, &e);
    }

    #[test]
    fn test_complete_graph() {
        let mut pairs = Vec::new();
        for u in 0..5 {
            for v in (u + 1)..5 {
                pairs.push((u, v));
            }
        }
        let e = edges(&pairs);
        let (k, c) = min_colouring(&[0, 1, 2, 3, 4], &e);
        assert_eq!(k, 5);
        assert_proper(&c, &e);
    }

    #[test]
    fn test_greedy_order_is_not_optimal_but_result_is() {
        // Crown graph on 8 vertices: greedy in this order would use 4 colours.
        let e = edges(&[
            (1, 4),
            (1, 6),
            (1, 8),
            (3, 2),
            (3, 6),
            (3, 8),
            (5, 2),
            (5, 4),
            (5, 8),
            (7, 2),
            (7, 4),
            (7, 6),
        ]);
        let (k, c) = min_colouring(&[1, 2, 3, 4, 5, 6, 7, 8], &e);
        assert_eq!(k, 2);
        assert_proper(&c, &e);
    }

    #[test]
    fn test_deterministic() {
        let e = edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);
        let first = min_colouring(&[4, 3, 2, 1, 0], &e);
        for _ in 0..5 {
            assert_eq!(min_colouring(&[4, 3, 2, 1, 0], &e), first);
        }
    }

    #[test]
    fn test_duplicate_vertices() {
        let e = edges(&[(0, 1)]);
        let (k, c) = min_colouring(&[0, 1, 0], &e);
        assert_eq!(k, 2);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_colour_classes() {
        let colouring: BTreeMap<u32, usize> =
            [(0, 1), (1, 0), (2, 1), (3, 2)].into_iter().collect();
        let classes = colour_classes_from_colouring(&colouring);
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[0], BTreeSet::from([1]));
        assert_eq!(classes[1], BTreeSet::from([0, 2]));
        assert_eq!(classes[2], BTreeSet::from([3]));
    }
}
