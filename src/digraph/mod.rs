//! Directed and bipartite graph utilities.
//!
//! - [`max_matching`]: maximum matching in a bipartite graph
//! - [`top_ordering`]: topological order of a directed graph, if acyclic
//!
//! Both are deterministic: vertices are visited in `Ord` order, so the same
//! input always produces the same output.
//!
//! # References
//! - Kuhn (1955), "The Hungarian method for the assignment problem"
//! - Kahn (1962), "Topological sorting of large networks"

mod matching;
mod ordering;

pub use matching::max_matching;
pub use ordering::top_ordering;
