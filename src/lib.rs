//! Tournament scheduling engine.
//!
//! Given a set of two-player games and a table of referee conflicts, the
//! engine validates the tournament structure, assigns a conflict-free
//! referee to every game, splits the games into the fewest simultaneous
//! rounds, and orders those rounds so nobody referees before playing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Game`, `PersonId`, `ConflictTable`,
//!   `Assignment`, `Group`, `Schedule`
//! - **`validation`**: Structural checks (regular degree, common opponents)
//! - **`referees`**: Referee assignment by bipartite matching
//! - **`grouping`**: Conflict-free rounds by minimum colouring
//! - **`scheduler`**: Round ordering, `TournamentPlanner` pipeline, KPIs
//! - **`graph`**, **`digraph`**: Tournament-agnostic graph algorithms
//!
//! # Architecture
//!
//! Every stage is a pure function of its inputs. Collections are ordered, so
//! identical input always yields identical output.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms"
//! - Kuhn (1955), "The Hungarian method for the assignment problem"

pub mod digraph;
pub mod error;
pub mod graph;
pub mod grouping;
pub mod models;
pub mod referees;
pub mod scheduler;
pub mod validation;

pub use error::TournamentError;
