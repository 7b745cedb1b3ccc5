//! Tournament domain models.
//!
//! Immutable value types flowing through the pipeline. Every collection is
//! ordered (`BTreeSet`/`BTreeMap`) so repeated runs on identical input visit
//! games in the same order.
//!
//! # Pipeline Mapping
//!
//! | Stage | Consumes | Produces |
//! |-------|----------|----------|
//! | Validation | `Game` set | pass / `ValidationError`s |
//! | Referee assignment | `Game` set, `ConflictTable` | `Assignment` |
//! | Grouping | `Assignment` | `Group`s |
//! | Scheduling | `Assignment`, `Group`s | `Schedule` |

mod assignment;
mod conflict;
mod game;
mod schedule;

pub use assignment::Assignment;
pub use conflict::ConflictTable;
pub use game::{Game, PersonId, Player, Referee};
pub use schedule::{Group, Schedule};
