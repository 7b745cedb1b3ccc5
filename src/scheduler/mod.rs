//! Round ordering, the planning pipeline, and plan metrics.
//!
//! # Ordering
//!
//! `game_schedule` orders conflict-free groups so that anyone who both plays
//! and referees plays first. Groups whose dependencies form a cycle cannot
//! be scheduled.
//!
//! # Pipeline
//!
//! `TournamentPlanner` chains validation, referee assignment, grouping and
//! ordering, configured by `PlannerConfig`.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a plan: rounds, round sizes, referee load and
//! idle players.

mod kpi;
mod order;
mod planner;

pub use kpi::ScheduleKpi;
pub use order::{game_schedule, round_dependencies};
pub use planner::{EmptyTournamentPolicy, PlannerConfig, TournamentPlan, TournamentPlanner};
