//! End-to-end tournament planning.
//!
//! Runs the four stages in sequence, stopping at the first failure:
//!
//! 1. Structural validation of the game set
//! 2. Referee assignment
//! 3. Grouping into conflict-free rounds
//! 4. Ordering rounds by referee availability

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::game_schedule;
use crate::error::TournamentError;
use crate::grouping::game_groups;
use crate::models::{Assignment, ConflictTable, Game, Referee, Schedule};
use crate::referees::assign_referees;
use crate::validation::{check_games, ValidationError, ValidationErrorKind};

/// How the planner treats a tournament with no games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTournamentPolicy {
    /// Plan an empty schedule.
    #[default]
    Accept,
    /// Fail with `InvalidTournament`.
    Reject,
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Run structural validation before assigning referees.
    pub validate_structure: bool,
    /// Treatment of an empty game set.
    pub empty_tournament: EmptyTournamentPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            validate_structure: true,
            empty_tournament: EmptyTournamentPolicy::Accept,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables structural validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_structure = enabled;
        self
    }

    /// Sets the empty-tournament policy.
    pub fn with_empty_tournament(mut self, policy: EmptyTournamentPolicy) -> Self {
        self.empty_tournament = policy;
        self
    }
}

/// A referee assignment together with its round order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentPlan {
    /// Referee for every game.
    pub assignment: Assignment,
    /// Rounds in play order.
    pub schedule: Schedule,
}

impl TournamentPlan {
    /// Round and referee for a game.
    pub fn slot_of(&self, game: &Game) -> Option<(usize, &Referee)> {
        Some((
            self.schedule.round_of(game)?,
            self.assignment.referee_for(game)?,
        ))
    }
}

/// Runs validation, assignment, grouping and ordering as one pipeline.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::models::{ConflictTable, Game};
/// use u_tournament::scheduler::TournamentPlanner;
///
/// // Triangle: everyone plays everyone else once.
/// let games: BTreeSet<Game> = [("Ann", "Ben"), ("Ben", "Cat"), ("Ann", "Cat")]
///     .into_iter()
///     .map(|(a, b)| Game::new(a, b).unwrap())
///     .collect();
/// let conflicts = ConflictTable::new()
///     .with_referee("Rene", ["Ann"])
///     .with_referee("Dave", Vec::<&str>::new())
///     .with_referee("Eve", Vec::<&str>::new());
///
/// let plan = TournamentPlanner::new().plan(&games, &conflicts).unwrap();
/// assert_eq!(plan.assignment.len(), 3);
/// assert_eq!(plan.schedule.game_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TournamentPlanner {
    config: PlannerConfig,
}

impl TournamentPlanner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with the given configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a tournament.
    ///
    /// # Errors
    /// - `InvalidTournament` if validation fails or an empty game set is rejected
    /// - `Unassignable` if no conflict-free referee assignment covers every game
    /// - `Unschedulable` if the rounds cannot be ordered
    pub fn plan(
        &self,
        games: &BTreeSet<Game>,
        conflicts: &ConflictTable,
    ) -> Result<TournamentPlan, TournamentError> {
        if games.is_empty() && self.config.empty_tournament == EmptyTournamentPolicy::Reject {
            return Err(TournamentError::InvalidTournament(vec![ValidationError::new(
                ValidationErrorKind::EmptyTournament,
                "Tournament has no games",
            )]));
        }

        if self.config.validate_structure {
            check_games(games).map_err(|errors| {
                tracing::warn!(errors = errors.len(), "tournament structure rejected");
                TournamentError::InvalidTournament(errors)
            })?;
        }

        let assignment = assign_referees(games, conflicts)?;
        let groups = game_groups(&assignment);
        let schedule = game_schedule(&assignment, &groups)?;

        tracing::info!(
            games = games.len(),
            rounds = schedule.round_count(),
            "tournament planned"
        );

        Ok(TournamentPlan {
            assignment,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(a: &str, b: &str) -> Game {
        Game::new(a, b).unwrap()
    }

    fn k4() -> BTreeSet<Game> {
        let p = ["Ann", "Ben", "Cat", "Dan"];
        let mut games = BTreeSet::new();
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                games.insert(game(p[i], p[j]));
            }
        }
        games
    }

    fn outside_referees(n: usize) -> ConflictTable {
        (0..n).fold(ConflictTable::new(), |t, i| {
            t.with_referee(format!("Ref{i}"), Vec::<&str>::new())
        })
    }

    #[test]
    fn test_plan_complete_graph() {
        let games = k4();
        let plan = TournamentPlanner::new()
            .plan(&games, &outside_referees(6))
            .unwrap();

        assert_eq!(plan.assignment.len(), 6);
        assert_eq!(plan.schedule.game_count(), 6);
        // K4 splits into three rounds of two disjoint games.
        assert_eq!(plan.schedule.round_count(), 3);
        for g in &games {
            assert!(plan.slot_of(g).is_some());
        }
    }

    #[test]
    fn test_invalid_structure_short_circuits() {
        // 5-cycle is rejected even though there are no referees at all.
        let games: BTreeSet<Game> = [("0", "1"), ("1", "2"), ("2", "3"), ("3", "4"), ("4", "0")]
            .iter()
            .map(|&(a, b)| game(a, b))
            .collect();
        let err = TournamentPlanner::new()
            .plan(&games, &ConflictTable::new())
            .unwrap_err();
        assert!(matches!(err, TournamentError::InvalidTournament(_)));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let games = BTreeSet::from([game("A", "B"), game("C", "D")]);
        let config = PlannerConfig::new().with_validation(false);
        let plan = TournamentPlanner::with_config(config)
            .plan(&games, &outside_referees(2))
            .unwrap();
        assert_eq!(plan.schedule.round_count(), 1);

        let err = TournamentPlanner::new()
            .plan(&games, &outside_referees(2))
            .unwrap_err();
        assert!(err.is_domain_outcome());
    }

    #[test]
    fn test_unassignable() {
        let err = TournamentPlanner::new()
            .plan(&k4(), &outside_referees(5))
            .unwrap_err();
        assert!(matches!(
            err,
            TournamentError::Unassignable { games: 6, matched: 5 }
        ));
    }

    #[test]
    fn test_players_as_referees() {
        // The only referees are the players themselves, so each game is
        // officiated by the one player not in it.
        let games = BTreeSet::from([game("A", "B"), game("B", "C"), game("A", "C")]);
        let conflicts = ConflictTable::new()
            .with_referee("A", Vec::<&str>::new())
            .with_referee("B", Vec::<&str>::new())
            .with_referee("C", Vec::<&str>::new());

        let result = TournamentPlanner::new().plan(&games, &conflicts);
        // Every referee both plays and officiates across the three rounds,
        // which forms a cycle of dependencies.
        assert!(matches!(result, Err(TournamentError::Unschedulable)));
    }

    #[test]
    fn test_empty_policy() {
        let empty = BTreeSet::new();
        let plan = TournamentPlanner::new()
            .plan(&empty, &ConflictTable::new())
            .unwrap();
        assert!(plan.schedule.is_empty());

        let strict = PlannerConfig::new().with_empty_tournament(EmptyTournamentPolicy::Reject);
        let err = TournamentPlanner::with_config(strict)
            .plan(&empty, &ConflictTable::new())
            .unwrap_err();
        match err {
            TournamentError::InvalidTournament(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::EmptyTournament);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_from_json() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"empty_tournament": "reject"}"#).unwrap();
        assert!(config.validate_structure);
        assert_eq!(config.empty_tournament, EmptyTournamentPolicy::Reject);

        let json = serde_json::to_string(&PlannerConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"validate_structure":true,"empty_tournament":"accept"}"#
        );
    }
}
