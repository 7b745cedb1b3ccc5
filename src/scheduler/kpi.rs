//! Tournament plan metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Rounds | Number of groups in the schedule |
//! | Games | Total games scheduled |
//! | Max/Avg games per round | Round sizes |
//! | Referee load | Games officiated per referee |
//! | Idle players | Players of the tournament sitting out each round |

use std::collections::{BTreeMap, BTreeSet};

use super::TournamentPlan;
use crate::models::{Player, Referee};

/// Plan quality indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of rounds.
    pub round_count: usize,
    /// Number of games.
    pub game_count: usize,
    /// Size of the largest round.
    pub max_games_per_round: usize,
    /// Mean round size (0.0 for an empty schedule).
    pub avg_games_per_round: f64,
    /// Games officiated per referee.
    pub referee_load: BTreeMap<Referee, usize>,
    /// Players not playing, per round in play order.
    pub idle_players_by_round: Vec<usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a plan.
    pub fn calculate(plan: &TournamentPlan) -> Self {
        let schedule = &plan.schedule;
        let round_count = schedule.round_count();
        let game_count = schedule.game_count();

        let max_games_per_round = schedule.rounds().iter().map(|r| r.len()).max().unwrap_or(0);
        let avg_games_per_round = if round_count == 0 {
            0.0
        } else {
            game_count as f64 / round_count as f64
        };

        let mut referee_load: BTreeMap<Referee, usize> = BTreeMap::new();
        for (_, referee) in &plan.assignment {
            *referee_load.entry(referee.clone()).or_insert(0) += 1;
        }

        let players: BTreeSet<&Player> = schedule
            .rounds()
            .iter()
            .flat_map(|r| r.games())
            .flat_map(|g| {
                let (a, b) = g.players();
                [a, b]
            })
            .collect();
        let idle_players_by_round = schedule
            .rounds()
            .iter()
            .map(|round| {
                let playing = round
                    .games()
                    .flat_map(|g| {
                        let (a, b) = g.players();
                        [a, b]
                    })
                    .collect::<BTreeSet<_>>()
                    .len();
                players.len() - playing
            })
            .collect();

        Self {
            round_count,
            game_count,
            max_games_per_round,
            avg_games_per_round,
            referee_load,
            idle_players_by_round,
        }
    }

    /// Largest number of games any single referee officiates.
    pub fn max_referee_load(&self) -> usize {
        self.referee_load.values().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Game, Group, Schedule};

    fn game(a: &str, b: &str) -> Game {
        Game::new(a, b).unwrap()
    }

    fn sample_plan() -> TournamentPlan {
        let assignment = Assignment::new()
            .with_referee(game("A", "B"), "R1")
            .with_referee(game("C", "D"), "R2")
            .with_referee(game("A", "C"), "R3");
        let schedule = Schedule::new(vec![
            Group::from_iter([game("A", "B"), game("C", "D")]),
            Group::from_iter([game("A", "C")]),
        ]);
        TournamentPlan {
            assignment,
            schedule,
        }
    }

    #[test]
    fn test_kpi_calculation() {
        let kpi = ScheduleKpi::calculate(&sample_plan());
        assert_eq!(kpi.round_count, 2);
        assert_eq!(kpi.game_count, 3);
        assert_eq!(kpi.max_games_per_round, 2);
        assert!((kpi.avg_games_per_round - 1.5).abs() < 1e-10);
        assert_eq!(kpi.max_referee_load(), 1);
        assert_eq!(kpi.referee_load.len(), 3);
        // Round 2: B and D sit out.
        assert_eq!(kpi.idle_players_by_round, vec![0, 2]);
    }

    #[test]
    fn test_kpi_empty() {
        let plan = TournamentPlan {
            assignment: Assignment::new(),
            schedule: Schedule::default(),
        };
        let kpi = ScheduleKpi::calculate(&plan);
        assert_eq!(kpi.round_count, 0);
        assert_eq!(kpi.avg_games_per_round, 0.0);
        assert_eq!(kpi.max_referee_load(), 0);
        assert!(kpi.idle_players_by_round.is_empty());
    }
}
