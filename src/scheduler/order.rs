//! Ordering groups into a playable schedule.
//!
//! # Precedence Policy
//!
//! Play before referee: when a person officiates game `ga` and plays in
//! game `gb`, the round holding `gb` comes before the round holding `ga`.
//! Dependencies inside a single round are ignored.
//!
//! # Algorithm
//! 1. Index each group by its position in the input.
//! 2. Collect a dependency edge per (refereed game, played game) pair.
//! 3. Topologically sort the group indices; a cycle means no schedule.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, BTreeSet};

use crate::digraph::top_ordering;
use crate::error::TournamentError;
use crate::models::{Assignment, Game, Group, Schedule};

/// Round dependencies implied by referees who also play.
///
/// Each edge `(before, after)` names group indices: `before` must be played
/// before `after`. Self-dependencies are dropped.
///
/// # Errors
/// `UngroupedGame` if an assigned game belongs to no group.
pub fn round_dependencies(
    assignment: &Assignment,
    groups: &[Group],
) -> Result<BTreeSet<(usize, usize)>, TournamentError> {
    let group_of: BTreeMap<&Game, usize> = groups
        .iter()
        .enumerate()
        .flat_map(|(i, group)| group.games().map(move |g| (g, i)))
        .collect();
    let index_of = |game: &Game| {
        group_of
            .get(game)
            .copied()
            .ok_or_else(|| TournamentError::UngroupedGame(game.clone()))
    };

    for game in assignment.games() {
        index_of(game)?;
    }

    let mut edges = BTreeSet::new();
    for (refereed, referee) in assignment {
        for played in assignment.games_played_by(referee) {
            let before = index_of(played)?;
            let after = index_of(refereed)?;
            if before != after {
                edges.insert((before, after));
            }
        }
    }

    Ok(edges)
}

/// Orders `groups` so that every person plays before they referee.
///
/// # Errors
/// - `Unschedulable` if the dependencies between groups are cyclic.
/// - `UngroupedGame` if an assigned game is in no group.
///
/// # Example
/// ```
/// use u_tournament::models::{Assignment, Game, Group};
/// use u_tournament::scheduler::game_schedule;
///
/// let ab = Game::new("Alice", "Bob").unwrap();
/// let cb = Game::new("Charlie", "Bob").unwrap();
/// let assignment = Assignment::new()
///     .with_referee(ab.clone(), "Charlie")
///     .with_referee(cb.clone(), "Rene");
/// let groups = vec![Group::from_iter([ab.clone()]), Group::from_iter([cb.clone()])];
///
/// let schedule = game_schedule(&assignment, &groups).unwrap();
/// assert_eq!(schedule.round_of(&cb), Some(0));
/// assert_eq!(schedule.round_of(&ab), Some(1));
/// ```
pub fn game_schedule(
    assignment: &Assignment,
    groups: &[Group],
) -> Result<Schedule, TournamentError> {
    let edges = round_dependencies(assignment, groups)?;
    let vertices: BTreeSet<usize> = (0..groups.len()).collect();
    tracing::debug!(
        groups = groups.len(),
        dependencies = edges.len(),
        "ordering groups"
    );

    let order = top_ordering(&vertices, &edges).ok_or_else(|| {
        tracing::warn!(dependencies = edges.len(), "group dependencies are cyclic");
        TournamentError::Unschedulable
    })?;

    Ok(Schedule::new(
        order.into_iter().map(|i| groups[i].clone()).collect(),
    ))
}
