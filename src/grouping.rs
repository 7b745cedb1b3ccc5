//! Partitioning assigned games into rounds.
//!
//! # Algorithm
//!
//! 1. Build a conflict graph whose vertices are the assigned games.
//! 2. Two games conflict if they share a player, share a referee, or the
//!    referee of one plays in the other.
//! 3. A minimum colouring of the conflict graph gives the fewest rounds;
//!    each colour class is one round.
//!
//! Vertices are fed to the colouring in canonical game order, so the same
//! assignment always yields the same rounds.

use std::collections::BTreeSet;

use crate::graph::{colour_classes_from_colouring, min_colouring};
use crate::models::{Assignment, Game, Group, Referee};

/// Whether two refereed games cannot be played at the same time.
pub fn games_conflict(a: (&Game, &Referee), b: (&Game, &Referee)) -> bool {
    let ((ga, ra), (gb, rb)) = (a, b);
    ga != gb && (ga.shares_player(gb) || ra == rb || gb.involves(ra) || ga.involves(rb))
}

/// Partitions the assigned games into the fewest conflict-free groups.
///
/// # Example
/// ```
/// use u_tournament::grouping::game_groups;
/// use u_tournament::models::{Assignment, Game};
///
/// let assignment = Assignment::new()
///     .with_referee(Game::new("Alice", "Bob").unwrap(), "Rene")
///     .with_referee(Game::new("Elaine", "Charlie").unwrap(), "Dave");
/// assert_eq!(game_groups(&assignment).len(), 1);
/// ```
pub fn game_groups(assignment: &Assignment) -> Vec<Group> {
    let games: Vec<Game> = assignment.games().cloned().collect();

    let mut edges: BTreeSet<(Game, Game)> = BTreeSet::new();
    for (i, a) in assignment.iter().enumerate() {
        for b in assignment.iter().skip(i + 1) {
            if games_conflict(a, b) {
                edges.insert((a.0.clone(), b.0.clone()));
            }
        }
    }

    let (k, colouring) = min_colouring(&games, &edges);
    tracing::debug!(
        games = games.len(),
        conflicts = edges.len(),
        groups = k,
        "coloured game conflict graph"
    );

    colour_classes_from_colouring(&colouring)
        .into_iter()
        .map(Group::from)
        .collect()
}
