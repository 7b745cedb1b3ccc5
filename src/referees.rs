//! Referee assignment.
//!
//! # Algorithm
//!
//! 1. Games form one side of a bipartite graph, referees (the keys of the
//!    conflict table) the other.
//! 2. A game–referee edge exists when the referee conflicts with neither
//!    player and is not a player in the game.
//! 3. A maximum matching is computed; the assignment succeeds only if it
//!    covers every game.
//!
//! Each referee officiates at most one game, so a tournament needs at least
//! as many eligible referees as games.
//!
//! # Reference
//! Kuhn (1955), "The Hungarian method for the assignment problem"

use std::collections::BTreeSet;

use crate::digraph::max_matching;
use crate::error::TournamentError;
use crate::models::{Assignment, ConflictTable, Game, Referee};

/// Whether `referee` may officiate `game`.
pub fn can_officiate(game: &Game, referee: &Referee, conflicts: &ConflictTable) -> bool {
    let (a, b) = game.players();
    !game.involves(referee)
        && !conflicts.conflicts_with(referee, a)
        && !conflicts.conflicts_with(referee, b)
}

/// Assigns a distinct, conflict-free referee to every game.
///
/// # Errors
/// `Unassignable` if no matching covers all games. No partial assignment is
/// returned.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::models::{ConflictTable, Game};
/// use u_tournament::referees::assign_referees;
///
/// let games = BTreeSet::from([Game::new("Alice", "Bob").unwrap()]);
/// let conflicts = ConflictTable::new()
///     .with_referee("Rene", ["Alice"])
///     .with_referee("David", Vec::<&str>::new());
///
/// let assignment = assign_referees(&games, &conflicts).unwrap();
/// let referee = assignment.referee_for(&Game::new("Bob", "Alice").unwrap());
/// assert_eq!(referee.unwrap().as_str(), "David");
/// ```
pub fn assign_referees(
    games: &BTreeSet<Game>,
    conflicts: &ConflictTable,
) -> Result<Assignment, TournamentError> {
    let referees: BTreeSet<Referee> = conflicts.referees().cloned().collect();

    let edges: BTreeSet<(Game, Referee)> = games
        .iter()
        .flat_map(|g| {
            referees
                .iter()
                .filter(move |r| can_officiate(g, r, conflicts))
                .map(move |r| (g.clone(), r.clone()))
        })
        .collect();

    tracing::debug!(
        games = games.len(),
        referees = referees.len(),
        candidates = edges.len(),
        "built referee candidate graph"
    );

    let matching = max_matching(games, &referees, &edges);
    if matching.len() != games.len() {
        tracing::warn!(
            games = games.len(),
            matched = matching.len(),
            "referee assignment incomplete"
        );
        return Err(TournamentError::Unassignable {
            games: games.len(),
            matched: matching.len(),
        });
    }

    let assignment: Assignment = matching.into_iter().collect();
    if assignment.has_self_refereeing() {
        tracing::warn!("matching produced a self-refereed game");
        return Err(TournamentError::Unassignable {
            games: games.len(),
            matched: assignment.len(),
        });
    }

    Ok(assignment)
}
