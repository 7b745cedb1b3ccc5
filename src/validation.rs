//! Structural validation of a tournament's game set.
//!
//! Viewing players as vertices and games as edges, a valid tournament graph:
//! - is regular: every player plays the same number of games
//! - has no isolated pairs: any two players who never meet share at least
//!   two common opponents
//!
//! The empty game set and a single game both pass; neither has a degree
//! mismatch nor a pair of non-opponents.
//!
//! # Reference
//! Brouwer & Haemers (2012), "Spectra of Graphs", Ch. 9 (strongly regular graphs)

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Game, Player};

/// Minimum number of shared opponents for two players who never meet.
pub const MIN_COMMON_OPPONENTS: usize = 2;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Players do not all play the same number of games.
    IrregularDegrees,
    /// Two players who never meet share fewer than two opponents.
    MissingCommonOpponents,
    /// No games at all, rejected by planner policy.
    EmptyTournament,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether `games` forms a valid tournament structure.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use u_tournament::models::Game;
/// use u_tournament::validation::games_ok;
///
/// // Every player meets every other player.
/// let k4: BTreeSet<Game> = (0u32..4)
///     .flat_map(|u| ((u + 1)..4).map(move |v| Game::new(u, v).unwrap()))
///     .collect();
/// assert!(games_ok(&k4));
/// ```
pub fn games_ok(games: &BTreeSet<Game>) -> bool {
    check_games(games).is_ok()
}

/// Validates the tournament structure, reporting every violation.
///
/// Checks:
/// 1. All players have the same number of games
/// 2. Every pair of non-opponents has at least two common opponents
///
/// # Returns
/// `Ok(())` if both checks pass, `Err(errors)` with all detected issues.
pub fn check_games(games: &BTreeSet<Game>) -> ValidationResult {
    let opponents = opponent_sets(games);
    let mut errors = Vec::new();

    let degrees: BTreeSet<usize> = opponents.values().map(BTreeSet::len).collect();
    if degrees.len() > 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::IrregularDegrees,
            format!("Players play differing numbers of games: {degrees:?}"),
        ));
    }

    let players: Vec<(&Player, &BTreeSet<&Player>)> =
        opponents.iter().map(|(&p, n)| (p, n)).collect();

    for (i, &(u, nu)) in players.iter().enumerate() {
        for &(v, nv) in &players[i + 1..] {
            if nu.contains(v) {
                continue;
            }
            let common = nu.intersection(nv).count();
            if common < MIN_COMMON_OPPONENTS {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingCommonOpponents,
                    format!(
                        "Players '{u}' and '{v}' never meet and share only {common} opponent(s)"
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Player → set of opponents, over both orientations of every game.
fn opponent_sets(games: &BTreeSet<Game>) -> BTreeMap<&Player, BTreeSet<&Player>> {
    let mut opponents: BTreeMap<&Player, BTreeSet<&Player>> = BTreeMap::new();
    for game in games {
        let (a, b) = game.players();
        opponents.entry(a).or_default().insert(b);
        opponents.entry(b).or_default().insert(a);
    }
    opponents
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn games(pairs: &[(u32, u32)]) -> BTreeSet<Game> {
        pairs.iter().map(|&(u, v)| Game::new(u, v).unwrap()).collect()
    }

    fn complete(n: u32) -> BTreeSet<Game> {
        (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| Game::new(u, v).unwrap()))
            .collect()
    }

    #[test]
    fn test_k33() {
        let k33: BTreeSet<Game> = (0u32..3)
            .flat_map(|u| (3u32..6).map(move |v| Game::new(u, v).unwrap()))
            .collect();
        assert!(games_ok(&k33));
    }

    #[test]
    fn test_k5() {
        assert!(games_ok(&complete(5)));
    }

    #[test]
    fn test_triangles() {
        let g = games(&[
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (2, 5),
            (3, 5),
        ]);
        assert!(games_ok(&g));
    }

    #[test]
    fn test_extra_game_breaks_regularity() {
        let g = games(&[
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (2, 5),
            (3, 5),
            (0, 5),
        ]);
        let errors = check_games(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IrregularDegrees));
    }

    #[test]
    fn test_5cycle() {
        let g = games(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let errors = check_games(&g).unwrap_err();
        // Regular (degree 2) but no non-adjacent pair shares two opponents.
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MissingCommonOpponents));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(games_ok(&BTreeSet::new()));
    }

    #[test]
    fn test_single_game_is_valid() {
        assert!(games_ok(&games(&[(0, 1)])));
    }

    #[test]
    fn test_disjoint_games() {
        // Regular (degree 1) but players from different games share nobody.
        let g = games(&[(0, 1), (2, 3)]);
        assert!(!games_ok(&g));
    }

    #[test]
    fn test_orientation_irrelevant() {
        let forward = games(&[(0, 1), (1, 2), (2, 0)]);
        let backward = games(&[(1, 0), (2, 1), (0, 2)]);
        assert_eq!(forward, backward);
        assert!(games_ok(&backward));
    }

    #[test]
    fn test_multiple_errors() {
        // Path 0-1-2 plus isolated edge 3-4: irregular and several far pairs.
        let g = games(&[(0, 1), (1, 2), (3, 4)]);
        let errors = check_games(&g).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IrregularDegrees));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingCommonOpponents));
    }

    /// Adjacency-matrix check of the tournament rules over players `0..n`.
    fn brute_force_ok(n: usize, adj: &[Vec<bool>]) -> bool {
        let players: Vec<usize> = (0..n).filter(|&u| adj[u].iter().any(|&e| e)).collect();
        let degree = |u: usize| adj[u].iter().filter(|&&e| e).count();
        if let Some(&first) = players.first() {
            if players.iter().any(|&u| degree(u) != degree(first)) {
                return false;
            }
        }
        for &u in &players {
            for &v in &players {
                if u == v || adj[u][v] {
                    continue;
                }
                let common = (0..n).filter(|&w| adj[u][w] && adj[v][w]).count();
                if common < MIN_COMMON_OPPONENTS {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_random_game_sets_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(11);
        let (mut valid, mut invalid) = (0, 0);

        for _ in 0..300 {
            let n = rng.random_range(2..=6usize);
            let mut adj = vec![vec![false; n]; n];
            let mut g = BTreeSet::new();
            for u in 0..n {
                for v in (u + 1)..n {
                    if rng.random_bool(0.8) {
                        adj[u][v] = true;
                        adj[v][u] = true;
                        g.insert(Game::new(u as u32, v as u32).unwrap());
                    }
                }
            }

            let expected = brute_force_ok(n, &adj);
            assert_eq!(games_ok(&g), expected, "mismatch on {g:?}");
            if expected {
                valid += 1;
            } else {
                invalid += 1;
            }
        }

        assert!(valid > 0 && invalid > 0);
    }
}
