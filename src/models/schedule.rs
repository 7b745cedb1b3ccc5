//! Rounds and schedules.
//!
//! A group is a round of games that can be played simultaneously. A
//! schedule is the ordered sequence of rounds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Game;

/// Games that can be played at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Group {
    games: BTreeSet<Game>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a game to the group.
    pub fn with_game(mut self, game: Game) -> Self {
        self.games.insert(game);
        self
    }

    /// Whether the group contains `game`.
    pub fn contains(&self, game: &Game) -> bool {
        self.games.contains(game)
    }

    /// Games in canonical order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the group has no games.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl From<BTreeSet<Game>> for Group {
    fn from(games: BTreeSet<Game>) -> Self {
        Self { games }
    }
}

impl FromIterator<Game> for Group {
    fn from_iter<T: IntoIterator<Item = Game>>(iter: T) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<Group>,
}

impl Schedule {
    /// Creates a schedule from rounds already in play order.
    pub fn new(rounds: Vec<Group>) -> Self {
        Self { rounds }
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[Group] {
        &self.rounds
    }

    /// Consumes the schedule, returning its rounds.
    pub fn into_rounds(self) -> Vec<Group> {
        self.rounds
    }

    /// Zero-based round in which `game` is played.
    pub fn round_of(&self, game: &Game) -> Option<usize> {
        self.rounds.iter().position(|r| r.contains(game))
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total number of games across all rounds.
    pub fn game_count(&self) -> usize {
        self.rounds.iter().map(Group::len).sum()
    }

    /// Whether the schedule has no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
