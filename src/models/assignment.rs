//! Referee assignment model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Game, Player, Referee};

/// Game → referee mapping produced by the referee assigner.
///
/// Keys iterate in canonical game order, which gives every later stage a
/// stable vertex ordering. Serialized as a list of `(game, referee)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(Game, Referee)>", into = "Vec<(Game, Referee)>")]
pub struct Assignment {
    referees: BTreeMap<Game, Referee>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns (or reassigns) a referee to a game.
    pub fn with_referee(mut self, game: Game, referee: impl Into<Referee>) -> Self {
        self.insert(game, referee.into());
        self
    }

    pub(crate) fn insert(&mut self, game: Game, referee: Referee) {
        self.referees.insert(game, referee);
    }

    /// The referee officiating `game`.
    pub fn referee_for(&self, game: &Game) -> Option<&Referee> {
        self.referees.get(game)
    }

    /// All assigned games in canonical order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.referees.keys()
    }

    /// `(game, referee)` pairs in canonical game order.
    pub fn iter(&self) -> impl Iterator<Item = (&Game, &Referee)> {
        self.referees.iter()
    }

    /// Games officiated by `referee`.
    pub fn games_refereed_by<'a>(
        &'a self,
        referee: &'a Referee,
    ) -> impl Iterator<Item = &'a Game> {
        self.referees
            .iter()
            .filter(move |(_, r)| *r == referee)
            .map(|(g, _)| g)
    }

    /// Games in which `player` plays.
    pub fn games_played_by<'a>(
        &'a self,
        player: &'a Player,
    ) -> impl Iterator<Item = &'a Game> {
        self.referees.keys().filter(move |g| g.involves(player))
    }

    /// Whether some game is officiated by one of its own players.
    pub fn has_self_refereeing(&self) -> bool {
        self.referees.iter().any(|(g, r)| g.involves(r))
    }

    /// Number of assigned games.
    pub fn len(&self) -> usize {
        self.referees.len()
    }

    /// Whether no game is assigned.
    pub fn is_empty(&self) -> bool {
        self.referees.is_empty()
    }
}

impl FromIterator<(Game, Referee)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Game, Referee)>>(iter: T) -> Self {
        Self {
            referees: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(Game, Referee)>> for Assignment {
    fn from(pairs: Vec<(Game, Referee)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Assignment> for Vec<(Game, Referee)> {
    fn from(assignment: Assignment) -> Self {
        assignment.referees.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Game, &'a Referee);
    type IntoIter = std::collections::btree_map::Iter<'a, Game, Referee>;

    fn into_iter(self) -> Self::IntoIter {
        self.referees.iter()
    }
}
