//! Participants and games.
//!
//! Players and referees share one identifier space so that the engine can
//! detect a referee who would officiate their own game.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TournamentError;

/// Opaque identity of a person taking part in a tournament.
///
/// Integer identities are stored in their decimal rendering, so ordering is
/// lexicographic on the text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

/// A person who plays games.
pub type Player = PersonId;

/// A person who officiates games.
pub type Referee = PersonId;

impl PersonId {
    /// Creates an identity from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

macro_rules! person_id_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for PersonId {
            fn from(id: $t) -> Self {
                Self(id.to_string())
            }
        })*
    };
}

person_id_from_int!(u8, u16, u32, u64, usize, i32, i64);

/// An unordered pairing of two distinct players.
///
/// Stored canonically with the smaller identity first, so `(p, o)` and
/// `(o, p)` compare and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(PersonId, PersonId)", into = "(PersonId, PersonId)")]
pub struct Game {
    low: Player,
    high: Player,
}

impl Game {
    /// Creates a game between two players.
    ///
    /// # Errors
    /// `SelfPairing` if both sides are the same player.
    pub fn new(a: impl Into<Player>, b: impl Into<Player>) -> Result<Self, TournamentError> {
        let (a, b) = (a.into(), b.into());
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(TournamentError::SelfPairing(a)),
        }
    }

    /// Both players, smaller identity first.
    pub fn players(&self) -> (&Player, &Player) {
        (&self.low, &self.high)
    }

    /// Whether `person` plays in this game.
    pub fn involves(&self, person: &PersonId) -> bool {
        self.low == *person || self.high == *person
    }

    /// The other side of the game, if `player` is in it.
    pub fn opponent_of(&self, player: &Player) -> Option<&Player> {
        if self.low == *player {
            Some(&self.high)
        } else if self.high == *player {
            Some(&self.low)
        } else {
            None
        }
    }

    /// Whether the two games have a player in common.
    pub fn shares_player(&self, other: &Game) -> bool {
        other.involves(&self.low) || other.involves(&self.high)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.low, self.high)
    }
}

impl TryFrom<(PersonId, PersonId)> for Game {
    type Error = TournamentError;

    fn try_from((a, b): (PersonId, PersonId)) -> Result<Self, Self::Error> {
        Game::new(a, b)
    }
}

impl From<Game> for (PersonId, PersonId) {
    fn from(game: Game) -> Self {
        (game.low, game.high)
    }
}
