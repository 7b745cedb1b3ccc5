//! Error taxonomy for the tournament pipeline.
//!
//! Three variants are ordinary domain outcomes that a caller is expected to
//! branch on (`InvalidTournament`, `Unassignable`, `Unschedulable`). The rest
//! signal malformed input or I/O trouble while loading a conflict table.

use crate::models::{Game, PersonId};
use crate::validation::ValidationError;

/// Errors produced by the tournament engine.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    /// The game set failed structural validation.
    #[error("invalid tournament: {}", summarize(.0))]
    InvalidTournament(Vec<ValidationError>),

    /// No conflict-free referee assignment covers every game.
    #[error("no referee assignment covers all games ({matched} of {games} matched)")]
    Unassignable { games: usize, matched: usize },

    /// Referee/player overlaps form a circular precedence between rounds.
    #[error("round dependencies are cyclic; no schedule exists")]
    Unschedulable,

    /// A game was constructed with the same player on both sides.
    #[error("player {0} cannot play against themselves")]
    SelfPairing(PersonId),

    /// The scheduler was handed an assigned game that no group contains.
    #[error("game {0} is assigned a referee but belongs to no group")]
    UngroupedGame(Game),

    /// The conflict table source is malformed.
    #[error("malformed conflict table: {0}")]
    ConflictTable(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TournamentError {
    /// Whether this is an expected negative outcome of the pipeline rather
    /// than a malformed input or I/O failure.
    pub fn is_domain_outcome(&self) -> bool {
        matches!(
            self,
            Self::InvalidTournament(_) | Self::Unassignable { .. } | Self::Unschedulable
        )
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
