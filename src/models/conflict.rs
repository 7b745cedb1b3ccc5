//! Referee conflict table.
//!
//! Maps each available referee to the players they may not officiate for.
//! The keys of the table are also the pool of referees the assigner draws from.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use super::{Player, Referee};
use crate::error::TournamentError;

/// Header cell marking the first row of a conflict CSV.
const HEADER_CELL: &str = "Referee";

/// Referee → players that referee conflicts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictTable {
    conflicts: BTreeMap<Referee, BTreeSet<Player>>,
}

impl ConflictTable {
    /// Creates an empty table (no referees).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a referee with their conflicts, merging with any existing entry.
    pub fn with_referee<I, P>(mut self, referee: impl Into<Referee>, conflicts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        self.insert(referee.into(), conflicts.into_iter().map(Into::into));
        self
    }

    fn insert(&mut self, referee: Referee, conflicts: impl Iterator<Item = Player>) {
        self.conflicts.entry(referee).or_default().extend(conflicts);
    }

    /// Parses a conflict table from CSV.
    ///
    /// Each row is `referee, conflict, conflict, ...`. Cells are trimmed,
    /// empty cells are ignored, rows may differ in length, and a row whose
    /// first cell is `Referee` is treated as a header.
    ///
    /// # Example
    /// ```
    /// use u_tournament::models::ConflictTable;
    ///
    /// let csv = "Referee,Conflict 1,Conflict 2\nRene,Alice,\nDavid,,\n";
    /// let table = ConflictTable::from_csv_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(table.referee_count(), 2);
    /// assert!(table.conflicts_with(&"Rene".into(), &"Alice".into()));
    /// ```
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TournamentError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            let mut cells = record.iter().map(str::trim);

            let referee = match cells.next() {
                Some(HEADER_CELL) => continue,
                Some(r) if !r.is_empty() => r,
                _ => {
                    // A fully blank line carries no information.
                    if record.iter().all(|c| c.trim().is_empty()) {
                        continue;
                    }
                    return Err(TournamentError::ConflictTable(format!(
                        "row {} has conflicts but no referee",
                        line + 1
                    )));
                }
            };

            table.insert(
                referee.into(),
                cells.filter(|c| !c.is_empty()).map(Player::from),
            );
        }

        tracing::debug!(referees = table.referee_count(), "loaded conflict table");
        Ok(table)
    }

    /// Reads a conflict table from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// All referees, in identity order.
    pub fn referees(&self) -> impl Iterator<Item = &Referee> {
        self.conflicts.keys()
    }

    /// Conflicts registered for a referee.
    pub fn conflicts_of(&self, referee: &Referee) -> Option<&BTreeSet<Player>> {
        self.conflicts.get(referee)
    }

    /// Whether `referee` may not officiate games involving `player`.
    pub fn conflicts_with(&self, referee: &Referee, player: &Player) -> bool {
        self.conflicts
            .get(referee)
            .is_some_and(|c| c.contains(player))
    }

    /// Number of referees.
    pub fn referee_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether there are no referees at all.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }
}
