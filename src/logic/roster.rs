//! Player rosters: sample players for demos and CSV import.

use crate::models::Player;
use serde::Deserialize;
use std::io::Read;

const SAMPLE_NAMES: [&str; 16] = [
    "Mario",
    "Luigi",
    "Peach",
    "Bowser",
    "Yoshi",
    "Koopa",
    "Toad",
    "DK",
    "Wario",
    "Waluigi",
    "Rosalina",
    "Bowser Jr.",
    "Shy Guy",
    "Lakitu",
    "Piranha Plant",
    "King Boo",
];

/// Errors from importing a roster.
#[derive(Debug)]
pub enum ImportError {
    /// Malformed CSV (bad header, unparsable seed, ...).
    Csv(csv::Error),
    /// A row with an empty name.
    MissingName { row: usize },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Invalid roster CSV: {}", e),
            ImportError::MissingName { row } => write!(f, "Roster row {} has no name", row),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Csv(e) => Some(e),
            ImportError::MissingName { .. } => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

/// Create `count` sample players: ids p1.., seeds 1.., names from a fixed roster.
pub fn create_sample_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            let name = SAMPLE_NAMES
                .get(i)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Player {}", i + 1));
            Player::new(format!("p{}", i + 1), name).with_seed(i as u32 + 1)
        })
        .collect()
}

#[derive(Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    seed: Option<u32>,
}

/// Parse a roster CSV with header `id,name,seed`. `id` and `seed` may be blank;
/// a blank id becomes `p{row}` (1-based).
pub fn parse_players_csv<R: Read>(reader: R) -> Result<Vec<Player>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        let n = i + 1;
        if row.name.is_empty() {
            return Err(ImportError::MissingName { row: n });
        }
        let id = row
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("p{}", n));
        players.push(Player {
            seed: row.seed,
            ..Player::new(id, row.name)
        });
    }
    Ok(players)
}
