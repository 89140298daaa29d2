//! Player data structure.

use serde::{Deserialize, Serialize};

/// Identifier for a player, supplied by the caller (e.g. "p1").
pub type PlayerId = String;

/// A competitor entering a bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Ranking used for initial pairing; 1 is the strongest. Missing seeds sort as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Filled in once a match involving this player is played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Player {
    /// Create an unseeded player.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seed: None,
            score: None,
        }
    }

    /// Builder-style seed assignment.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed used for ordering (0 when unseeded).
    pub fn seed_or_default(&self) -> u32 {
        self.seed.unwrap_or(0)
    }

    /// Copy of this player carrying the given score.
    pub fn with_score(&self, score: u32) -> Self {
        Self {
            score: Some(score),
            ..self.clone()
        }
    }
}
