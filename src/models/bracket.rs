//! Bracket, Round, and BracketFormat.

use crate::models::game::{BracketSide, GameMatch};
use serde::{Deserialize, Serialize};

/// Errors that can occur while building a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Player count is not a power of two (or is below 2).
    InvalidBracketSize { players: usize },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidBracketSize { players } => write!(
                f,
                "Number of players must be a power of 2 (at least 2), got {}",
                players
            ),
        }
    }
}

impl std::error::Error for BracketError {}

/// Round descriptor for rendering column headers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based.
    pub number: u32,
    pub title: String,
}

impl Round {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}

/// Elimination style.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketFormat {
    #[default]
    SingleElimination,
    DoubleElimination,
}

/// Generated bracket: every match in order (round 1 first) plus the round titles.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub matches: Vec<GameMatch>,
    pub rounds: Vec<Round>,
}

impl Bracket {
    /// Matches of one side in the given round, in generation order.
    pub fn round_matches(&self, round: u32, side: BracketSide) -> Vec<&GameMatch> {
        self.matches
            .iter()
            .filter(|m| m.round == round && m.side == side)
            .collect()
    }

    /// Matches of one side, in generation order.
    pub fn side_matches(&self, side: BracketSide) -> Vec<&GameMatch> {
        self.matches.iter().filter(|m| m.side == side).collect()
    }

    /// Look up a match by its display identifier.
    pub fn find(&self, identifier: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.identifier == identifier)
    }

    /// Title of a round, if present.
    pub fn round_title(&self, number: u32) -> Option<&str> {
        self.rounds
            .iter()
            .find(|r| r.number == number)
            .map(|r| r.title.as_str())
    }
}
