//! Match (game), MatchStatus, and BracketSide.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Sequential numeric id of a match; shared counter across both bracket sides.
pub type MatchId = u32;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Open,
    Complete,
}

/// Which ladder of the bracket a match belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketSide {
    #[default]
    Winners,
    Losers,
}

impl BracketSide {
    /// Identifier prefix used in double elimination ("W" / "L").
    pub fn prefix(self) -> &'static str {
        match self {
            BracketSide::Winners => "W",
            BracketSide::Losers => "L",
        }
    }
}

/// A single match in a bracket: two slots, filled either at generation (round 1)
/// or later when the feeding matches resolve.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Display key; equals `id` in single elimination, prefixed in double elimination.
    pub identifier: String,
    pub side: BracketSide,
    pub player_1: Option<Player>,
    pub player_2: Option<Player>,
    /// None if not yet played.
    pub winner: Option<Player>,
    pub status: MatchStatus,
    /// 1-based.
    pub round: u32,
    /// 0-based rendering order within the round.
    pub position: u32,
}

impl GameMatch {
    /// Round-1 match with both slots filled.
    pub fn seeded(id: MatchId, player_1: Player, player_2: Player, position: u32) -> Self {
        Self {
            player_1: Some(player_1),
            player_2: Some(player_2),
            ..Self::placeholder(id, 1, position, BracketSide::Winners)
        }
    }

    /// Match waiting on earlier results; both slots empty.
    pub fn placeholder(id: MatchId, round: u32, position: u32, side: BracketSide) -> Self {
        Self {
            id,
            identifier: id.to_string(),
            side,
            player_1: None,
            player_2: None,
            winner: None,
            status: MatchStatus::Pending,
            round,
            position,
        }
    }

    /// Re-tag the identifier with the side prefix (e.g. "W3", "L9").
    pub fn tag_with_side(&mut self) {
        self.identifier = format!("{}{}", self.side.prefix(), self.id);
    }

    /// Both player slots are populated.
    pub fn is_ready(&self) -> bool {
        self.player_1.is_some() && self.player_2.is_some()
    }
}
