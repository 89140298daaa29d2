//! Result simulation for demo and preview brackets.

use crate::models::{GameMatch, MatchStatus};
use rand::Rng;

/// Chance that the better-seeded player wins a simulated match.
pub const FAVORITE_WIN_CHANCE: f64 = 0.7;

/// Simulate every ready round-1 match: the stronger seed (lower number) usually wins.
/// On equal seeds (including two unseeded players) player 2 always wins.
///
/// Returns new copies; winner scores 2, loser scores 1, status becomes complete.
/// Matches that are not ready, or past round 1, are copied unchanged.
pub fn simulate_matches<R: Rng + ?Sized>(matches: &[GameMatch], rng: &mut R) -> Vec<GameMatch> {
    matches
        .iter()
        .map(|m| match (&m.player_1, &m.player_2) {
            (Some(p1), Some(p2)) if m.round == 1 => {
                let (s1, s2) = (p1.seed_or_default(), p2.seed_or_default());
                let favorite_wins = rng.gen::<f64>() < FAVORITE_WIN_CHANCE;
                let p1_wins = if favorite_wins { s1 < s2 } else { s1 > s2 };

                let (score_1, score_2) = if p1_wins { (2, 1) } else { (1, 2) };
                let player_1 = p1.with_score(score_1);
                let player_2 = p2.with_score(score_2);
                let winner = if p1_wins { player_1.clone() } else { player_2.clone() };

                GameMatch {
                    player_1: Some(player_1),
                    player_2: Some(player_2),
                    winner: Some(winner),
                    status: MatchStatus::Complete,
                    ..m.clone()
                }
            }
            _ => m.clone(),
        })
        .collect()
}
