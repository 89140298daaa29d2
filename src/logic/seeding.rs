//! Seeding and round naming shared by both elimination formats.

use crate::models::Player;

/// True for 1, 2, 4, 8, ...
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Pair players strongest vs weakest: sorted by seed (unseeded as 0), position i
/// meets position N-1-i. For 8 players: 1v8, 2v7, 3v6, 4v5.
pub fn seed_players(players: &[Player]) -> Vec<(Player, Player)> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(Player::seed_or_default);

    let n = sorted.len();
    (0..n / 2)
        .map(|i| (sorted[i].clone(), sorted[n - 1 - i].clone()))
        .collect()
}

/// Title of `round` (1-based) in a bracket of `num_rounds`, counted back from the final.
pub fn round_title(round: u32, num_rounds: u32) -> String {
    match num_rounds.saturating_sub(round) {
        0 => "Finals".to_string(),
        1 => "Semifinals".to_string(),
        2 => "Quarterfinals".to_string(),
        _ => format!("Round {}", round),
    }
}

/// Titles for rounds 1..=num_rounds, in round order.
pub fn round_titles(num_rounds: u32) -> Vec<String> {
    (1..=num_rounds).map(|r| round_title(r, num_rounds)).collect()
}
