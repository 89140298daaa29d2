//! Elimination bracket generation: single elimination, and double elimination with a
//! first losers round.

use crate::logic::seeding::{is_power_of_two, round_titles, seed_players};
use crate::models::{
    Bracket, BracketError, BracketFormat, BracketSide, GameMatch, MatchId, Player, Round,
};

/// Number of rounds for a valid bracket size, or the size error.
fn checked_num_rounds(players: &[Player]) -> Result<u32, BracketError> {
    let n = players.len();
    if n < 2 || !is_power_of_two(n) {
        return Err(BracketError::InvalidBracketSize { players: n });
    }
    Ok(n.trailing_zeros())
}

/// Generate a single elimination bracket.
///
/// 1. Round 1: one match per seeded pair, both slots filled, ids from 1.
/// 2. Rounds 2..k: half as many matches as the previous round (rounded up), empty
///    slots, ids continuing.
/// 3. Round titles counted back from the final.
pub fn generate_single_elimination_bracket(players: &[Player]) -> Result<Bracket, BracketError> {
    let num_rounds = checked_num_rounds(players)?;

    let rounds: Vec<Round> = round_titles(num_rounds)
        .into_iter()
        .zip(1..)
        .map(|(title, number)| Round::new(number, title))
        .collect();

    let mut match_id: MatchId = 1;
    let mut current: Vec<GameMatch> = seed_players(players)
        .into_iter()
        .zip(0..)
        .map(|((p1, p2), position)| {
            let m = GameMatch::seeded(match_id, p1, p2, position);
            match_id += 1;
            m
        })
        .collect();

    let mut matches = current.clone();

    for round in 2..=num_rounds {
        let next: Vec<GameMatch> = (0..current.len())
            .step_by(2)
            .map(|i| {
                let position = (i / 2) as u32;
                let m = GameMatch::placeholder(match_id, round, position, BracketSide::Winners);
                match_id += 1;
                m
            })
            .collect();
        matches.extend(next.iter().cloned());
        current = next;
    }

    log::debug!(
        "Generated single elimination bracket: {} players, {} rounds, {} matches",
        players.len(),
        num_rounds,
        matches.len()
    );

    Ok(Bracket { matches, rounds })
}

/// Generate a double elimination bracket.
///
/// The winners side is the full single elimination bracket tagged "W". Only the first
/// losers round is produced (tagged "L", one match per two round-1 winners matches);
/// later losers rounds and the grand final match are left to the caller. A trailing
/// "Grand Final" round descriptor is appended.
pub fn generate_double_elimination_bracket(players: &[Player]) -> Result<Bracket, BracketError> {
    let num_rounds = checked_num_rounds(players)?;

    let Bracket {
        mut matches,
        mut rounds,
    } = generate_single_elimination_bracket(players)?;
    for m in &mut matches {
        m.tag_with_side();
    }

    let pair_count = players.len() / 2;
    let losers_count = pair_count.div_ceil(2);
    // Render hint: place losers matches below the winners bracket.
    let first_losers_position = (pair_count * 3).div_ceil(2) as u32;

    let mut match_id = matches.len() as MatchId + 1;
    for i in 0..losers_count as u32 {
        let position = first_losers_position + i;
        let mut m = GameMatch::placeholder(match_id, 1, position, BracketSide::Losers);
        m.tag_with_side();
        matches.push(m);
        match_id += 1;
    }

    rounds.push(Round::new(num_rounds + 1, "Grand Final"));

    log::debug!(
        "Generated double elimination bracket: {} players, {} losers round 1 matches",
        players.len(),
        losers_count
    );

    Ok(Bracket { matches, rounds })
}

impl BracketFormat {
    /// Generate a bracket in this format.
    pub fn generate(self, players: &[Player]) -> Result<Bracket, BracketError> {
        match self {
            BracketFormat::SingleElimination => generate_single_elimination_bracket(players),
            BracketFormat::DoubleElimination => generate_double_elimination_bracket(players),
        }
    }
}
