//! Initial bracket generation from a seeded team list.

use crate::logic::seeding::{first_round_pairings, round_count, sort_by_seed};
use crate::models::{Bracket, Match, Round, Team};

/// Build a fresh bracket from `teams`.
///
/// 1. Sort by seed (unseeded first, stable).
/// 2. `round_count = ceil(log2(n))`, `perfect_size = 2^round_count`.
/// 3. Round one pairs seeds with the standard pairing; missing positions are byes.
/// 4. Later rounds start with both slots empty; the last one is the Final.
///
/// Returns None when there are no teams. A single team gets a bracket with no rounds.
pub fn build_bracket(teams: &[Team]) -> Option<Bracket> {
    if teams.is_empty() {
        return None;
    }

    let sorted = sort_by_seed(teams);
    let rounds_needed = round_count(sorted.len());
    let perfect_size = 1usize << rounds_needed;

    let mut rounds = Vec::with_capacity(rounds_needed);
    if rounds_needed > 0 {
        let matches = first_round_pairings(&sorted, perfect_size)
            .into_iter()
            .enumerate()
            .map(|(m, slots)| Match::new(0, m, slots))
            .collect();
        rounds.push(Round {
            name: Round::display_name(0, rounds_needed),
            matches,
        });
    }

    for r in 1..rounds_needed {
        let match_count = perfect_size >> (r + 1);
        rounds.push(Round {
            name: Round::display_name(r, rounds_needed),
            matches: (0..match_count).map(|m| Match::empty(r, m)).collect(),
        });
    }

    log::debug!(
        "Built bracket for {} teams: {} round(s), {} first-round match(es)",
        sorted.len(),
        rounds_needed,
        perfect_size / 2
    );
    Some(Bracket { rounds })
}
