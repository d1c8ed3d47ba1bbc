//! Seed ordering and the standard seeding pairing shared by build and reseed.

use crate::models::Team;

/// Rounds needed for `team_count` teams: `ceil(log2(n))`, 0 for zero or one team.
pub fn round_count(team_count: usize) -> usize {
    if team_count <= 1 {
        0
    } else {
        (usize::BITS - (team_count - 1).leading_zeros()) as usize
    }
}

/// Teams ordered by ascending seed. Unseeded teams count as seed 0; ties keep input order.
pub fn sort_by_seed(teams: &[Team]) -> Vec<Team> {
    let mut sorted = teams.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(Team::sort_seed);
    sorted
}

/// Round-one slots for a bracket of `perfect_size` positions.
///
/// Match `i` pairs sorted index `i` against `perfect_size - 1 - i`, so the top seed meets the
/// bottom of the draw and the two top seeds land in opposite halves. Positions past the end
/// of `sorted` are byes.
pub fn first_round_pairings(sorted: &[Team], perfect_size: usize) -> Vec<[Option<Team>; 2]> {
    (0..perfect_size / 2)
        .map(|i| {
            [
                sorted.get(i).cloned(),
                sorted.get(perfect_size - 1 - i).cloned(),
            ]
        })
        .collect()
}
