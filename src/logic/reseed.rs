//! Reseeding an existing bracket after the roster changed.

use crate::config::ReseedPolicy;
use crate::logic::builder::build_bracket;
use crate::logic::seeding::{first_round_pairings, round_count, sort_by_seed};
use crate::models::{Bracket, BracketError, Team};

/// Re-pair round one from `teams` and throw away all results.
///
/// The existing round-one match count is kept: `perfect_size = matches * 2`. Every round-one
/// winner is unset and every later match is emptied. Round and match counts never change
/// unless `policy` is `Regenerate` and the roster needs a different number of rounds.
///
/// A bracket whose rounds do not halve is rebuilt under `Regenerate` and rejected with
/// `MalformedBracket` otherwise.
///
/// Returns `Ok(None)` when there is no bracket or no teams.
pub fn reseed_bracket(
    bracket: Option<&Bracket>,
    teams: &[Team],
    policy: ReseedPolicy,
) -> Result<Option<Bracket>, BracketError> {
    let bracket = match bracket {
        Some(b) if !teams.is_empty() => b,
        _ => return Ok(None),
    };

    if let Some(round_index) = bracket.malformed_round() {
        if policy == ReseedPolicy::Regenerate {
            log::info!("Regenerating malformed bracket (round {})", round_index + 1);
            return Ok(build_bracket(teams));
        }
        return Err(BracketError::MalformedBracket { round_index });
    }

    let required_rounds = round_count(teams.len());
    let mismatch = BracketError::StructuralMismatch {
        round_count: bracket.round_count(),
        required_rounds,
        team_count: teams.len(),
    };
    if required_rounds != bracket.round_count() {
        match policy {
            ReseedPolicy::Reject => return Err(mismatch),
            ReseedPolicy::Regenerate => {
                log::info!(
                    "Regenerating bracket: {} teams need {} rounds, had {}",
                    teams.len(),
                    required_rounds,
                    bracket.round_count()
                );
                return Ok(build_bracket(teams));
            }
            ReseedPolicy::KeepShape if bracket.is_empty() => return Err(mismatch),
            ReseedPolicy::KeepShape => log::warn!(
                "Reseeding {} teams into a {}-round bracket (needs {})",
                teams.len(),
                bracket.round_count(),
                required_rounds
            ),
        }
    }

    let mut updated = bracket.clone();
    let sorted = sort_by_seed(teams);
    let mut rounds = updated.rounds.iter_mut();

    if let Some(first) = rounds.next() {
        let perfect_size = first.matches.len() * 2;
        let pairings = first_round_pairings(&sorted, perfect_size);
        for (m, slots) in first.matches.iter_mut().zip(pairings) {
            m.teams = slots;
            m.winner = None;
        }
    }
    for round in rounds {
        for m in &mut round.matches {
            m.reset();
        }
    }

    log::debug!(
        "Reseeded {} teams into {} round(s)",
        sorted.len(),
        updated.round_count()
    );
    Ok(Some(updated))
}
