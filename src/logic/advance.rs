//! Recording match winners and propagating them into the next round.

use crate::config::{CascadePolicy, EngineConfig};
use crate::models::{Bracket, BracketError, SelectionEvent, Slot};

/// Apply a selection event as received from the caller (raw slot index).
pub fn apply_selection(
    bracket: &Bracket,
    event: &SelectionEvent,
    config: &EngineConfig,
) -> Result<Bracket, BracketError> {
    let slot = Slot::from_index(event.slot_index).ok_or(BracketError::InvalidSelection {
        round_index: event.round_index,
        match_index: event.match_index,
        slot_index: event.slot_index,
    })?;
    select_winner(
        bracket,
        event.round_index,
        event.match_index,
        slot,
        config.cascade,
    )
}

/// Record `slot` as the winner of match `match_index` in round `round_index`.
///
/// Unless this is the final round, the winning team is written into
/// `rounds[round_index + 1].matches[match_index / 2].teams[match_index % 2]`.
/// The input bracket is left untouched; the updated copy is returned.
pub fn select_winner(
    bracket: &Bracket,
    round_index: usize,
    match_index: usize,
    slot: Slot,
    cascade: CascadePolicy,
) -> Result<Bracket, BracketError> {
    // Shape is checked up front so propagation can index the next rounds directly.
    if bracket.get_match(round_index, match_index).is_none()
        || bracket.malformed_round().is_some()
    {
        return Err(BracketError::InvalidSelection {
            round_index,
            match_index,
            slot_index: slot.index(),
        });
    }

    let mut updated = bracket.clone();
    let m = &mut updated.rounds[round_index].matches[match_index];
    if m.winner.is_some_and(|w| w != slot) {
        log::warn!("Changing winner of match {} to slot {}", m.id, slot.index());
    }
    m.winner = Some(slot);
    let winning_team = m.team(slot).cloned();

    let next_round = round_index + 1;
    if next_round >= updated.rounds.len() {
        log::debug!("Final decided: slot {} wins", slot.index());
        return Ok(updated);
    }

    let next_match = match_index / 2;
    let next_slot = Slot::feeding(match_index);
    let target = &mut updated.rounds[next_round].matches[next_match].teams[next_slot.index()];
    let replaced = *target != winning_team;
    *target = winning_team;

    if replaced && cascade == CascadePolicy::ClearDownstream {
        clear_downstream(&mut updated, next_round, next_match, next_slot);
    }
    Ok(updated)
}

/// Undo results that were decided with the team previously at `(round, match, slot)`.
///
/// Walks forward while each match's recorded winner is the slot that changed: its winner is
/// cleared and the slot it fed in the following round is emptied.
fn clear_downstream(bracket: &mut Bracket, round: usize, match_index: usize, slot: Slot) {
    let (mut r, mut m, mut s) = (round, match_index, slot);
    loop {
        let current = &mut bracket.rounds[r].matches[m];
        if current.winner != Some(s) {
            return;
        }
        log::debug!("Clearing stale result of match {}", current.id);
        current.winner = None;

        if r + 1 >= bracket.rounds.len() {
            return;
        }
        let (next_m, next_s) = (m / 2, Slot::feeding(m));
        bracket.rounds[r + 1].matches[next_m].teams[next_s.index()] = None;
        (r, m, s) = (r + 1, next_m, next_s);
    }
}
