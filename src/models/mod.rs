//! Data structures for the tie sheet: teams, rosters, matches, rounds, brackets.

mod bracket;
mod roster;
mod team;

pub use bracket::{Bracket, BracketError, Match, MatchId, Round, SelectionEvent, Slot};
pub use roster::TeamRoster;
pub use team::{Player, PlayerId, Team, TeamId};
