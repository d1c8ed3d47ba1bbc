//! Bracket, Round, Match and the errors bracket operations can produce.

use crate::models::team::{PlayerId, Team, TeamId};
use serde::{Deserialize, Serialize};

/// Identifier for a match, e.g. `r2-m1` (second round, first match).
pub type MatchId = String;

/// Errors that can occur during bracket and roster operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// No teams to build or reseed a bracket from.
    EmptyInput,
    /// Selection points outside the bracket, or at a slot other than 0/1.
    InvalidSelection {
        round_index: usize,
        match_index: usize,
        slot_index: usize,
    },
    /// Team count does not fit the bracket's existing rounds.
    StructuralMismatch {
        round_count: usize,
        required_rounds: usize,
        team_count: usize,
    },
    /// Round `round_index` does not hold half the matches of the round before it.
    MalformedBracket { round_index: usize },
    /// Team name is blank.
    EmptyTeamName,
    /// Player name is blank.
    EmptyPlayerName,
    /// A team with this id is already on the roster.
    DuplicateTeam(TeamId),
    /// Team not found on the roster.
    TeamNotFound(TeamId),
    /// Player not found on the team.
    PlayerNotFound(PlayerId),
    /// Configuration value could not be parsed.
    InvalidConfig { key: String, value: String },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::EmptyInput => write!(f, "Add teams to generate the bracket"),
            BracketError::InvalidSelection {
                round_index,
                match_index,
                slot_index,
            } => write!(
                f,
                "No slot {} in match {} of round {}",
                slot_index, match_index, round_index
            ),
            BracketError::StructuralMismatch {
                round_count,
                required_rounds,
                team_count,
            } => write!(
                f,
                "{} teams need {} rounds but the bracket has {}",
                team_count, required_rounds, round_count
            ),
            BracketError::MalformedBracket { round_index } => {
                write!(f, "Round {} has the wrong number of matches", round_index + 1)
            }
            BracketError::EmptyTeamName => write!(f, "Team name is required"),
            BracketError::EmptyPlayerName => write!(f, "Player name is required"),
            BracketError::DuplicateTeam(id) => write!(f, "Team {} is already in the tie sheet", id),
            BracketError::TeamNotFound(_) => write!(f, "Team not found"),
            BracketError::PlayerNotFound(_) => write!(f, "Player not found"),
            BracketError::InvalidConfig { key, value } => {
                write!(f, "Invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for BracketError {}

/// One of the two positions in a match. Serialized as 0 or 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::First),
            1 => Some(Slot::Second),
            _ => None,
        }
    }

    /// Slot in the next round fed by the winner of match `match_index`.
    pub fn feeding(match_index: usize) -> Slot {
        if match_index % 2 == 0 {
            Slot::First
        } else {
            Slot::Second
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::from_index(value as usize)
            .ok_or_else(|| format!("slot must be 0 or 1, got {}", value))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> u8 {
        slot.index() as u8
    }
}

/// A single pairing. An empty slot is a team still to be decided, or a bye in round 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub teams: [Option<Team>; 2],
    /// None until a winner is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Slot>,
}

impl Match {
    /// Undecided match with both slots empty.
    pub fn empty(round_index: usize, match_index: usize) -> Self {
        Self::new(round_index, match_index, [None, None])
    }

    pub fn new(round_index: usize, match_index: usize, teams: [Option<Team>; 2]) -> Self {
        Self {
            id: format!("r{}-m{}", round_index + 1, match_index + 1),
            teams,
            winner: None,
        }
    }

    pub fn team(&self, slot: Slot) -> Option<&Team> {
        self.teams[slot.index()].as_ref()
    }

    pub fn winning_team(&self) -> Option<&Team> {
        self.winner.and_then(|slot| self.team(slot))
    }

    /// Exactly one slot is occupied.
    pub fn is_bye(&self) -> bool {
        self.teams.iter().filter(|t| t.is_some()).count() == 1
    }

    /// Clear both slots and the winner.
    pub fn reset(&mut self) {
        self.teams = [None, None];
        self.winner = None;
    }
}

/// One elimination stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
}

impl Round {
    /// Display name: "Final" for the last of several rounds, otherwise "Round N".
    pub fn display_name(round_index: usize, round_count: usize) -> String {
        if round_count > 1 && round_index == round_count - 1 {
            "Final".to_string()
        } else {
            format!("Round {}", round_index + 1)
        }
    }
}

/// The full match tree: round 0 first, final round last.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// True for a single-team bracket: nothing to play.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// First round whose match count breaks the shape: round 0 holds `2^(rounds-1)` matches
    /// and every later round half the one before. None for a well-formed bracket.
    pub fn malformed_round(&self) -> Option<usize> {
        if self.rounds.is_empty() {
            return None;
        }
        let mut expected = match u32::try_from(self.rounds.len() - 1)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
        {
            Some(n) => n,
            None => return Some(0),
        };
        for (r, round) in self.rounds.iter().enumerate() {
            if round.matches.len() != expected {
                return Some(r);
            }
            expected /= 2;
        }
        None
    }

    pub fn get_match(&self, round_index: usize, match_index: usize) -> Option<&Match> {
        self.rounds.get(round_index)?.matches.get(match_index)
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.rounds.last()?.matches.first()
    }

    /// Team that won the final, once recorded.
    pub fn champion(&self) -> Option<&Team> {
        self.final_match()?.winning_team()
    }

    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }
}

/// A user's winner pick, as received from the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    pub round_index: usize,
    pub match_index: usize,
    /// Raw slot index; anything but 0 or 1 is rejected when applied.
    pub slot_index: usize,
}
