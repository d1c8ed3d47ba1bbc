//! TeamRoster: the ordered team list a tie sheet is built from.

use crate::config::ReseedPolicy;
use crate::logic::{build_bracket, reseed_bracket};
use crate::models::bracket::{Bracket, BracketError};
use crate::models::team::{Player, PlayerId, Team};
use serde::{Deserialize, Serialize};

/// Teams in entry order. Serializes as a plain list.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRoster {
    teams: Vec<Team>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Team, BracketError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BracketError::TeamNotFound(id.to_string()))
    }

    /// Add a new team. The name is trimmed and required; it is seeded after everyone else.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<&Team, BracketError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(BracketError::EmptyTeamName);
        }
        let seed = self.next_seed();
        self.teams.push(Team {
            players: Some(Vec::new()),
            ..Team::new(name_trimmed).with_seed(seed)
        });
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Add a team loaded from elsewhere (keeps its id). Unseeded teams, and seed 0, are seeded last.
    pub fn add_existing_team(&mut self, mut team: Team) -> Result<(), BracketError> {
        if self.get(&team.id).is_some() {
            return Err(BracketError::DuplicateTeam(team.id));
        }
        if team.sort_seed() == 0 {
            team.seed = Some(self.next_seed());
        }
        self.teams.push(team);
        Ok(())
    }

    pub fn remove_team(&mut self, id: &str) -> Result<Team, BracketError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BracketError::TeamNotFound(id.to_string()))?;
        Ok(self.teams.remove(idx))
    }

    /// Add a player to a team's roster. Blank position/number are stored as absent.
    pub fn add_player(
        &mut self,
        team_id: &str,
        name: &str,
        position: Option<&str>,
        number: Option<&str>,
    ) -> Result<PlayerId, BracketError> {
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(BracketError::EmptyPlayerName);
        }
        let player = Player::new(name_trimmed, position, number);
        let id = player.id.clone();
        self.get_mut(team_id)?
            .players
            .get_or_insert_with(Vec::new)
            .push(player);
        Ok(id)
    }

    pub fn remove_player(&mut self, team_id: &str, player_id: &str) -> Result<Player, BracketError> {
        let players = self.get_mut(team_id)?.players.get_or_insert_with(Vec::new);
        let idx = players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| BracketError::PlayerNotFound(player_id.to_string()))?;
        Ok(players.remove(idx))
    }

    /// Build a bracket from the roster; an empty roster is an error here.
    pub fn build_bracket(&self) -> Result<Bracket, BracketError> {
        build_bracket(&self.teams).ok_or(BracketError::EmptyInput)
    }

    /// Reseed `bracket` with the current roster.
    pub fn reseed(&self, bracket: &Bracket, policy: ReseedPolicy) -> Result<Bracket, BracketError> {
        reseed_bracket(Some(bracket), &self.teams, policy)?.ok_or(BracketError::EmptyInput)
    }

    fn next_seed(&self) -> i64 {
        self.teams.len() as i64 + 1
    }
}

impl From<Vec<Team>> for TeamRoster {
    fn from(teams: Vec<Team>) -> Self {
        Self::with_teams(teams)
    }
}
