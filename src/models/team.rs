//! Team and Player data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a team. Opaque to the engine (a uuid for teams entered here,
/// whatever the store uses for teams loaded from it).
pub type TeamId = String;

/// Identifier for a player on a team roster.
pub type PlayerId = String;

/// A member of a team's roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Shirt number; free-form text ("07", "10A").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl Player {
    /// Create a player with a fresh id. Blank position/number are stored as absent.
    pub fn new(name: impl Into<String>, position: Option<&str>, number: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            position: non_blank(position),
            number: non_blank(number),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// A team entered into the tie sheet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Lower seeds are stronger. Unseeded teams sort as seed 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

impl Team {
    /// Create an unseeded team with a fresh id and no roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            seed: None,
            players: None,
        }
    }

    /// Same team with the given seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed used for ordering.
    pub fn sort_seed(&self) -> i64 {
        self.seed.unwrap_or(0)
    }

    pub fn players(&self) -> &[Player] {
        self.players.as_deref().unwrap_or(&[])
    }
}
