//! Engine policies for the two cases where recording results can leave a bracket inconsistent.
//!
//! Read from the environment with defaults:
//! `BRACKET_CASCADE` (`next-slot-only` | `clear-downstream`),
//! `BRACKET_RESEED` (`reject` | `regenerate` | `keep-shape`).

use crate::models::BracketError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const CASCADE_ENV: &str = "BRACKET_CASCADE";
pub const RESEED_ENV: &str = "BRACKET_RESEED";

/// What happens downstream when a recorded winner is changed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadePolicy {
    /// Overwrite only the next-round slot; later rounds are left for manual re-resolution.
    #[default]
    NextSlotOnly,
    /// Also clear later results that were decided with the replaced team.
    ClearDownstream,
}

/// What reseed does when the new team count needs a different number of rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReseedPolicy {
    /// Fail with `StructuralMismatch`.
    #[default]
    Reject,
    /// Build a new bracket sized for the new roster.
    Regenerate,
    /// Reseed into the existing shape anyway. Teams past the last slot are dropped.
    KeepShape,
}

impl FromStr for CascadePolicy {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next-slot-only" => Ok(CascadePolicy::NextSlotOnly),
            "clear-downstream" => Ok(CascadePolicy::ClearDownstream),
            _ => Err(invalid(CASCADE_ENV, s)),
        }
    }
}

impl FromStr for ReseedPolicy {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(ReseedPolicy::Reject),
            "regenerate" => Ok(ReseedPolicy::Regenerate),
            "keep-shape" => Ok(ReseedPolicy::KeepShape),
            _ => Err(invalid(RESEED_ENV, s)),
        }
    }
}

fn invalid(key: &str, value: &str) -> BracketError {
    BracketError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub cascade: CascadePolicy,
    #[serde(default)]
    pub reseed: ReseedPolicy,
}

impl EngineConfig {
    /// Load from process environment. Unset variables use the defaults.
    pub fn from_env() -> Result<Self, BracketError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup (process env, a settings map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BracketError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cascade = match lookup(CASCADE_ENV) {
            Some(v) => v.parse()?,
            None => CascadePolicy::default(),
        };
        let reseed = match lookup(RESEED_ENV) {
            Some(v) => v.parse()?,
            None => ReseedPolicy::default(),
        };
        let config = Self { cascade, reseed };
        log::debug!("Engine config: {:?}", config);
        Ok(config)
    }
}
