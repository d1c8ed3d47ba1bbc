//! Tie sheet engine: single-elimination bracket generation, winner advancement and reseeding.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{CascadePolicy, EngineConfig, ReseedPolicy};
pub use logic::{
    apply_selection, build_bracket, first_round_pairings, reseed_bracket, round_count,
    select_winner, sort_by_seed,
};
pub use models::{
    Bracket, BracketError, Match, MatchId, Player, PlayerId, Round, SelectionEvent, Slot, Team,
    TeamId, TeamRoster,
};
