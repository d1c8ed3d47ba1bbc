//! Bracket business logic: building, recording winners, reseeding.

mod advance;
mod builder;
mod reseed;
mod seeding;

pub use advance::{apply_selection, select_winner};
pub use builder::build_bracket;
pub use reseed::reseed_bracket;
pub use seeding::{first_round_pairings, round_count, sort_by_seed};
