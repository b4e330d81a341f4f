pub mod models;
mod roster;
pub mod schedule;
mod score_format;

pub use models::*;
pub use roster::Roster;
pub use schedule::{expected_pairings, generate_matches};
