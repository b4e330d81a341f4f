pub mod calculator;
pub mod types;

pub use calculator::calculate_standings;
pub use types::{ScoringRules, Standing};
