use serde::Serialize;

use crate::config::TournamentSettings;

/// A player's line in the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player: String,
    pub match_points: u32,
    pub high_breaks: u32,
    pub total: u32,
}

impl Standing {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            match_points: 0,
            high_breaks: 0,
            total: 0,
        }
    }
}

/// Match points for a win; every high break counts as one point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub points_per_win: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self { points_per_win: 3 }
    }
}

impl From<&TournamentSettings> for ScoringRules {
    fn from(settings: &TournamentSettings) -> Self {
        Self {
            points_per_win: settings.points_per_win,
        }
    }
}
