use serde::{Deserialize, Serialize};

use crate::domain::Side;
use crate::standings::Standing;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: usize,
    pub player: String,
    pub match_points: u32,
    pub high_breaks: u32,
    pub total: u32,
}

impl StandingRow {
    pub fn from_ranked(position: usize, standing: Standing) -> Self {
        Self {
            position,
            player: standing.player,
            match_points: standing.match_points,
            high_breaks: standing.high_breaks,
            total: standing.total,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub items: Vec<StandingRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameScoreRequest {
    pub side: Side,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighBreakRequest {
    #[serde(default)]
    pub high_break: Option<u32>,
    #[serde(default)]
    pub high_break_player: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub message: String,
    pub matches: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
