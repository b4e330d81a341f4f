use anyhow::Result;

use crate::domain::Roster;

pub const DEFAULT_PLAYERS: [&str; 6] = ["Matt", "Ian", "Tom", "Peter", "Gareth", "Eliott"];

#[derive(Debug, Clone)]
pub struct TournamentSettings {
    pub players: Vec<String>,
    pub points_per_win: u32,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(|p| p.to_string()).collect(),
            points_per_win: 3,
        }
    }
}

impl TournamentSettings {
    pub fn roster(&self) -> Result<Roster> {
        Roster::new(&self.players)
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub snapshot_key: &'static str,
    pub export_file_name: &'static str,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "snooker_tournament.db".to_string()),
            snapshot_key: "snookerMatches",
            export_file_name: "snooker-tournament-data.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tournament: TournamentSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            tournament: TournamentSettings::default(),
            storage: StorageSettings::default(),
        }
    }

    pub fn with_players(mut self, players: Option<Vec<String>>) -> Self {
        if let Some(players) = players {
            self.tournament.players = players;
        }
        self
    }

    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.storage.database_path = path;
        }
        self
    }
}
