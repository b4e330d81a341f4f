pub mod settings;

pub use settings::{AppConfig, StorageSettings, TournamentSettings};
