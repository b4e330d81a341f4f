//! Export and import of the whole match list as a JSON document

pub mod validation;

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::{Match, Roster};
use crate::errors::ImportError;

pub use validation::validate_match_list;

pub fn to_pretty_json(matches: &[Match]) -> Result<String> {
    serde_json::to_string_pretty(matches).context("Failed to serialize match list")
}

pub fn export_to_file<P: AsRef<Path>>(path: P, matches: &[Match]) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(matches)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Exported {} matches to {}", matches.len(), path.display());
    Ok(())
}

/// Parse and validate a match list against the active roster
pub fn parse_match_list(text: &str, roster: &Roster) -> Result<Vec<Match>, ImportError> {
    let matches: Vec<Match> = serde_json::from_str(text)?;
    validate_match_list(&matches, roster)?;
    Ok(matches)
}

pub fn import_from_file<P: AsRef<Path>>(path: P, roster: &Roster) -> Result<Vec<Match>> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let matches = parse_match_list(&text, roster)?;

    info!("Read {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
