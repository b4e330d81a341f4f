//! Lenient readers for score fields.
//!
//! Files saved by the browser version store scores as the raw text of the
//! input box (`""`, `"64"`), newer files store numbers or `null`. Both read
//! into `Option<u32>`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(u32),
    Text(String),
}

pub fn optional_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawScore>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawScore::Number(n)) => Ok(Some(n)),
        Some(RawScore::Text(text)) => parse_score_text(&text).map_err(D::Error::custom),
    }
}

pub fn optional_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.filter(|n| !n.trim().is_empty()))
}

fn parse_score_text(text: &str) -> Result<Option<u32>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| format!("invalid score {:?}, expected a non-negative whole number", text))
}
