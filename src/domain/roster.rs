use anyhow::{Result, bail};
use std::collections::HashSet;

/// Ordered list of the players taking part in the round robin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(players: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players: Vec<String> = players
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .collect();

        if players.is_empty() {
            bail!("Roster must contain at least one player");
        }
        if let Some(idx) = players.iter().position(|p| p.is_empty()) {
            bail!("Roster entry {} is blank", idx + 1);
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.as_str()) {
                bail!("Roster lists {} more than once", player);
            }
        }

        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// Roster position of the first entry with this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_names_and_keeps_order() {
        let roster = Roster::new([" Matt", "Ian ", "Tom"]).unwrap();
        assert_eq!(roster.as_slice(), ["Matt", "Ian", "Tom"]);
        assert_eq!(roster.position("Tom"), Some(2));
        assert!(!roster.contains("Peter"));
    }

    #[test]
    fn test_rejects_empty_roster_and_blank_names() {
        assert!(Roster::new(Vec::<String>::new()).is_err());
        assert!(Roster::new(["Matt", "  "]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Roster::new(["Matt", "Ian", "Matt"]).unwrap_err();
        assert_eq!(err.to_string(), "Roster lists Matt more than once");
        // Names are compared after trimming
        assert!(Roster::new(["Matt", " Matt "]).is_err());
    }
}
