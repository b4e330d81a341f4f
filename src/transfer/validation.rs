use std::collections::HashSet;

use crate::domain::{Match, Roster, generate_matches};
use crate::errors::ImportError;

/// Checks that the list is exactly the round robin of `roster`.
///
/// Every pairing appears once in either seat order, nobody plays themselves,
/// and a recorded high break belongs to one of the two players.
pub fn validate_match_list(matches: &[Match], roster: &Roster) -> Result<(), ImportError> {
    let expected = generate_matches(roster);
    let mut seen = HashSet::new();

    for (idx, m) in matches.iter().enumerate() {
        let index = idx + 1;
        validate_players(m, index, roster)?;
        validate_high_break(m, index)?;

        if !seen.insert(pairing_key(&m.player1, &m.player2)) {
            return Err(ImportError::DuplicatePairing {
                player1: m.player1.clone(),
                player2: m.player2.clone(),
            });
        }
    }

    for e in &expected {
        if !seen.contains(&pairing_key(&e.player1, &e.player2)) {
            return Err(ImportError::MissingPairing {
                player1: e.player1.clone(),
                player2: e.player2.clone(),
            });
        }
    }

    Ok(())
}

fn validate_players(m: &Match, index: usize, roster: &Roster) -> Result<(), ImportError> {
    for player in [&m.player1, &m.player2] {
        if !roster.contains(player) {
            return Err(ImportError::UnknownPlayer {
                index,
                player: player.clone(),
            });
        }
    }
    if m.player1 == m.player2 {
        return Err(ImportError::SelfMatch {
            index,
            player: m.player1.clone(),
        });
    }
    Ok(())
}

fn validate_high_break(m: &Match, index: usize) -> Result<(), ImportError> {
    match m.high_break_player.as_deref() {
        Some(player) if !m.involves(player) => Err(ImportError::HighBreakOutsider {
            index,
            player: player.to_string(),
        }),
        _ => Ok(()),
    }
}

fn pairing_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}
