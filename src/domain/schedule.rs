use super::models::Match;
use super::roster::Roster;

/// Every unordered pairing of the roster, in roster order, with empty frames
pub fn generate_matches(roster: &Roster) -> Vec<Match> {
    let players = roster.as_slice();
    let mut matches = Vec::with_capacity(expected_pairings(roster));

    for (i, player1) in players.iter().enumerate() {
        for player2 in &players[i + 1..] {
            matches.push(Match::new(player1, player2));
        }
    }

    matches
}

pub fn expected_pairings(roster: &Roster) -> usize {
    let n = roster.len();
    n * n.saturating_sub(1) / 2
}
