use log::{debug, warn};

use super::types::{ScoringRules, Standing};
use crate::domain::{Match, Roster};

/// Standings with the standard 3 points per win
pub fn calculate_standings(roster: &Roster, matches: &[Match]) -> Vec<Standing> {
    calculate_standings_with(roster, matches, ScoringRules::default())
}

/// Aggregates match points and high breaks per roster player.
///
/// Ordered by total, then match points, then roster order.
pub fn calculate_standings_with(
    roster: &Roster,
    matches: &[Match],
    rules: ScoringRules,
) -> Vec<Standing> {
    debug!("Calculating standings for {} matches", matches.len());

    let mut standings: Vec<Standing> = roster.iter().map(Standing::new).collect();

    for m in matches {
        if let Some(winner) = m.winner() {
            credit(&mut standings, roster, winner, |s| {
                s.match_points += rules.points_per_win
            });
        }
        if let Some(player) = m.high_break_player.as_deref() {
            credit(&mut standings, roster, player, |s| s.high_breaks += 1);
        }
    }

    for standing in &mut standings {
        standing.total = standing.match_points + standing.high_breaks;
    }

    sort_standings(&mut standings);
    standings
}

fn credit(
    standings: &mut [Standing],
    roster: &Roster,
    player: &str,
    apply: impl FnOnce(&mut Standing),
) {
    // Standings start in roster order, so roster positions index them
    match roster.position(player) {
        Some(idx) => apply(&mut standings[idx]),
        None => warn!("Ignoring result for {}, who is not on the roster", player),
    }
}

fn sort_standings(standings: &mut [Standing]) {
    // Stable sort keeps roster order for full ties
    standings.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| b.match_points.cmp(&a.match_points))
    });
}
