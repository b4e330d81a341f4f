use colored::Colorize;

use crate::domain::{FRAMES_PER_MATCH, Frame, Match};
use crate::standings::Standing;

const PODIUM_PLACES: usize = 3;

pub fn render_standings(standings: &[Standing]) -> String {
    let mut report = String::new();
    report.push_str(&format!("{}\n\n", "Tournament Standings".bold()));
    report.push_str(&format!(
        "{:<9} {:<16} {:>12} {:>12} {:>12}\n",
        "Position", "Player", "Match Points", "High Breaks", "Total Points"
    ));
    report.push_str(&"-".repeat(65));
    report.push('\n');

    for (idx, standing) in standings.iter().enumerate() {
        let line = format!(
            "{:<9} {:<16} {:>12} {:>12} {:>12}",
            idx + 1,
            standing.player,
            standing.match_points,
            standing.high_breaks,
            standing.total
        );
        if idx < PODIUM_PLACES {
            report.push_str(&line.bold().to_string());
        } else {
            report.push_str(&line);
        }
        report.push('\n');
    }

    report
}

pub fn render_matches(matches: &[Match]) -> String {
    let mut report = String::new();
    report.push_str(&format!("{}\n\n", "Match Results".bold()));

    for (idx, m) in matches.iter().enumerate() {
        report.push_str(&render_match(idx + 1, m));
        report.push('\n');
    }

    report
}

fn render_match(number: usize, m: &Match) -> String {
    let (p1_frames, p2_frames) = m.frame_wins();
    let played = m.frames_played();
    let result = match m.winner() {
        Some(winner) if played == FRAMES_PER_MATCH => {
            format!("{} wins", winner).green().to_string()
        }
        Some(winner) => format!("{} leads", winner),
        None if played == 0 => "not played".dimmed().to_string(),
        None if played == FRAMES_PER_MATCH => "draw".yellow().to_string(),
        None => "level".to_string(),
    };

    let mut text = format!(
        "{:>2}. {} vs {}  [{}-{}] {}\n",
        number, m.player1, m.player2, p1_frames, p2_frames, result
    );

    let frames: Vec<String> = m
        .frames
        .iter()
        .enumerate()
        .map(|(i, f)| format!("Frame {}: {}", i + 1, format_frame(f)))
        .collect();
    text.push_str(&format!("    {}\n", frames.join("  ")));

    if let Some(player) = &m.high_break_player {
        let value = m
            .high_break
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        text.push_str(&format!("    High break: {} by {}\n", value, player));
    } else if let Some(value) = m.high_break {
        text.push_str(&format!("    High break: {}\n", value));
    }

    text
}

fn format_frame(frame: &Frame) -> String {
    format!(
        "{}-{}",
        format_score(frame.player1_score),
        format_score(frame.player2_score)
    )
}

fn format_score(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "_".to_string())
}
