//! Plain-text renderers for replies sent back to the command layer.

use crate::roster::parser::{MAX_RATING, MIN_RATING};
use crate::roster::Roster;
use crate::teams::Team;

pub const EMPTY_ROSTER: &str = "No players registered yet.";
pub const RESET_CONFIRMATION: &str = "All player data has been cleared.";

pub fn start_text() -> String {
    "Hello! Squad split is running. Use /help to see commands.".to_string()
}

pub fn help_text() -> String {
    [
        "Available commands:".to_string(),
        "/start - Check that the service is running".to_string(),
        "/help - Show this help message".to_string(),
        "/decide - Submit players, one per line: Name, Rank, IQ, Tactical, Speed, Confidence[, Position]"
            .to_string(),
        "/teams - Split registered players into teams".to_string(),
        "/leaderboard - Show players ranked by score".to_string(),
        "/stats - Show every player's ratings".to_string(),
        "/reset - Delete all player data".to_string(),
        String::new(),
        format!("Ratings are numbers from {} to {}.", MIN_RATING, MAX_RATING),
    ]
    .join("\n")
}

pub fn team_report(teams: &[Team]) -> String {
    let mut out = String::new();
    for (index, team) in teams.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "Team {} (total {:.2})\n",
            index + 1,
            team.total_score()
        ));
        if team.is_empty() {
            out.push_str("  (no players)\n");
        }
        for (name, record) in &team.members {
            out.push_str(&format!(
                "- {} ({:.2}) - {}\n",
                name,
                record.score(),
                record.position()
            ));
        }
    }
    out
}

pub fn leaderboard(roster: &Roster) -> String {
    if roster.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let mut out = String::from("Leaderboard\n");
    for (index, (name, record)) in roster.ranked().into_iter().enumerate() {
        out.push_str(&format!("{}. {} - {:.2}\n", index + 1, name, record.score()));
    }
    out
}

pub fn stats(roster: &Roster) -> String {
    if roster.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let mut blocks = Vec::with_capacity(roster.len());
    for (name, record) in roster.iter() {
        let r = record.ratings();
        blocks.push(format!(
            "{name}\n  Rank: {}\n  IQ: {}\n  Tactical: {}\n  Speed: {}\n  Confidence: {}\n  Position: {}\n  Score: {:.2}",
            r.rank,
            r.iq,
            r.tactical,
            r.speed,
            r.confidence,
            record.position(),
            record.score(),
        ));
    }
    blocks.join("\n\n")
}
