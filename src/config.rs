use std::path::PathBuf;

use crate::teams::{validate_team_count, DEFAULT_TEAM_COUNT, MAX_TEAM_COUNT};

pub const DEFAULT_ROSTER_PATH: &str = "players.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime settings, read from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub roster_path: PathBuf,
    pub bind_addr: String,
    pub team_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            team_count: DEFAULT_TEAM_COUNT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Out-of-range counts fall back to the default
        let team_count = lookup("TEAM_COUNT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|count: &usize| validate_team_count(*count).is_ok())
            .unwrap_or(defaults.team_count);

        Self {
            roster_path: lookup("ROSTER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.roster_path),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            team_count,
        }
    }
}
