use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::reports;
use crate::shared::{AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct TeamsQuery {
    pub groups: Option<usize>,
}

impl TeamsQuery {
    fn group_count(&self, state: &AppState) -> usize {
        self.groups.unwrap_or(state.default_team_count)
    }
}

/// GET / and GET /start
pub async fn start() -> String {
    reports::start_text()
}

/// GET /help
pub async fn help() -> String {
    reports::help_text()
}

/// HTTP handler for submitting players and splitting them into teams
///
/// POST /decide?groups=N
/// Body is the roster text, one player per line
#[instrument(name = "decide", skip(state, body))]
pub async fn decide(
    State(state): State<AppState>,
    Query(query): Query<TeamsQuery>,
    body: String,
) -> Result<String, AppError> {
    let group_count = query.group_count(&state);
    let teams = state.roster_service.decide(&body, group_count).await?;

    info!(teams = teams.len(), "Teams decided");
    Ok(reports::team_report(&teams))
}

/// GET /teams?groups=N
#[instrument(name = "teams", skip(state))]
pub async fn teams(
    State(state): State<AppState>,
    Query(query): Query<TeamsQuery>,
) -> Result<String, AppError> {
    let group_count = query.group_count(&state);
    let teams = state.roster_service.teams(group_count).await?;
    Ok(reports::team_report(&teams))
}

/// GET /leaderboard
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(State(state): State<AppState>) -> Result<String, AppError> {
    let roster = state.roster_service.roster().await?;
    Ok(reports::leaderboard(&roster))
}

/// GET /stats
#[instrument(name = "stats", skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<String, AppError> {
    let roster = state.roster_service.roster().await?;
    Ok(reports::stats(&roster))
}

/// POST /reset
#[instrument(name = "reset", skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<String, AppError> {
    state.roster_service.reset().await?;
    Ok(reports::RESET_CONFIRMATION.to_string())
}
