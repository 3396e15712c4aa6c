// Library crate for the squad splitting service
// This file exposes the public API for integration tests

pub mod config;
pub mod reports;
pub mod roster;
pub mod scoring;
pub mod shared;
pub mod teams;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use roster::{
    JsonFileRosterRepository, ParticipantRecord, Roster, RosterError, RosterRepository,
    RosterService,
};
pub use shared::{AppError, AppState};
pub use teams::{partition, Team};

/// Builds the command router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(roster::start))
        .route("/start", get(roster::start))
        .route("/help", get(roster::help))
        .route("/decide", post(roster::decide))
        .route("/teams", get(roster::teams))
        .route("/leaderboard", get(roster::leaderboard))
        .route("/stats", get(roster::stats))
        .route("/reset", post(roster::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
