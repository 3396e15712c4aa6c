use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::config::AppConfig;
use crate::roster::{RosterError, RosterRepository, RosterService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<RosterService>,
    pub default_team_count: usize,
}

impl AppState {
    pub fn new(repository: Arc<dyn RosterRepository>, config: &AppConfig) -> Self {
        Self {
            roster_service: Arc::new(RosterService::new(repository)),
            default_team_count: config.team_count,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        if err.is_validation() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Storage(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage(msg) => {
                error!(error = %msg, "Roster storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Could not access player data: {}", msg),
                )
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::roster::InMemoryRosterRepository;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        repository: Option<Arc<dyn RosterRepository>>,
        team_count: usize,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                repository: None,
                team_count: crate::teams::DEFAULT_TEAM_COUNT,
            }
        }

        pub fn with_repository(mut self, repository: Arc<dyn RosterRepository>) -> Self {
            self.repository = Some(repository);
            self
        }

        pub fn with_team_count(mut self, team_count: usize) -> Self {
            self.team_count = team_count;
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                roster_service: Arc::new(RosterService::new(
                    self.repository
                        .unwrap_or_else(|| Arc::new(InMemoryRosterRepository::new())),
                )),
                default_team_count: self.team_count,
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
