use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use squadsplit::{AppConfig, AppState, JsonFileRosterRepository};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<JsonFileRosterRepository>,
    pub roster_path: PathBuf,
    pub _dir: TempDir,
}

impl TestSetup {
    /// Builds a router backed by a roster file in a fresh temp directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let roster_path = dir.path().join("players.json");
        Self::at(dir, roster_path)
    }

    /// Builds a second router over the same roster file, like a restarted process
    pub fn reopen(self) -> Self {
        let roster_path = self.roster_path.clone();
        Self::at(self._dir, roster_path)
    }

    fn at(dir: TempDir, roster_path: PathBuf) -> Self {
        let config = AppConfig {
            roster_path: roster_path.clone(),
            ..AppConfig::default()
        };
        let repository = Arc::new(JsonFileRosterRepository::new(roster_path.clone()));
        let app = squadsplit::router(AppState::new(repository.clone(), &config));

        Self {
            app,
            repository,
            roster_path,
            _dir: dir,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send("GET", uri, "").await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", uri, body).await
    }

    async fn send(&self, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "text/plain")
            .body(Body::from(body.to_string()))
            .expect("request should build");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        (
            status,
            String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
        )
    }
}
