use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, instrument};

use super::{parser::parse_and_merge, repository::RosterRepository, Roster, RosterError};
use crate::teams::{partition, validate_team_count, Team};

/// Runs each command as a load -> compute -> save pipeline against the repository.
///
/// Mutating commands hold a single writer lock for the whole pipeline so two
/// submissions cannot interleave their load and save.
pub struct RosterService {
    repository: Arc<dyn RosterRepository>,
    write_lock: AsyncMutex<()>,
}

impl RosterService {
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self {
            repository,
            write_lock: AsyncMutex::new(()),
        }
    }

    /// Parses the submission, merges it into the stored roster and persists
    /// the result once. Nothing is saved if any line is invalid.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub async fn submit(&self, text: &str) -> Result<Roster, RosterError> {
        let _guard = self.write_lock.lock().await;

        let current = self.repository.load().await?;
        let updated = parse_and_merge(text, &current)?;
        self.repository.save(&updated).await?;

        info!(
            before = current.len(),
            after = updated.len(),
            "Roster submission merged"
        );
        Ok(updated)
    }

    /// Submits the roster text and partitions the updated roster.
    #[instrument(skip(self, text))]
    pub async fn decide(&self, text: &str, group_count: usize) -> Result<Vec<Team>, RosterError> {
        validate_team_count(group_count)?;
        let roster = self.submit(text).await?;
        partition(&roster, group_count)
    }

    #[instrument(skip(self))]
    pub async fn teams(&self, group_count: usize) -> Result<Vec<Team>, RosterError> {
        let roster = self.repository.load().await?;
        partition(&roster, group_count)
    }

    pub async fn roster(&self) -> Result<Roster, RosterError> {
        let roster = self.repository.load().await?;
        debug!(participants = roster.len(), "Roster read");
        Ok(roster)
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), RosterError> {
        let _guard = self.write_lock.lock().await;
        self.repository.clear().await?;
        info!("Roster reset");
        Ok(())
    }
}
