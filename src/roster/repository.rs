use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::{models::Roster, RosterError};

pub const DOCUMENT_VERSION: u32 = 1;

/// Whole-document persistence for the roster.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Returns the persisted roster, or an empty one if nothing has been saved yet.
    async fn load(&self) -> Result<Roster, RosterError>;
    /// Replaces the persisted roster entirely.
    async fn save(&self, roster: &Roster) -> Result<(), RosterError>;
    /// Removes the persisted roster.
    async fn clear(&self) -> Result<(), RosterError>;
}

/// In-memory implementation of RosterRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryRosterRepository {
    roster: RwLock<Option<Roster>>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn load(&self) -> Result<Roster, RosterError> {
        Ok(self.roster.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, roster: &Roster) -> Result<(), RosterError> {
        *self.roster.write().await = Some(roster.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), RosterError> {
        *self.roster.write().await = None;
        Ok(())
    }
}

#[derive(Serialize)]
struct RosterDocument<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    participants: &'a Roster,
}

/// Only the version marker, read before committing to a record schema.
#[derive(Deserialize)]
struct DocumentHeader {
    #[serde(default)]
    version: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct VersionedDocument {
    participants: Roster,
}

/// Returns the integer `version` of a versioned document. A bare
/// name-to-record mapping written before documents were versioned has none.
fn document_version(bytes: &[u8]) -> Result<Option<u64>, RosterError> {
    let header: DocumentHeader = serde_json::from_slice(bytes)?;
    Ok(header.version.as_ref().and_then(serde_json::Value::as_u64))
}

/// Stores the roster as a single JSON document on disk.
///
/// Saves go through a temporary sibling file that is renamed over the target,
/// so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileRosterRepository {
    path: PathBuf,
}

impl JsonFileRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "roster".to_string());
        self.path
            .with_file_name(format!("{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl RosterRepository for JsonFileRosterRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Roster, RosterError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No roster document yet, starting empty");
                return Ok(Roster::new());
            }
            Err(e) => return Err(e.into()),
        };

        let roster = match document_version(&bytes)? {
            Some(version) if version == u64::from(DOCUMENT_VERSION) => {
                serde_json::from_slice::<VersionedDocument>(&bytes)?.participants
            }
            Some(version) => {
                warn!(version, "Roster document has unsupported version");
                return Err(RosterError::UnsupportedVersion(version));
            }
            None => {
                debug!("Loaded unversioned roster document");
                serde_json::from_slice::<Roster>(&bytes)?
            }
        };

        debug!(participants = roster.len(), "Roster loaded");
        Ok(roster)
    }

    #[instrument(skip(self, roster), fields(path = %self.path.display(), participants = roster.len()))]
    async fn save(&self, roster: &Roster) -> Result<(), RosterError> {
        let document = RosterDocument {
            version: DOCUMENT_VERSION,
            saved_at: Utc::now(),
            participants: roster,
        };
        let bytes = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let written = async {
            let mut file = tokio::fs::File::create(&temp_path).await?;
            file.write_all(&bytes).await?;
            file.sync_all().await?;
            tokio::fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            warn!(error = %e, "Failed to write roster document");
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Roster saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn clear(&self) -> Result<(), RosterError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Roster document removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
