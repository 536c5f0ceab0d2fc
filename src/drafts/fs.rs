//! Filesystem draft store
//!
//! One JSON file per draft id under the platform data directory.

use crate::drafts::DraftStore;
use crate::error::{Error, Result};
use crate::types::{Draft, DraftRecord};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Draft store backed by a directory of JSON files
pub struct FsDraftStore {
    dir: PathBuf,
}

impl FsDraftStore {
    /// Create a store rooted at the platform data directory
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("no data directory on this platform".to_string()))?
            .join("quill")
            .join("drafts");
        Ok(Self::open(dir))
    }

    /// Create a store rooted at an explicit directory
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        // Draft ids become file names; reject anything that could escape
        // the store directory.
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(Error::DraftStore(format!("invalid draft id `{id}`")));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    async fn read_record(path: &Path) -> Result<DraftRecord> {
        let raw = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::DraftStore(format!("corrupt draft {}: {e}", path.display())))
    }
}

#[async_trait]
impl DraftStore for FsDraftStore {
    async fn save(&self, draft: &Draft) -> Result<DraftRecord> {
        let path = self.path_for(&draft.id)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let record = DraftRecord {
            draft: draft.clone(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(&path, raw).await?;

        debug!(id = draft.id, path = %path.display(), "saved draft");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(id, "deleted draft");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(id, "draft already absent");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn load(&self, id: &str) -> Result<DraftRecord> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(Error::DraftNotFound(id.to_string()));
        }
        Self::read_record(&path).await
    }

    async fn list(&self) -> Result<Vec<DraftRecord>> {
        let mut records = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                records.push(Self::read_record(&path).await?);
            }
        }

        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(records)
    }
}
