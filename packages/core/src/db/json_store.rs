//! JSON File Store
//!
//! Stores the full document list in one JSON file, mirroring the storage
//! shape of the original client (a single local-storage key holding an
//! array of maps). Adequate for local-only, single-user persistence; the
//! [`DocumentStore`] trait is the seam for anything heavier.

use crate::db::document_store::DocumentStore;
use crate::db::error::DatastoreError;
use crate::models::{MapSummary, MindMap};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

/// File-backed document store.
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the backing file.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at the centralized data directory: `~/.ideaspark/maps.json`.
    pub fn at_default_location() -> Result<Self, DatastoreError> {
        let home = dirs::home_dir().ok_or_else(|| {
            DatastoreError::PathUnavailable("cannot determine home directory".to_string())
        })?;
        Ok(Self::new(home.join(".ideaspark").join("maps.json")))
    }

    /// Read the full document list. A missing file is an empty list; an
    /// unparseable file is logged and treated as empty, so a corrupt store
    /// recovers by re-seeding instead of wedging the application.
    async fn read_all(&self) -> Result<Vec<MindMap>, DatastoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(maps) => Ok(maps),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "storage file unparseable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, maps: &[MindMap]) -> Result<(), DatastoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(maps)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, map_id: &str) -> Result<Option<MindMap>, DatastoreError> {
        let maps = self.read_all().await?;
        Ok(maps.into_iter().find(|map| map.id == map_id))
    }

    async fn save(&self, map: &MindMap) -> Result<(), DatastoreError> {
        let _guard = self.write_lock.lock().await;
        let mut maps = self.read_all().await?;

        match maps.iter_mut().find(|existing| existing.id == map.id) {
            Some(existing) => *existing = map.clone(),
            None => maps.push(map.clone()),
        }

        self.write_all(&maps).await
    }

    async fn list(&self) -> Result<Vec<MapSummary>, DatastoreError> {
        let maps = self.read_all().await?;
        Ok(maps.iter().map(MindMap::summary).collect())
    }

    async fn delete(&self, map_id: &str) -> Result<bool, DatastoreError> {
        let _guard = self.write_lock.lock().await;
        let mut maps = self.read_all().await?;
        let before = maps.len();
        maps.retain(|map| map.id != map_id);

        if maps.len() == before {
            return Ok(false);
        }

        self.write_all(&maps).await?;
        Ok(true)
    }
}
