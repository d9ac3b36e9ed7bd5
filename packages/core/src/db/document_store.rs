//! Document Store Trait

use crate::db::error::DatastoreError;
use crate::models::{MapSummary, MindMap};
use async_trait::async_trait;

/// Load/save boundary for mind-map documents.
///
/// Documents are identified by an opaque id. `load` returning `Ok(None)`
/// means "not found"; callers (the service layer) respond by seeding a
/// fresh document, so implementations should map recoverable corruption to
/// `Ok(None)` rather than an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load a document by id.
    async fn load(&self, map_id: &str) -> Result<Option<MindMap>, DatastoreError>;

    /// Insert or replace a document.
    async fn save(&self, map: &MindMap) -> Result<(), DatastoreError>;

    /// Summaries of all stored documents, in storage order.
    async fn list(&self) -> Result<Vec<MapSummary>, DatastoreError>;

    /// Remove a document. Returns whether it existed.
    async fn delete(&self, map_id: &str) -> Result<bool, DatastoreError>;
}
