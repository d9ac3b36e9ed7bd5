//! Service Layer Error Types

use crate::db::DatastoreError;
use ideaspark_idea_engine::IdeaEngineError;
use thiserror::Error;

/// Errors surfaced by [`crate::services::MapService`].
///
/// Graph-store edits on unknown ids are not errors (they are logged no-ops
/// per the best-effort editing contract); only persistence failures and
/// duplicate idea requests reach this type.
#[derive(Error, Debug)]
pub enum MapServiceError {
    /// Datastore operation failed
    #[error("Datastore operation failed: {0}")]
    Datastore(#[from] DatastoreError),

    /// Idea engine failed outside the fallback path
    #[error("Idea engine error: {0}")]
    IdeaEngine(#[from] IdeaEngineError),

    /// An idea request for this node is already in flight
    #[error("Idea generation already pending for node {node_id}")]
    IdeaRequestPending { node_id: String },
}

impl MapServiceError {
    /// Create an idea-request-pending error
    pub fn idea_request_pending(node_id: impl Into<String>) -> Self {
        Self::IdeaRequestPending {
            node_id: node_id.into(),
        }
    }
}
