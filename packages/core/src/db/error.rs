//! Persistence Layer Error Types

use thiserror::Error;

/// Errors from the document persistence layer.
///
/// A corrupt storage file is deliberately NOT an error variant: stores
/// treat unparseable content as "no documents" (logged), because recovery
/// by re-seeding beats refusing to start.
#[derive(Error, Debug)]
pub enum DatastoreError {
    /// Filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No usable storage location (e.g. home directory unresolvable)
    #[error("Storage path unavailable: {0}")]
    PathUnavailable(String),
}
