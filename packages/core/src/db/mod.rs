//! Document Persistence Layer
//!
//! Local-only persistence for mind-map documents behind the
//! [`DocumentStore`] trait. The shipped implementation is
//! [`JsonFileStore`], a single JSON file holding the full document list -
//! the same shape the original client kept in browser local storage.
//!
//! The trait exists so a different engine can be swapped in without
//! touching the service layer; nothing in this crate assumes more than
//! load/save/list/delete.

mod document_store;
mod error;
mod json_store;

pub use document_store::DocumentStore;
pub use error::DatastoreError;
pub use json_store::JsonFileStore;
