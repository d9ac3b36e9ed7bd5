//! In-Memory Graph Store
//!
//! The store owns a [`crate::models::MindMap`] and maintains node/edge
//! consistency under structural edits: insertion, label and color mutation,
//! cascade delete, expand/collapse propagation, and manual connection.
//!
//! Mutations emit [`GraphEvent`]s over a broadcast channel so UI layers can
//! observe the store without the store holding UI callbacks.

pub mod events;
mod graph;

pub use events::GraphEvent;
pub use graph::{GraphStore, CHILD_X_OFFSET, SIBLING_Y_STEP};
