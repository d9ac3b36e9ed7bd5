//! IdeaSpark Core Business Logic Layer
//!
//! This crate provides the in-memory mind-map graph, the deterministic tree
//! layout engine, and the document services for the IdeaSpark mind mapper.
//!
//! # Architecture
//!
//! - **Flat graph**: nodes and edges live in insertion-ordered lists with
//!   id-based lookup; parent/child relations are derived by filtering the
//!   edge set, never stored as direct references
//! - **Pure data core**: structural mutations emit domain events over a
//!   broadcast channel; UI code observes and drives the store through
//!   explicit commands instead of per-node callbacks
//! - **Best-effort editing**: operations on unknown ids are logged no-ops,
//!   so a stale id from a racing delete never crashes the session
//! - **Local-only persistence**: documents are saved as a single JSON file
//!   behind the [`db::DocumentStore`] trait
//!
//! # Modules
//!
//! - [`models`] - Data structures (MapNode, MapEdge, MindMap)
//! - [`store`] - In-memory graph store with cascade semantics
//! - [`layout`] - "Tidy up" tree layout engine
//! - [`services`] - Document service orchestrating persistence and AI ideas
//! - [`db`] - Document persistence layer

pub mod db;
pub mod layout;
pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use store::*;
