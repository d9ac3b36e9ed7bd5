//! Business Services
//!
//! This module contains the service layer of the mind mapper:
//!
//! - `MapService` - document lifecycle (open, save, rename, list, delete)
//!   and AI idea-batch orchestration
//!
//! Services coordinate between the persistence layer, the in-memory graph
//! store, and the idea-generation collaborator, implementing the
//! best-effort editing contract the UI relies on.

pub mod error;
pub mod map_service;

pub use error::MapServiceError;
pub use map_service::{IdeaOutcome, MapService, FALLBACK_IDEAS};
