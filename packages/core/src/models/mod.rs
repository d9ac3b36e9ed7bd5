//! Data Models
//!
//! This module contains the core data structures of a mind-map document:
//!
//! - `MapNode` - a labeled point on the canvas with position, color, and
//!   visibility state
//! - `MapEdge` - a directed parent→child relation between two nodes
//! - `MindMap` - a document: node list, edge list, title, and timestamps
//!
//! All structures serialize camelCase so documents written by the original
//! web client's local storage load unchanged.

mod document;
mod edge;
mod node;

pub use document::{MapSummary, MindMap, DEFAULT_MAP_TITLE};
pub use edge::MapEdge;
pub use node::{MapNode, Position, DEFAULT_NODE_COLOR, DEFAULT_ROOT_LABEL};
