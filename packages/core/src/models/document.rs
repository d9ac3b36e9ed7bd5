//! Mind Map Document
//!
//! A `MindMap` is the unit of persistence: one document per map, holding the
//! full node and edge sets plus title and timestamps. Node order in `nodes`
//! is insertion order and is semantically meaningful - the first node is the
//! layout root. Edge order likewise fixes child enumeration order.

use crate::models::{MapEdge, MapNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to documents created without one.
pub const DEFAULT_MAP_TITLE: &str = "Untitled Mind Map";

/// A mind-map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    pub id: String,
    pub title: String,
    pub nodes: Vec<MapNode>,
    pub edges: Vec<MapEdge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MindMap {
    /// Create a fresh document seeded with a single root node.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            nodes: vec![MapNode::seed_root()],
            edges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Fresh document with the default title.
    pub fn untitled(id: impl Into<String>) -> Self {
        Self::new(id, DEFAULT_MAP_TITLE)
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> MapSummary {
        MapSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Lightweight document listing for the sidebar collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_ROOT_LABEL;

    #[test]
    fn test_fresh_document_is_seeded() {
        let map = MindMap::untitled("map-1");
        assert_eq!(map.title, DEFAULT_MAP_TITLE);
        assert_eq!(map.nodes.len(), 1);
        assert_eq!(map.nodes[0].label, DEFAULT_ROOT_LABEL);
        assert!(map.edges.is_empty());
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut map = MindMap::untitled("map-1");
        let before = map.updated_at;
        map.touch();
        assert!(map.updated_at >= before);
    }
}
