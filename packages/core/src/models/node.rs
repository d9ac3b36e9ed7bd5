//! Node Data Structures
//!
//! Defines `MapNode`, the single node type of a mind map, and its canvas
//! `Position`.
//!
//! # ID Generation Strategy
//!
//! Node ids must be unique across the lifetime of a document, including ids
//! of nodes deleted long ago, so ids are random UUID v4 strings. The one
//! exception is the seeded root of a fresh document, which uses the fixed id
//! `"1"` for compatibility with documents created by the original client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color token assigned to nodes created without an explicit color.
pub const DEFAULT_NODE_COLOR: &str = "#3b82f6";

/// Label given to the seeded root node of a fresh document.
pub const DEFAULT_ROOT_LABEL: &str = "Central Idea";

fn default_expanded() -> bool {
    true
}

/// Canvas coordinates in UI units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A labeled point in the mind map.
///
/// `expanded` is the node's own collapse toggle; `hidden` is derived state
/// imposed by a collapsed ancestor. The two are independent: a node can be
/// expanded yet hidden because a grandparent collapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapNode {
    /// Unique identifier (UUID v4; `"1"` for a seeded root)
    pub id: String,

    /// Display text of the node
    pub label: String,

    /// Color token (hex string, e.g. "#3b82f6")
    pub color: String,

    /// Whether this node's own subtree is expanded
    #[serde(default = "default_expanded")]
    pub expanded: bool,

    /// Canvas position
    pub position: Position,

    /// Whether the node is hidden by a collapsed ancestor
    #[serde(default)]
    pub hidden: bool,
}

impl MapNode {
    /// Create a new node with an auto-generated UUID.
    pub fn new(label: impl Into<String>, color: Option<&str>, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            color: color.unwrap_or(DEFAULT_NODE_COLOR).to_string(),
            expanded: true,
            position,
            hidden: false,
        }
    }

    /// Create a root node: fixed id `"1"`, default color, canvas origin.
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            label: label.into(),
            color: DEFAULT_NODE_COLOR.to_string(),
            expanded: true,
            position: Position::default(),
            hidden: false,
        }
    }

    /// The seeded root of a fresh document.
    pub fn seed_root() -> Self {
        Self::root(DEFAULT_ROOT_LABEL)
    }
}
