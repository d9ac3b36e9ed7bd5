//! Edge Data Structures

use serde::{Deserialize, Serialize};

/// A directed parent→child relation between two nodes.
///
/// The id is derived from the ordered (source, target) pair, which makes the
/// "at most one edge per ordered pair" invariant visible in the id itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl MapEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e{}-{}", source, target),
            source,
            target,
        }
    }
}
