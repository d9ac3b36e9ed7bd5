//! Domain Events for GraphStore
//!
//! Events emitted by the graph store when the document changes. They follow
//! the observer pattern: the UI layer subscribes to data changes without
//! coupling to store internals, which keeps the store a pure data core.
//!
//! Events are emitted over tokio's broadcast channel, so any number of
//! subscribers (canvas renderer, autosave debouncer, diagnostics) can listen
//! independently.

/// Domain events emitted by [`crate::store::GraphStore`].
#[derive(Debug, Clone)]
pub enum GraphEvent {
    /// A child node was inserted under `parent_id`
    NodeAdded { id: String, parent_id: String },

    /// A root node was created in an empty graph
    RootAdded { id: String },

    /// A node's label was replaced
    LabelChanged { id: String, label: String },

    /// A node's color token was replaced
    ColorChanged { id: String, color: String },

    /// A node's expand toggle flipped; its descendants' visibility cascaded
    ExpandToggled { id: String, expanded: bool },

    /// A node and its descendant closure were removed, edges included.
    /// `ids` starts with the deleted node, descendants follow.
    NodesRemoved { ids: Vec<String> },

    /// A manual edge was created between two existing nodes
    EdgeConnected { source: String, target: String },
}

impl GraphEvent {
    /// String representation of the event type, for logging and diagnostics.
    pub fn event_type(&self) -> &str {
        match self {
            GraphEvent::NodeAdded { .. } => "node:added",
            GraphEvent::RootAdded { .. } => "node:root-added",
            GraphEvent::LabelChanged { .. } => "node:label-changed",
            GraphEvent::ColorChanged { .. } => "node:color-changed",
            GraphEvent::ExpandToggled { .. } => "node:expand-toggled",
            GraphEvent::NodesRemoved { .. } => "node:removed",
            GraphEvent::EdgeConnected { .. } => "edge:connected",
        }
    }
}
