//! Graph Store - Structural Edit Operations
//!
//! This module provides the in-memory graph store for one open mind-map
//! document:
//!
//! - Insertion (child under parent, root into an empty graph)
//! - Label and color mutation
//! - Expand/collapse with visibility cascade over the descendant closure
//! - Cascade delete with edge cleanup
//! - Manual connection between existing nodes
//!
//! # Failure Semantics
//!
//! Every operation is a logged no-op on an unknown id. UI-driven editing is
//! best-effort: a stale id (race with a concurrent delete) must never crash
//! the session, so nothing here panics or returns an error.
//!
//! # Cycle Tolerance
//!
//! The data model nominally forbids cycles (a node has at most one incoming
//! edge), but manual connection can violate that. Descendant traversal keeps
//! a visited set, so an erroneous cycle terminates instead of recursing
//! forever.

use crate::models::{MapEdge, MapNode, MindMap, Position};
use crate::store::events::GraphEvent;
use std::collections::HashSet;
use tokio::sync::broadcast;
use tracing::warn;

/// Horizontal offset of a provisional child position from its parent.
pub const CHILD_X_OFFSET: f64 = 250.0;

/// Vertical step per existing sibling for a provisional child position.
pub const SIBLING_Y_STEP: f64 = 100.0;

/// Broadcast channel capacity for graph events.
///
/// 64 gives headroom for burst mutations (an AI idea batch adds up to five
/// nodes in one event-loop turn) while keeping memory overhead small.
/// Subscriber lag is acceptable; observers resync from the document.
const GRAPH_EVENT_CHANNEL_CAPACITY: usize = 64;

/// In-memory graph store for one open document.
///
/// Provisional positions assigned by [`GraphStore::add_node`] are
/// placeholders; [`crate::layout::tidy_up`] supersedes them on demand.
pub struct GraphStore {
    map: MindMap,
    events: broadcast::Sender<GraphEvent>,
}

impl GraphStore {
    pub fn new(map: MindMap) -> Self {
        let (events, _) = broadcast::channel(GRAPH_EVENT_CHANNEL_CAPACITY);
        Self { map, events }
    }

    /// Subscribe to graph events.
    ///
    /// Each subscriber gets an independent receiver; events emitted before
    /// subscription are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<GraphEvent> {
        self.events.subscribe()
    }

    /// The underlying document, for rendering and persistence.
    pub fn document(&self) -> &MindMap {
        &self.map
    }

    /// Consume the store, returning the document for persistence.
    pub fn into_document(self) -> MindMap {
        self.map
    }

    /// Replace the document title.
    pub fn set_title(&mut self, title: &str) {
        self.map.title = title.to_string();
    }

    pub(crate) fn touch(&mut self) {
        self.map.touch();
    }

    pub fn node(&self, id: &str) -> Option<&MapNode> {
        self.map.nodes.iter().find(|node| node.id == id)
    }

    /// Direct child ids of a node, in edge-insertion order.
    pub fn child_ids(&self, id: &str) -> Vec<String> {
        self.map
            .edges
            .iter()
            .filter(|edge| edge.source == id)
            .map(|edge| edge.target.clone())
            .collect()
    }

    /// Parent id of a node: source of its first incoming edge in insertion
    /// order. With manual connections a node can have several incoming
    /// edges; the first one wins.
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        self.map
            .edges
            .iter()
            .find(|edge| edge.target == id)
            .map(|edge| edge.source.as_str())
    }

    /// Id of the first node in insertion order (the layout root).
    pub fn first_node_id(&self) -> Option<String> {
        self.map.nodes.first().map(|node| node.id.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.map.nodes.is_empty()
    }

    /// Insert a new child node under `parent_id` and connect it.
    ///
    /// The child gets a provisional position offset from the parent: fixed
    /// horizontal offset, vertical offset proportional to the current child
    /// count. Returns the new node's id, or `None` if the parent is unknown.
    pub fn add_node(&mut self, parent_id: &str, label: &str, color: Option<&str>) -> Option<String> {
        let parent_position = match self.node(parent_id) {
            Some(parent) => parent.position,
            None => {
                warn!(parent_id, "add_node: unknown parent, ignoring");
                return None;
            }
        };

        let sibling_count = self.child_ids(parent_id).len();
        let position = Position::new(
            parent_position.x + CHILD_X_OFFSET,
            parent_position.y + sibling_count as f64 * SIBLING_Y_STEP,
        );

        let node = MapNode::new(label, color, position);
        let id = node.id.clone();
        self.map.nodes.push(node);
        self.map.edges.push(MapEdge::new(parent_id, &id));

        self.emit(GraphEvent::NodeAdded {
            id: id.clone(),
            parent_id: parent_id.to_string(),
        });
        Some(id)
    }

    /// Create a root node in an empty graph. No-op (returns `None`) when any
    /// node already exists.
    pub fn add_root(&mut self, label: &str) -> Option<String> {
        if !self.map.nodes.is_empty() {
            warn!("add_root: graph is not empty, ignoring");
            return None;
        }

        let root = MapNode::root(label);
        let id = root.id.clone();
        self.map.nodes.push(root);

        self.emit(GraphEvent::RootAdded { id: id.clone() });
        Some(id)
    }

    /// Replace a node's label in place. Alters no other field.
    pub fn edit_label(&mut self, node_id: &str, new_label: &str) {
        match self.node_mut(node_id) {
            Some(node) => {
                node.label = new_label.to_string();
                self.emit(GraphEvent::LabelChanged {
                    id: node_id.to_string(),
                    label: new_label.to_string(),
                });
            }
            None => warn!(node_id, "edit_label: unknown node, ignoring"),
        }
    }

    /// Replace a node's color token in place.
    pub fn change_color(&mut self, node_id: &str, color: &str) {
        match self.node_mut(node_id) {
            Some(node) => {
                node.color = color.to_string();
                self.emit(GraphEvent::ColorChanged {
                    id: node_id.to_string(),
                    color: color.to_string(),
                });
            }
            None => warn!(node_id, "change_color: unknown node, ignoring"),
        }
    }

    /// Flip a node's expand toggle and cascade visibility to its entire
    /// descendant closure.
    ///
    /// Every descendant - direct or indirect - gets `hidden = !expanded`,
    /// regardless of its own `expanded` flag. Re-expanding therefore unhides
    /// descendants unconditionally: a sub-branch that was collapsed before
    /// the ancestor collapsed comes back visible. That matches the original
    /// client and is pinned by a test; fixing it would mean remembering
    /// per-subtree visibility, which the document model does not carry.
    pub fn toggle_expand(&mut self, node_id: &str) {
        let expanded = match self.node_mut(node_id) {
            Some(node) => {
                node.expanded = !node.expanded;
                node.expanded
            }
            None => {
                warn!(node_id, "toggle_expand: unknown node, ignoring");
                return;
            }
        };

        let descendants: HashSet<String> = self.descendants(node_id).into_iter().collect();
        for node in &mut self.map.nodes {
            if descendants.contains(&node.id) {
                node.hidden = !expanded;
            }
        }

        self.emit(GraphEvent::ExpandToggled {
            id: node_id.to_string(),
            expanded,
        });
    }

    /// Delete a node and its entire descendant closure, removing every edge
    /// that touches the removed set.
    ///
    /// Returns the removed ids (the target node first) so the caller can
    /// clear any UI selection that pointed into the removed set - selection
    /// is external state, clearing it is the caller's contract obligation.
    pub fn delete_node(&mut self, node_id: &str) -> Vec<String> {
        if self.node(node_id).is_none() {
            warn!(node_id, "delete_node: unknown node, ignoring");
            return Vec::new();
        }

        let mut removed = vec![node_id.to_string()];
        removed.extend(self.descendants(node_id));

        {
            let removed_set: HashSet<&str> = removed.iter().map(String::as_str).collect();
            self.map
                .nodes
                .retain(|node| !removed_set.contains(node.id.as_str()));
            self.map.edges.retain(|edge| {
                !removed_set.contains(edge.source.as_str())
                    && !removed_set.contains(edge.target.as_str())
            });
        }

        self.emit(GraphEvent::NodesRemoved {
            ids: removed.clone(),
        });
        removed
    }

    /// Create a manual edge between two existing nodes.
    ///
    /// Rejects unknown endpoints, self-edges, and duplicate ordered pairs.
    /// Returns whether an edge was created.
    pub fn connect(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            warn!(source_id, "connect: self-edge rejected");
            return false;
        }
        if self.node(source_id).is_none() || self.node(target_id).is_none() {
            warn!(source_id, target_id, "connect: unknown endpoint, ignoring");
            return false;
        }
        if self
            .map
            .edges
            .iter()
            .any(|edge| edge.source == source_id && edge.target == target_id)
        {
            return false;
        }

        self.map.edges.push(MapEdge::new(source_id, target_id));
        self.emit(GraphEvent::EdgeConnected {
            source: source_id.to_string(),
            target: target_id.to_string(),
        });
        true
    }

    /// Descendant closure of a node: every node reachable over outgoing
    /// edges, transitively, excluding the node itself.
    ///
    /// Iterative depth-first traversal with a visited set; terminates on
    /// malformed edge sets containing cycles and never yields a node twice.
    pub fn descendants(&self, node_id: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(node_id);

        let mut closure = Vec::new();
        let mut stack = vec![node_id];

        while let Some(current) = stack.pop() {
            for edge in &self.map.edges {
                if edge.source == current && visited.insert(edge.target.as_str()) {
                    closure.push(edge.target.clone());
                    stack.push(edge.target.as_str());
                }
            }
        }

        closure
    }

    pub(crate) fn set_position(&mut self, id: &str, position: Position) {
        if let Some(node) = self.map.nodes.iter_mut().find(|node| node.id == id) {
            node.position = position;
        }
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut MapNode> {
        self.map.nodes.iter_mut().find(|node| node.id == id)
    }

    fn emit(&self, event: GraphEvent) {
        tracing::debug!(event = event.event_type(), "graph event");
        // No subscribers is fine; the store works standalone.
        let _ = self.events.send(event);
    }
}
