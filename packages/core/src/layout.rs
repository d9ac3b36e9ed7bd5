//! "Tidy Up" Tree Layout Engine
//!
//! On-demand, deterministic tree layout for a mind-map graph. The root is
//! the first node in document insertion order; children are enumerated in
//! edge-insertion order; subtrees stack vertically to the right of their
//! parent.
//!
//! The traversal runs on an explicit frame stack rather than native
//! recursion, so worst-case depth is bounded by heap, not the thread stack.
//! A visited set guards against malformed edge sets: a node reached twice
//! contributes a zero-sized footprint and is not re-entered, so cycles
//! terminate.
//!
//! Layout mutates node positions only. Visibility, expansion, labels,
//! colors, and the edge set are untouched.

use crate::models::Position;
use crate::store::GraphStore;
use std::collections::HashSet;
use tracing::debug;

/// Spacing and sizing parameters for [`tidy_up`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Position assigned to the root node
    pub origin: Position,

    /// Horizontal distance between a parent and its children
    pub horizontal_spacing: f64,

    /// Vertical gap between adjacent sibling subtrees
    pub vertical_spacing: f64,

    /// Footprint width of a single node
    pub node_width: f64,

    /// Footprint height of a single node
    pub node_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Position::new(50.0, 50.0),
            horizontal_spacing: 250.0,
            vertical_spacing: 100.0,
            node_width: 200.0,
            node_height: 50.0,
        }
    }
}

/// Bounding box a placed subtree reports to its parent.
#[derive(Debug, Clone, Copy)]
struct Footprint {
    width: f64,
    height: f64,
}

/// One node being placed: its assigned position, its children in edge
/// order, and the running extent of the sibling subtrees placed so far.
struct Frame {
    x: f64,
    y: f64,
    children: Vec<String>,
    next_child: usize,
    /// Accumulated height of placed child subtrees, each plus one
    /// vertical_spacing (including a trailing one).
    extent: f64,
    max_child_width: f64,
}

impl Frame {
    fn footprint(&self, config: &LayoutConfig) -> Footprint {
        if self.children.is_empty() {
            return Footprint {
                width: config.node_width,
                height: config.node_height,
            };
        }
        Footprint {
            width: config.node_width + self.max_child_width,
            height: (self.extent - config.vertical_spacing).max(config.node_height),
        }
    }
}

/// Recompute positions for the whole graph, rooted at the first node in
/// insertion order. No-op on an empty graph.
///
/// Deterministic: the traversal order depends only on node and edge
/// insertion order, so repeated runs on an unchanged graph assign identical
/// positions.
pub fn tidy_up(store: &mut GraphStore, config: &LayoutConfig) {
    let Some(root_id) = store.first_node_id() else {
        debug!("tidy_up: empty graph");
        return;
    };

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root_id.clone());
    store.set_position(&root_id, config.origin);

    let mut frames = vec![Frame {
        x: config.origin.x,
        y: config.origin.y,
        children: store.child_ids(&root_id),
        next_child: 0,
        extent: 0.0,
        max_child_width: 0.0,
    }];

    while !frames.is_empty() {
        let top = frames.len() - 1;

        // Advance past children that were already placed via another path;
        // each still consumes one vertical_spacing of extent, exactly as a
        // zero-height subtree would.
        let pending = loop {
            let frame = &mut frames[top];
            match frame.children.get(frame.next_child).cloned() {
                None => break None,
                Some(child_id) => {
                    frame.next_child += 1;
                    if visited.contains(&child_id) {
                        frame.extent += config.vertical_spacing;
                    } else {
                        break Some(child_id);
                    }
                }
            }
        };

        match pending {
            Some(child_id) => {
                let (child_x, child_y) = {
                    let frame = &frames[top];
                    (frame.x + config.horizontal_spacing, frame.y + frame.extent)
                };

                visited.insert(child_id.clone());
                store.set_position(&child_id, Position::new(child_x, child_y));

                frames.push(Frame {
                    x: child_x,
                    y: child_y,
                    children: store.child_ids(&child_id),
                    next_child: 0,
                    extent: 0.0,
                    max_child_width: 0.0,
                });
            }
            None => {
                if let Some(frame) = frames.pop() {
                    let footprint = frame.footprint(config);
                    if let Some(parent) = frames.last_mut() {
                        parent.extent += footprint.height + config.vertical_spacing;
                        parent.max_child_width = parent.max_child_width.max(footprint.width);
                    }
                }
            }
        }
    }

    debug!(nodes = visited.len(), "tidy_up: layout applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MindMap;

    fn store_with_root() -> (GraphStore, String) {
        let store = GraphStore::new(MindMap::untitled("map-1"));
        let root = store.first_node_id().unwrap();
        (store, root)
    }

    fn position(store: &GraphStore, id: &str) -> Position {
        store.node(id).unwrap().position
    }

    /// After deleting A, the graph is R with single child B;
    /// tidy with 250/100 puts R at (50,50) and B at (300,50).
    #[test]
    fn test_single_child_after_delete() {
        let (mut store, r) = store_with_root();
        let a = store.add_node(&r, "A", None).unwrap();
        let _b = store.add_node(&r, "B", None).unwrap();
        let _c = store.add_node(&a, "C", None).unwrap();
        store.delete_node(&a);

        tidy_up(&mut store, &LayoutConfig::default());

        let b = &store.document().nodes[1];
        assert_eq!(position(&store, &r), Position::new(50.0, 50.0));
        assert_eq!(b.position, Position::new(300.0, 50.0));
    }

    #[test]
    fn test_sibling_subtrees_stack_vertically() {
        let (mut store, r) = store_with_root();
        let a = store.add_node(&r, "A", None).unwrap();
        let b = store.add_node(&r, "B", None).unwrap();
        let c = store.add_node(&a, "C", None).unwrap();
        let d = store.add_node(&a, "D", None).unwrap();

        tidy_up(&mut store, &LayoutConfig::default());

        assert_eq!(position(&store, &r), Position::new(50.0, 50.0));
        assert_eq!(position(&store, &a), Position::new(300.0, 50.0));
        assert_eq!(position(&store, &c), Position::new(550.0, 50.0));
        // C is a leaf (height 50), so D starts 150 below it.
        assert_eq!(position(&store, &d), Position::new(550.0, 200.0));
        // A's subtree spans C and D: height 200, so B starts 300 below A.
        assert_eq!(position(&store, &b), Position::new(300.0, 350.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let (mut store, r) = store_with_root();
        let a = store.add_node(&r, "A", None).unwrap();
        store.add_node(&r, "B", None).unwrap();
        store.add_node(&a, "C", None).unwrap();

        let config = LayoutConfig::default();
        tidy_up(&mut store, &config);
        let first: Vec<Position> = store.document().nodes.iter().map(|n| n.position).collect();

        tidy_up(&mut store, &config);
        let second: Vec<Position> = store.document().nodes.iter().map(|n| n.position).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_positions_only() {
        let (mut store, r) = store_with_root();
        let a = store.add_node(&r, "A", Some("#ef4444")).unwrap();
        store.toggle_expand(&r);
        let edges_before = store.document().edges.clone();

        tidy_up(&mut store, &LayoutConfig::default());

        let node = store.node(&a).unwrap();
        assert!(node.hidden, "layout must not unhide");
        assert_eq!(node.color, "#ef4444");
        assert!(!store.node(&r).unwrap().expanded);
        assert_eq!(store.document().edges, edges_before);
    }

    #[test]
    fn test_cycle_terminates_with_single_visit() {
        let (mut store, r) = store_with_root();
        let a = store.add_node(&r, "A", None).unwrap();
        let b = store.add_node(&a, "B", None).unwrap();
        // Erroneous back-edge B→A.
        store.connect(&b, &a);

        tidy_up(&mut store, &LayoutConfig::default());

        // A placed once, under R, not re-placed under B.
        assert_eq!(position(&store, &a), Position::new(300.0, 50.0));
        assert_eq!(position(&store, &b), Position::new(550.0, 50.0));
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut store = GraphStore::new(MindMap {
            nodes: Vec::new(),
            edges: Vec::new(),
            ..MindMap::untitled("map-1")
        });
        tidy_up(&mut store, &LayoutConfig::default());
        assert!(store.is_empty());
    }
}
