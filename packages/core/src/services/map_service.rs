//! Map Service - Document Lifecycle and Idea Orchestration
//!
//! This module provides the service layer over the graph store:
//!
//! - Document lifecycle (open, save, rename, list, delete) through the
//!   [`DocumentStore`] persistence trait
//! - AI idea batches: per-node in-flight tracking, parent-existence checks
//!   before each insertion, and a fixed fallback set when the collaborator
//!   fails
//!
//! # Recovery Semantics
//!
//! A missing document is not an error: opening an unknown id seeds a fresh
//! document with a single "Central Idea" root and persists it. A document
//! that fails to load (corrupt storage) is treated the same way. The worst
//! case anywhere in this service is placeholder data, never a dead session.

use crate::db::DocumentStore;
use crate::models::{MapSummary, MindMap};
use crate::services::error::MapServiceError;
use crate::store::GraphStore;
use ideaspark_idea_engine::{
    GeneratorRegistry, IdeaEngineConfig, IdeaEngineError, IdeaGenerator,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{info, warn};

/// Placeholder labels added when the idea collaborator fails or returns
/// nothing. Always exactly these three, in this order.
pub const FALLBACK_IDEAS: [&str; 3] = [
    "Related concept 1",
    "Related concept 2",
    "Related concept 3",
];

/// How an idea batch was resolved.
///
/// `Fallback` is not an error: the caller surfaces it as a non-blocking
/// notice ("using placeholder ideas"), never an error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaOutcome {
    /// Collaborator ideas were applied; ids of the added children
    Generated { added: Vec<String> },

    /// The fixed fallback set was applied; ids of the added children
    Fallback { added: Vec<String> },

    /// The target node no longer exists; nothing was added
    Skipped,
}

impl IdeaOutcome {
    /// Ids of the children this batch added.
    pub fn added(&self) -> &[String] {
        match self {
            IdeaOutcome::Generated { added } | IdeaOutcome::Fallback { added } => added,
            IdeaOutcome::Skipped => &[],
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, IdeaOutcome::Fallback { .. })
    }
}

/// Service layer for mind-map documents.
pub struct MapService {
    store: Arc<dyn DocumentStore>,
    generator: Arc<dyn IdeaGenerator>,
    /// Node ids with an idea request in flight. Requests for different
    /// nodes are independent; a second request for the same node is refused
    /// until the first resolves.
    pending: Mutex<HashSet<String>>,
    /// Deadline for one collaborator call. A hung backend must resolve to
    /// the fallback path, not block the node forever.
    request_timeout: Duration,
}

impl MapService {
    pub fn new(store: Arc<dyn DocumentStore>, generator: Arc<dyn IdeaGenerator>) -> Self {
        Self {
            store,
            generator,
            pending: Mutex::new(HashSet::new()),
            request_timeout: Duration::from_millis(IdeaEngineConfig::default().request_timeout_ms),
        }
    }

    /// Override the collaborator deadline.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Service wired to the local keyword-template generator, for offline
    /// use and tests.
    pub fn with_local_ideas(store: Arc<dyn DocumentStore>) -> Result<Self, MapServiceError> {
        let registry = GeneratorRegistry::with_local_default(IdeaEngineConfig::default());
        let generator = registry.active().map_err(IdeaEngineError::from)?.generator;
        Ok(Self::new(store, generator))
    }

    /// Open a document by id, seeding a fresh one when it is missing or
    /// unreadable.
    pub async fn open(&self, map_id: &str) -> Result<GraphStore, MapServiceError> {
        let map = match self.store.load(map_id).await {
            Ok(Some(map)) => {
                info!(map_id, nodes = map.nodes.len(), "opened document");
                map
            }
            Ok(None) => {
                info!(map_id, "document not found, seeding a fresh one");
                self.seed(map_id).await?
            }
            Err(err) => {
                // Read failure is treated as "not found"; the worst case is
                // a fresh document, not a dead session.
                warn!(map_id, %err, "failed to load document, seeding a fresh one");
                self.seed(map_id).await?
            }
        };

        Ok(GraphStore::new(map))
    }

    /// Persist the open document, bumping its modification timestamp.
    pub async fn save(&self, graph: &mut GraphStore) -> Result<(), MapServiceError> {
        graph.touch();
        self.store.save(graph.document()).await?;
        Ok(())
    }

    /// Retitle and persist the open document.
    pub async fn rename(
        &self,
        graph: &mut GraphStore,
        title: &str,
    ) -> Result<(), MapServiceError> {
        graph.set_title(title);
        self.save(graph).await
    }

    /// Document summaries for the sidebar, in storage order.
    pub async fn list(&self) -> Result<Vec<MapSummary>, MapServiceError> {
        Ok(self.store.list().await?)
    }

    /// Delete a stored document. Returns whether it existed.
    pub async fn delete(&self, map_id: &str) -> Result<bool, MapServiceError> {
        let existed = self.store.delete(map_id).await?;
        if existed {
            info!(map_id, "deleted document");
        }
        Ok(existed)
    }

    /// Whether an idea request for this node is currently in flight.
    ///
    /// The UI disables the triggering action while this is true, which is
    /// the duplicate-request guard the store itself does not enforce.
    pub async fn idea_request_pending(&self, node_id: &str) -> bool {
        self.pending.lock().await.contains(node_id)
    }

    /// Ask the idea collaborator for child suggestions and apply them as a
    /// batch of new child nodes, in the order received.
    ///
    /// If the collaborator fails, times out, or returns nothing, exactly
    /// the three [`FALLBACK_IDEAS`] are applied instead and the outcome is
    /// [`IdeaOutcome::Fallback`]. Parent existence is re-checked before
    /// each insertion so a racing delete cannot receive a partial batch.
    ///
    /// # Errors
    ///
    /// [`MapServiceError::IdeaRequestPending`] when a request for the same
    /// node is already in flight.
    pub async fn generate_ideas(
        &self,
        graph: &mut GraphStore,
        node_id: &str,
    ) -> Result<IdeaOutcome, MapServiceError> {
        let (label, parent_label) = match graph.node(node_id) {
            Some(node) => {
                let parent_label = graph
                    .parent_id(node_id)
                    .and_then(|parent_id| graph.node(parent_id))
                    .map(|parent| parent.label.clone());
                (node.label.clone(), parent_label)
            }
            None => {
                warn!(node_id, "generate_ideas: unknown node, skipping");
                return Ok(IdeaOutcome::Skipped);
            }
        };

        {
            let mut pending = self.pending.lock().await;
            if !pending.insert(node_id.to_string()) {
                return Err(MapServiceError::idea_request_pending(node_id));
            }
        }

        let suggestions = match timeout(
            self.request_timeout,
            self.generator.suggest(&label, parent_label.as_deref()),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(IdeaEngineError::Timeout(self.request_timeout.as_millis() as u64)),
        };

        let (ideas, used_fallback) = match suggestions {
            Ok(ideas) if !ideas.is_empty() => (ideas, false),
            Ok(_) => {
                warn!(node_id, "idea collaborator returned nothing, using fallback");
                (fallback_ideas(), true)
            }
            Err(err) => {
                warn!(node_id, %err, "idea collaborator failed, using fallback");
                (fallback_ideas(), true)
            }
        };

        let mut added = Vec::with_capacity(ideas.len());
        for idea in &ideas {
            // Re-check per insertion: a delete in the same event-loop turn
            // must not get a partial batch attached to a removed parent.
            if graph.node(node_id).is_none() {
                warn!(node_id, "node removed while ideas were pending, dropping batch");
                break;
            }
            if let Some(child_id) = graph.add_node(node_id, idea, None) {
                added.push(child_id);
            }
        }

        self.pending.lock().await.remove(node_id);

        info!(
            node_id,
            count = added.len(),
            fallback = used_fallback,
            "applied idea batch"
        );

        if used_fallback {
            Ok(IdeaOutcome::Fallback { added })
        } else {
            Ok(IdeaOutcome::Generated { added })
        }
    }

    async fn seed(&self, map_id: &str) -> Result<MindMap, MapServiceError> {
        let map = MindMap::untitled(map_id);
        self.store.save(&map).await?;
        Ok(map)
    }
}

fn fallback_ideas() -> Vec<String> {
    FALLBACK_IDEAS.iter().map(|idea| idea.to_string()).collect()
}
