//! Integration Tests for MapService
//!
//! Exercises the document lifecycle against a real JSON file store in a
//! temp directory, plus idea-batch orchestration with scripted generators.

use ideaspark_core::db::{DocumentStore, JsonFileStore};
use ideaspark_core::layout::{tidy_up, LayoutConfig};
use ideaspark_core::models::{Position, DEFAULT_ROOT_LABEL};
use ideaspark_core::services::{IdeaOutcome, MapService, MapServiceError, FALLBACK_IDEAS};
use ideaspark_idea_engine::{IdeaEngineError, IdeaGenerator};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

fn file_store(dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(dir.path().join("maps.json")))
}

fn local_service(dir: &TempDir) -> MapService {
    MapService::with_local_ideas(file_store(dir)).unwrap()
}

/// Generator that always fails, for the fallback path.
struct BrokenGenerator;

#[async_trait::async_trait]
impl IdeaGenerator for BrokenGenerator {
    async fn suggest(
        &self,
        _node_label: &str,
        _parent_label: Option<&str>,
    ) -> Result<Vec<String>, IdeaEngineError> {
        Err(IdeaEngineError::RequestFailed("backend unreachable".to_string()))
    }
}

/// Generator that never resolves.
struct StalledGenerator;

#[async_trait::async_trait]
impl IdeaGenerator for StalledGenerator {
    async fn suggest(
        &self,
        _node_label: &str,
        _parent_label: Option<&str>,
    ) -> Result<Vec<String>, IdeaEngineError> {
        std::future::pending().await
    }
}

/// Generator that holds its response until released.
struct GatedGenerator {
    release: Arc<Notify>,
}

#[async_trait::async_trait]
impl IdeaGenerator for GatedGenerator {
    async fn suggest(
        &self,
        node_label: &str,
        _parent_label: Option<&str>,
    ) -> Result<Vec<String>, IdeaEngineError> {
        self.release.notified().await;
        Ok(vec![format!("{node_label} follow-up")])
    }
}

/// Generator that returns nothing usable.
struct SilentGenerator;

#[async_trait::async_trait]
impl IdeaGenerator for SilentGenerator {
    async fn suggest(
        &self,
        _node_label: &str,
        _parent_label: Option<&str>,
    ) -> Result<Vec<String>, IdeaEngineError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_open_missing_seeds_and_persists() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    let service = MapService::with_local_ideas(store.clone()).unwrap();

    let graph = service.open("map-1").await.unwrap();
    assert_eq!(graph.document().nodes.len(), 1);
    assert_eq!(graph.document().nodes[0].label, DEFAULT_ROOT_LABEL);

    // The seeded document was written through, not just held in memory.
    let persisted = store.load("map-1").await.unwrap().unwrap();
    assert_eq!(persisted.nodes[0].label, DEFAULT_ROOT_LABEL);
}

#[tokio::test]
async fn test_open_corrupt_storage_seeds_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("maps.json"), "not a json document").unwrap();

    let service = local_service(&dir);
    let graph = service.open("map-1").await.unwrap();
    assert_eq!(graph.document().nodes[0].label, DEFAULT_ROOT_LABEL);
}

#[tokio::test]
async fn test_save_rename_list_roundtrip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let service = local_service(&dir);

    let mut graph = service.open("map-1").await?;
    let root = graph.first_node_id().unwrap();
    graph.add_node(&root, "First idea", None).unwrap();

    service.rename(&mut graph, "Q3 Planning").await?;

    let summaries = service.list().await?;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Q3 Planning");

    let reopened = service.open("map-1").await?;
    assert_eq!(reopened.document().nodes.len(), 2);
    assert_eq!(reopened.document().title, "Q3 Planning");

    assert!(service.delete("map-1").await?);
    assert!(service.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_generated_ideas_become_children() {
    let dir = TempDir::new().unwrap();
    let service = local_service(&dir);

    let mut graph = service.open("map-1").await.unwrap();
    let root = graph.first_node_id().unwrap();

    let outcome = service.generate_ideas(&mut graph, &root).await.unwrap();
    assert!(!outcome.used_fallback());
    assert!(!outcome.added().is_empty());

    let children = graph.child_ids(&root);
    assert_eq!(children, outcome.added());

    // In-flight flag cleared: a second request goes through.
    assert!(!service.idea_request_pending(&root).await);
    let again = service.generate_ideas(&mut graph, &root).await.unwrap();
    assert!(!again.added().is_empty());
}

#[tokio::test]
async fn test_failing_collaborator_adds_exactly_three_fallbacks() {
    let dir = TempDir::new().unwrap();
    let service = MapService::new(file_store(&dir), Arc::new(BrokenGenerator));

    let mut graph = service.open("map-1").await.unwrap();
    let root = graph.first_node_id().unwrap();

    let outcome = service.generate_ideas(&mut graph, &root).await.unwrap();
    assert!(outcome.used_fallback());
    assert_eq!(outcome.added().len(), 3);

    let labels: Vec<String> = graph
        .child_ids(&root)
        .iter()
        .map(|id| graph.node(id).unwrap().label.clone())
        .collect();
    assert_eq!(labels, FALLBACK_IDEAS);

    // All three labels are distinct.
    let distinct: HashSet<&String> = labels.iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[tokio::test]
async fn test_empty_collaborator_response_falls_back() {
    let dir = TempDir::new().unwrap();
    let service = MapService::new(file_store(&dir), Arc::new(SilentGenerator));

    let mut graph = service.open("map-1").await.unwrap();
    let root = graph.first_node_id().unwrap();

    let outcome = service.generate_ideas(&mut graph, &root).await.unwrap();
    assert!(outcome.used_fallback());
    assert_eq!(outcome.added().len(), 3);
}

#[tokio::test]
async fn test_hung_collaborator_times_out_to_fallback() {
    let dir = TempDir::new().unwrap();
    let service = MapService::new(file_store(&dir), Arc::new(StalledGenerator))
        .with_request_timeout(Duration::from_millis(50));

    let mut graph = service.open("map-1").await.unwrap();
    let root = graph.first_node_id().unwrap();

    let outcome = service.generate_ideas(&mut graph, &root).await.unwrap();
    assert!(outcome.used_fallback());
    assert_eq!(outcome.added().len(), 3);

    // The deadline resolved the request, so the in-flight flag is released.
    assert!(!service.idea_request_pending(&root).await);
}

#[tokio::test]
async fn test_second_request_for_same_node_is_refused() {
    let dir = TempDir::new().unwrap();
    let release = Arc::new(Notify::new());
    let service = Arc::new(MapService::new(
        file_store(&dir),
        Arc::new(GatedGenerator {
            release: release.clone(),
        }),
    ));

    let mut first_graph = service.open("map-1").await.unwrap();
    let mut second_graph = service.open("map-1").await.unwrap();
    let root = first_graph.first_node_id().unwrap();

    let first = tokio::spawn({
        let service = service.clone();
        let root = root.clone();
        async move { service.generate_ideas(&mut first_graph, &root).await }
    });

    // Wait until the first request has claimed the in-flight flag.
    while !service.idea_request_pending(&root).await {
        tokio::task::yield_now().await;
    }

    let err = service
        .generate_ideas(&mut second_graph, &root)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MapServiceError::IdeaRequestPending { ref node_id } if *node_id == root
    ));

    release.notify_one();
    let outcome = first.await.unwrap().unwrap();
    assert!(!outcome.used_fallback());
    assert_eq!(outcome.added().len(), 1);
    assert!(!service.idea_request_pending(&root).await);
}

#[tokio::test]
async fn test_ideas_for_unknown_node_are_skipped() {
    let dir = TempDir::new().unwrap();
    let service = local_service(&dir);

    let mut graph = service.open("map-1").await.unwrap();
    let outcome = service
        .generate_ideas(&mut graph, "missing")
        .await
        .unwrap();
    assert_eq!(outcome, IdeaOutcome::Skipped);
    assert_eq!(graph.document().nodes.len(), 1);
}

/// The worked end-to-end scenario: build R with children A and B, give A a
/// child C, then delete A, collapse R, and tidy up.
#[tokio::test]
async fn test_end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let service = local_service(&dir);

    let mut graph = service.open("map-1").await.unwrap();
    let r = graph.first_node_id().unwrap();
    let a = graph.add_node(&r, "A", None).unwrap();
    let b = graph.add_node(&r, "B", None).unwrap();
    graph.add_node(&a, "C", None).unwrap();

    let removed = graph.delete_node(&a);
    assert_eq!(removed.len(), 2);
    assert_eq!(graph.document().nodes.len(), 2);
    assert_eq!(graph.document().edges.len(), 1);

    graph.toggle_expand(&r);
    assert!(graph.node(&b).unwrap().hidden);

    tidy_up(&mut graph, &LayoutConfig::default());
    assert_eq!(graph.node(&r).unwrap().position, Position::new(50.0, 50.0));
    assert_eq!(graph.node(&b).unwrap().position, Position::new(300.0, 50.0));

    service.save(&mut graph).await.unwrap();
    let reopened = service.open("map-1").await.unwrap();
    assert_eq!(reopened.document().nodes.len(), 2);
}
