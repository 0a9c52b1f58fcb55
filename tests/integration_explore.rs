// tests/integration_explore.rs
//! Whole-lifecycle test: root fetch, expansion, path query, animated
//! traversal, JSON export.

use std::sync::Arc;

use graphscout_core::animator::{Animator, PlaybackState};
use graphscout_core::assembler::SubgraphAssembler;
use graphscout_core::backend::GraphPayload;
use graphscout_core::config::ExploreConfig;
use graphscout_core::export;
use graphscout_core::memory::MemoryBackend;
use graphscout_core::model::{Edge, EntityKind, Node, RelationKind};
use graphscout_core::error::ExploreError;
use graphscout_core::paths::{PathFinder, PathResult};
use graphscout_core::render::GraphView;
use graphscout_core::session::RootQuery;

/// Small curated graph: aspirin -> COX targets -> inflammation pathway.
fn fixture() -> GraphPayload {
    let node = |id: &str, kind| Node::new(id, id.to_string(), kind);
    GraphPayload {
        nodes: vec![
            node("CHEMBL25", EntityKind::Drug),
            node("PTGS1", EntityKind::Target),
            node("PTGS2", EntityKind::Target),
            node("INFLAMMATION", EntityKind::Pathway),
            node("PAIN", EntityKind::Disease),
            node("NCT001", EntityKind::Trial),
        ],
        edges: vec![
            Edge::new("E1", "CHEMBL25", "PTGS1", RelationKind::Targets),
            Edge::new("E2", "CHEMBL25", "PTGS2", RelationKind::Targets),
            Edge::new("E3", "PTGS2", "INFLAMMATION", RelationKind::Participates),
            Edge::new("E4", "INFLAMMATION", "PAIN", RelationKind::AssociatedWith),
            Edge::new("E5", "CHEMBL25", "NCT001", RelationKind::Indicates),
            Edge::new("E6", "NCT001", "PAIN", RelationKind::Indicates),
        ],
    }
}

#[tokio::test]
async fn test_full_exploration_lifecycle() {
    let backend = Arc::new(MemoryBackend::from_payload(fixture()));
    let mut asm = SubgraphAssembler::new(backend.clone(), ExploreConfig::new());

    // Root fetch at depth 1: the drug and its direct neighbors.
    asm.fetch_subgraph(RootQuery::new("CHEMBL25", 1, 500))
        .await
        .expect("root fetch");
    assert_eq!(asm.session().node_count(), 4, "drug + PTGS1 + PTGS2 + NCT001");
    assert!(asm.session().node("INFLAMMATION").is_none(), "two hops away");

    // Expanding PTGS2 pulls in the pathway.
    assert!(asm.should_auto_expand("PTGS2"));
    let delta = asm.expand_node("PTGS2").await.expect("expand");
    assert!(delta.nodes_added.contains(&"INFLAMMATION".to_string()));
    assert!(asm.session().ledger().is_expanded("PTGS2"));

    let view = GraphView::of(asm.session());
    assert_eq!(view.nodes.len(), asm.session().node_count());

    // Paths from the drug to the disease.
    let finder = PathFinder::new(backend);
    let results = finder
        .find_paths("CHEMBL25", "PAIN", 3, 6)
        .await
        .expect("path query");
    assert!(results.len() >= 2, "trial route and pathway route both exist");
    assert_eq!(results[0].length, 2, "shortest route (via NCT001) ranks first");

    // Animate the best path to completion.
    let mut animator = Animator::new(1);
    animator.load(results);
    assert_eq!(animator.state(), PlaybackState::Ready);
    animator.drive().await;
    assert_eq!(animator.state(), PlaybackState::Complete);
    let highlight = animator.current_highlight().expect("loaded");
    assert_eq!(
        highlight.node_ids.len(),
        3,
        "every node on the completed path is active"
    );
    assert_eq!(highlight.edge_ids.len(), 2);
}

#[tokio::test]
async fn test_export_filenames_and_content() {
    let backend = Arc::new(MemoryBackend::from_payload(fixture()));
    let mut asm = SubgraphAssembler::new(backend.clone(), ExploreConfig::new());
    asm.fetch_subgraph(RootQuery::new("CHEMBL25", 2, 500))
        .await
        .expect("root fetch");

    let dir = tempfile::tempdir().expect("tempdir");

    let session_file = export::write_session(asm.session(), dir.path()).expect("write session");
    let name = session_file.file_name().and_then(|n| n.to_str()).expect("name");
    assert!(
        name.starts_with("subgraph_CHEMBL25_") && name.ends_with(".json"),
        "dated session filename, got {name}"
    );
    let text = std::fs::read_to_string(&session_file).expect("read back");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(parsed["query"]["center_id"], "CHEMBL25");
    assert!(parsed["nodes"].as_array().is_some_and(|n| !n.is_empty()));
    assert!(text.contains('\n'), "export is pretty-printed");

    let finder = PathFinder::new(backend);
    let results = finder
        .find_paths("CHEMBL25", "PAIN", 1, 6)
        .await
        .expect("path query");
    let path_file = export::write_path(&results[0], dir.path()).expect("write path");
    assert_eq!(
        path_file.file_name().and_then(|n| n.to_str()),
        Some("path_CHEMBL25_to_PAIN.json")
    );
    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path_file).expect("read back"))
            .expect("valid JSON");
    assert_eq!(parsed["length"], 2);
}

#[test]
fn test_export_rejects_empty_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let empty = PathResult::from_walk(vec![], vec![], vec![]);
    let err = export::write_path(&empty, dir.path()).expect_err("empty path must not export");
    assert!(matches!(err, ExploreError::Validation(_)));
}
