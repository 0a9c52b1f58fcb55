// tests/unit_backend.rs
//! In-memory backend semantics: depth/limit bounding and type filters.

use std::sync::Arc;

use graphscout_core::backend::{GraphBackend, GraphPayload, NeighborRequest, SubgraphRequest};
use graphscout_core::error::ExploreError;
use graphscout_core::memory::MemoryBackend;
use graphscout_core::model::{Edge, EntityKind, Node, RelationKind};

/// Chain D0 -(treats)-> T1 -(targets)-> D2 -(treats)-> T3, with one
/// off-kind disease hanging off the center.
fn chain_backend() -> MemoryBackend {
    MemoryBackend::from_payload(GraphPayload {
        nodes: vec![
            Node::new("D0", "D0", EntityKind::Drug),
            Node::new("T1", "T1", EntityKind::Target),
            Node::new("D2", "D2", EntityKind::Drug),
            Node::new("T3", "T3", EntityKind::Target),
            Node::new("X", "X", EntityKind::Disease),
        ],
        edges: vec![
            Edge::new("E1", "D0", "T1", RelationKind::Treats),
            Edge::new("E2", "T1", "D2", RelationKind::Targets),
            Edge::new("E3", "D2", "T3", RelationKind::Treats),
            Edge::new("E4", "D0", "X", RelationKind::AssociatedWith),
        ],
    })
}

fn subgraph_req(depth: u8, limit: usize) -> SubgraphRequest {
    SubgraphRequest {
        center_id: "D0".to_string(),
        depth,
        limit,
        relation_filter: vec![],
        entity_filter: vec![],
    }
}

#[tokio::test]
async fn test_depth_bounds_the_response() {
    let backend = chain_backend();

    let one_hop = backend.subgraph(&subgraph_req(1, 100)).await.expect("ok");
    let ids: Vec<&str> = one_hop.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(ids.contains(&"D0") && ids.contains(&"T1") && ids.contains(&"X"));
    assert!(!ids.contains(&"D2"), "D2 is two hops out");

    let three_hops = backend.subgraph(&subgraph_req(3, 100)).await.expect("ok");
    assert_eq!(three_hops.nodes.len(), 5, "depth 3 reaches the whole chain");
}

#[tokio::test]
async fn test_limit_caps_collected_nodes() {
    let backend = chain_backend();
    let capped = backend.subgraph(&subgraph_req(3, 2)).await.expect("ok");
    assert_eq!(capped.nodes.len(), 2, "center plus one neighbor");
}

#[tokio::test]
async fn test_entity_filter_excludes_kinds() {
    let backend = chain_backend();
    let mut req = subgraph_req(1, 100);
    req.entity_filter = vec![EntityKind::Target];
    let payload = backend.subgraph(&req).await.expect("ok");
    let ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(ids.contains(&"D0"), "the center is always included");
    assert!(ids.contains(&"T1"));
    assert!(!ids.contains(&"X"), "diseases are filtered out");
}

#[tokio::test]
async fn test_relation_filter_prunes_traversal_and_edges() {
    let backend = chain_backend();
    let mut req = subgraph_req(2, 100);
    req.relation_filter = vec![RelationKind::Treats, RelationKind::Targets];
    let payload = backend.subgraph(&req).await.expect("ok");
    let ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(!ids.contains(&"X"), "only reachable through a filtered relation");
    assert!(
        payload.edges.iter().all(|e| e.kind != RelationKind::AssociatedWith),
        "filtered relations never appear in the induced edge set"
    );
}

#[tokio::test]
async fn test_unknown_center_is_a_fetch_error() {
    let backend = chain_backend();
    backend
        .subgraph(&subgraph_req(1, 100))
        .await
        .expect("known center succeeds");

    let mut req = subgraph_req(1, 100);
    req.center_id = "MISSING".to_string();
    let err = backend.subgraph(&req).await.expect_err("unknown center");
    assert!(matches!(err, ExploreError::Fetch { status: Some(404), .. }));
}

#[tokio::test]
async fn test_neighbors_returns_connecting_edges() {
    let backend = Arc::new(chain_backend());
    let payload = backend
        .neighbors(&NeighborRequest {
            node_id: "T1".to_string(),
            depth: 1,
            limit: 50,
        })
        .await
        .expect("ok");
    let ids: Vec<&str> = payload.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(ids.contains(&"T1") && ids.contains(&"D0") && ids.contains(&"D2"));
    assert_eq!(payload.edges.len(), 2, "E1 and E2 join the collected nodes");
}

#[tokio::test]
async fn test_zero_neighbors_is_a_normal_empty_result() {
    let backend = MemoryBackend::from_payload(GraphPayload {
        nodes: vec![Node::new("LONE", "LONE", EntityKind::Drug)],
        edges: vec![],
    });
    let payload = backend
        .neighbors(&NeighborRequest {
            node_id: "LONE".to_string(),
            depth: 1,
            limit: 50,
        })
        .await
        .expect("an isolated node is not an error");
    assert_eq!(payload.nodes.len(), 1, "just the node itself");
    assert!(payload.edges.is_empty());
}
