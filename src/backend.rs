// src/backend.rs
//! The transport seam. The concrete server (and how requests reach it) is
//! an external collaborator; this module only fixes the request/response
//! shapes and the async trait the assembler and path finder call through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Edge, EntityKind, Node, NodeId, RelationKind};
use crate::paths::PathResult;

/// Parameters for `GET /advanced/subgraph/{center_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphRequest {
    pub center_id: NodeId,
    pub depth: u8,
    pub limit: usize,
    #[serde(rename = "relation_types", skip_serializing_if = "Vec::is_empty")]
    pub relation_filter: Vec<RelationKind>,
    #[serde(rename = "entity_types", skip_serializing_if = "Vec::is_empty")]
    pub entity_filter: Vec<EntityKind>,
}

/// Parameters for `GET /advanced/neighbors/{node_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborRequest {
    pub node_id: NodeId,
    pub depth: u8,
    pub limit: usize,
}

/// Parameters for `GET /advanced/paths`.
#[derive(Debug, Clone, Serialize)]
pub struct PathRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub max_paths: usize,
    pub max_length: usize,
}

/// Node/edge list returned by subgraph and neighbor queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Candidate paths returned by a path query, ranked by the server
/// (shortest / most relevant first).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsPayload {
    pub paths: Vec<PathResult>,
}

/// Async access to the graph server. Implementations must not retain
/// references into a session; payloads are owned snapshots.
#[async_trait]
pub trait GraphBackend: Send + Sync {
    /// Fetches a bounded neighborhood around a center node.
    async fn subgraph(&self, req: &SubgraphRequest) -> Result<GraphPayload>;

    /// Fetches the one-hop (or `depth`-hop) neighbors of a single node.
    async fn neighbors(&self, req: &NeighborRequest) -> Result<GraphPayload>;

    /// Fetches ranked candidate paths between two nodes.
    async fn paths(&self, req: &PathRequest) -> Result<PathsPayload>;
}
