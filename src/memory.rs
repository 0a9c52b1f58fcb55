// src/memory.rs
//! Deterministic in-process backend over a fixed graph. Stands in for the
//! live server in tests, the benchmark harness, and the scripted demo.

use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;

use crate::backend::{
    GraphBackend, GraphPayload, NeighborRequest, PathRequest, PathsPayload, SubgraphRequest,
};
use crate::error::{ExploreError, Result};
use crate::model::{Edge, EntityKind, Node, NodeId, RelationKind};
use crate::paths::PathResult;

pub struct MemoryBackend {
    nodes: HashMap<NodeId, Node>,
    edges: Vec<Edge>,
    /// Node id -> indices into `edges` touching it.
    adjacency: HashMap<NodeId, Vec<usize>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn from_payload(data: GraphPayload) -> Self {
        let mut adjacency: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (idx, edge) in data.edges.iter().enumerate() {
            adjacency.entry(edge.source.clone()).or_default().push(idx);
            adjacency.entry(edge.target.clone()).or_default().push(idx);
        }
        let nodes = data.nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        Self {
            nodes,
            edges: data.edges,
            adjacency,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn require_node(&self, id: &str) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| ExploreError::Fetch {
            status: Some(404),
            message: format!("unknown node '{id}'"),
        })
    }

    /// Breadth-first neighborhood of `center` up to `depth` hops, capped at
    /// `limit` nodes, then the induced edges among the collected nodes.
    fn neighborhood(
        &self,
        center: &str,
        depth: u8,
        limit: usize,
        entity_filter: &[EntityKind],
        relation_filter: &[RelationKind],
    ) -> GraphPayload {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut collected: Vec<&Node> = Vec::new();
        let mut queue: VecDeque<(&str, u8)> = VecDeque::new();

        visited.insert(center);
        if let Some(node) = self.nodes.get(center) {
            collected.push(node);
        }
        queue.push_back((center, 0));

        while let Some((id, dist)) = queue.pop_front() {
            if dist >= depth || collected.len() >= limit {
                continue;
            }
            for &edge_idx in self.adjacency.get(id).into_iter().flatten() {
                let edge = &self.edges[edge_idx];
                if !allows_relation(relation_filter, edge.kind) {
                    continue;
                }
                let Some(next_id) = edge.other_endpoint(id) else {
                    continue;
                };
                if visited.contains(next_id.as_str()) {
                    continue;
                }
                let Some(next) = self.nodes.get(next_id) else {
                    continue;
                };
                if !allows_entity(entity_filter, next.kind) {
                    continue;
                }
                if collected.len() >= limit {
                    break;
                }
                visited.insert(next_id.as_str());
                collected.push(next);
                queue.push_back((next_id.as_str(), dist + 1));
            }
        }

        let ids: HashSet<&str> = collected.iter().map(|n| n.id.as_str()).collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| {
                ids.contains(e.source.as_str())
                    && ids.contains(e.target.as_str())
                    && allows_relation(relation_filter, e.kind)
            })
            .cloned()
            .collect();

        GraphPayload {
            nodes: collected.into_iter().cloned().collect(),
            edges,
        }
    }

    /// Enumerates simple paths from `source` to `target` of at most
    /// `max_length` hops, shortest first.
    fn simple_paths(&self, req: &PathRequest) -> Vec<PathResult> {
        let mut found: Vec<Vec<(NodeId, Option<usize>)>> = Vec::new();
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(req.source.clone(), None)];
        let mut on_path: HashSet<NodeId> = HashSet::new();
        on_path.insert(req.source.clone());

        self.dfs_paths(req, &mut stack, &mut on_path, &mut found);

        found.sort_by_key(Vec::len);
        found.truncate(req.max_paths);
        found
            .into_iter()
            .map(|walk| {
                let path: Vec<NodeId> = walk.iter().map(|(id, _)| id.clone()).collect();
                let nodes = path
                    .iter()
                    .filter_map(|id| self.nodes.get(id).cloned())
                    .collect();
                let edges = walk
                    .iter()
                    .filter_map(|(_, edge_idx)| edge_idx.map(|i| self.edges[i].clone()))
                    .collect();
                PathResult::from_walk(path, nodes, edges)
            })
            .collect()
    }

    fn dfs_paths(
        &self,
        req: &PathRequest,
        stack: &mut Vec<(NodeId, Option<usize>)>,
        on_path: &mut HashSet<NodeId>,
        found: &mut Vec<Vec<(NodeId, Option<usize>)>>,
    ) {
        let (current, _) = stack.last().cloned().unwrap_or_default();
        if current == req.target {
            found.push(stack.clone());
            return;
        }
        if stack.len() > req.max_length {
            return;
        }
        for &edge_idx in self.adjacency.get(&current).into_iter().flatten() {
            let Some(next) = self.edges[edge_idx].other_endpoint(&current) else {
                continue;
            };
            if on_path.contains(next) {
                continue;
            }
            on_path.insert(next.clone());
            stack.push((next.clone(), Some(edge_idx)));
            self.dfs_paths(req, stack, on_path, found);
            stack.pop();
            on_path.remove(next);
        }
    }
}

fn allows_entity(filter: &[EntityKind], kind: EntityKind) -> bool {
    filter.is_empty() || filter.contains(&kind)
}

fn allows_relation(filter: &[RelationKind], kind: RelationKind) -> bool {
    filter.is_empty() || filter.contains(&kind)
}

#[async_trait]
impl GraphBackend for MemoryBackend {
    async fn subgraph(&self, req: &SubgraphRequest) -> Result<GraphPayload> {
        self.require_node(&req.center_id)?;
        Ok(self.neighborhood(
            &req.center_id,
            req.depth,
            req.limit,
            &req.entity_filter,
            &req.relation_filter,
        ))
    }

    async fn neighbors(&self, req: &NeighborRequest) -> Result<GraphPayload> {
        self.require_node(&req.node_id)?;
        Ok(self.neighborhood(&req.node_id, req.depth, req.limit, &[], &[]))
    }

    async fn paths(&self, req: &PathRequest) -> Result<PathsPayload> {
        self.require_node(&req.source)?;
        self.require_node(&req.target)?;
        Ok(PathsPayload {
            paths: self.simple_paths(req),
        })
    }
}
