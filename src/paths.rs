// src/paths.rs
//! Path queries between two entities, and the invariants a returned path
//! must satisfy before the animator will touch it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::{GraphBackend, PathRequest};
use crate::config::{clamp_max_length, clamp_max_paths};
use crate::error::{ExploreError, Result};
use crate::model::{Edge, Node, NodeId};

/// An immutable path snapshot: an ordered node-id walk plus the full node
/// and edge records along it. Not a live view into any session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub length: usize,
}

impl PathResult {
    /// Builds a result from an ordered walk, deriving `length`.
    #[must_use]
    pub fn from_walk(path: Vec<NodeId>, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let length = path.len().saturating_sub(1);
        Self { path, nodes, edges, length }
    }

    /// Index of the final step (0 for a single-node path).
    #[must_use]
    pub fn last_step(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Checks the structural invariant: `length == path.len() - 1`, one
    /// edge per hop, and `edges[i]` joining `path[i]`/`path[i+1]` in either
    /// direction.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        if self.length != self.path.len() - 1 || self.edges.len() != self.length {
            return false;
        }
        self.path
            .windows(2)
            .zip(&self.edges)
            .all(|(pair, edge)| edge.connects(&pair[0], &pair[1]))
    }
}

/// Issues path queries and screens the results.
pub struct PathFinder {
    backend: Arc<dyn GraphBackend>,
}

impl PathFinder {
    #[must_use]
    pub fn new(backend: Arc<dyn GraphBackend>) -> Self {
        Self { backend }
    }

    /// Requests up to `max_paths` candidate paths of at most `max_length`
    /// hops between two distinct entities. Zero results is a normal outcome
    /// and comes back as an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ExploreError::Validation` before any backend call when an
    /// endpoint is empty or the endpoints are equal, and `ExploreError::Fetch`
    /// when the backend fails.
    pub async fn find_paths(
        &self,
        source: &str,
        target: &str,
        max_paths: usize,
        max_length: usize,
    ) -> Result<Vec<PathResult>> {
        if source.is_empty() || target.is_empty() {
            return Err(ExploreError::Validation(
                "path query requires both a source and a target".into(),
            ));
        }
        if source == target {
            return Err(ExploreError::Validation(format!(
                "path endpoints must differ (got '{source}' twice)"
            )));
        }

        let req = PathRequest {
            source: source.to_string(),
            target: target.to_string(),
            max_paths: clamp_max_paths(max_paths),
            max_length: clamp_max_length(max_length),
        };
        let payload = self.backend.paths(&req).await?;

        // The server is trusted for ranking but not for shape.
        let mut results = Vec::with_capacity(payload.paths.len());
        for path in payload.paths {
            if path.is_well_formed() {
                results.push(path);
            } else {
                tracing::warn!(
                    source = %req.source,
                    target = %req.target,
                    "dropping malformed path result ({} ids, {} edges)",
                    path.path.len(),
                    path.edges.len()
                );
            }
        }
        Ok(results)
    }
}
