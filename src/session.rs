// src/session.rs
//! The mutable exploration session: a running subgraph assembled from
//! paginated backend responses, plus the ledger of explicit expansions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Edge, EdgeId, EntityKind, Node, NodeId, RelationKind};

/// The root query a session was opened with. Re-issued verbatim on collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootQuery {
    pub center_id: NodeId,
    pub depth: u8,
    #[serde(default)]
    pub relation_filter: Vec<RelationKind>,
    #[serde(default)]
    pub entity_filter: Vec<EntityKind>,
    pub node_limit: usize,
}

impl RootQuery {
    #[must_use]
    pub fn new(center_id: impl Into<NodeId>, depth: u8, node_limit: usize) -> Self {
        Self {
            center_id: center_id.into(),
            depth,
            relation_filter: Vec::new(),
            entity_filter: Vec::new(),
            node_limit,
        }
    }
}

/// Elements newly introduced by a merge, for UI counters. Duplicates are
/// skipped silently and do not appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeDelta {
    pub nodes_added: Vec<NodeId>,
    pub edges_added: Vec<EdgeId>,
}

impl MergeDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes_added.is_empty() && self.edges_added.is_empty()
    }
}

/// Which nodes were explicitly expanded, and what each expansion introduced.
///
/// The provenance map is not yet consulted on collapse (collapse re-issues
/// the root query instead); it feeds UI affordances and keeps the door open
/// for true per-node undo.
#[derive(Debug, Clone, Default)]
pub struct ExpansionLedger {
    introduced: HashMap<NodeId, MergeDelta>,
}

impl ExpansionLedger {
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.introduced.contains_key(id)
    }

    pub fn mark(&mut self, id: NodeId, delta: MergeDelta) {
        // Repeated expansion of the same node accumulates its provenance.
        let entry = self.introduced.entry(id).or_default();
        entry.nodes_added.extend(delta.nodes_added);
        entry.edges_added.extend(delta.edges_added);
    }

    pub fn unmark(&mut self, id: &str) {
        self.introduced.remove(id);
    }

    pub fn clear(&mut self) {
        self.introduced.clear();
    }

    /// What a given expansion introduced, if the node was expanded.
    #[must_use]
    pub fn provenance(&self, id: &str) -> Option<&MergeDelta> {
        self.introduced.get(id)
    }

    #[must_use]
    pub fn expanded_ids(&self) -> Vec<&NodeId> {
        self.introduced.keys().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.introduced.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.introduced.is_empty()
    }
}

/// Single-owner aggregate of the assembled subgraph. Mutated only by the
/// assembler; everything else reads it.
#[derive(Debug, Clone)]
pub struct GraphSession {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    expanded: ExpansionLedger,
    query: RootQuery,
    generation: u64,
}

impl GraphSession {
    #[must_use]
    pub fn new(query: RootQuery) -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            expanded: ExpansionLedger::default(),
            query,
            generation: 0,
        }
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    #[must_use]
    pub fn query(&self) -> &RootQuery {
        &self.query
    }

    #[must_use]
    pub fn ledger(&self) -> &ExpansionLedger {
        &self.expanded
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut ExpansionLedger {
        &mut self.expanded
    }

    /// Current request generation. Bumped on every root fetch; stale
    /// responses carrying an older generation are discarded on apply.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replaces the session contents from a root response.
    pub(crate) fn replace(&mut self, query: RootQuery, nodes: Vec<Node>, edges: Vec<Edge>) -> MergeDelta {
        self.nodes.clear();
        self.edges.clear();
        self.expanded.clear();
        self.query = query;
        self.merge_batch(nodes, edges)
    }

    /// Merges a response batch into the session without duplicating
    /// elements already present by id.
    ///
    /// Node collisions are resolved by [`Node::absorb`] (incoming
    /// properties win, existing position survives). Edge collisions are
    /// skipped. An edge whose endpoints are still unknown after the whole
    /// batch has been considered is a data-integrity violation: it is
    /// dropped with a warning, never kept dangling.
    pub fn merge_batch(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> MergeDelta {
        let mut delta = MergeDelta::default();

        for node in nodes {
            match self.nodes.get_mut(&node.id) {
                Some(existing) => existing.absorb(node),
                None => {
                    delta.nodes_added.push(node.id.clone());
                    self.nodes.insert(node.id.clone(), node);
                }
            }
        }

        for edge in edges {
            if self.edges.contains_key(&edge.id) {
                continue;
            }
            if !self.nodes.contains_key(&edge.source) || !self.nodes.contains_key(&edge.target) {
                tracing::warn!(
                    edge = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "dropping edge with unknown endpoint"
                );
                continue;
            }
            delta.edges_added.push(edge.id.clone());
            self.edges.insert(edge.id.clone(), edge);
        }

        delta
    }

    /// Clears all content but keeps the stored query.
    /// Empties the session, the ledger, and the stored query's center, so
    /// the session reads as never having had a root fetch.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.expanded.clear();
        self.query.center_id.clear();
    }
}
