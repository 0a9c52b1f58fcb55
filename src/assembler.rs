// src/assembler.rs
//! Builds and mutates the exploration session from backend responses.
//!
//! Root fetches replace the session; expansions merge into it. Every root
//! fetch bumps the session's generation counter and every request carries
//! the generation it was issued under, so a response that arrives after a
//! newer root query has superseded it is discarded instead of applied
//! (last root query wins). Two expansions issued under the same generation
//! commute: merging is idempotent and order-independent at the element
//! level, so no ordering is enforced between them.

use std::sync::Arc;

use crate::backend::{GraphBackend, GraphPayload, NeighborRequest, SubgraphRequest};
use crate::config::{clamp_depth, clamp_root_limit, ExploreConfig};
use crate::error::Result;
use crate::model::NodeId;
use crate::session::{GraphSession, MergeDelta, RootQuery};

/// A root fetch in flight: the query it will install plus the generation
/// it was issued under.
#[derive(Debug, Clone)]
pub struct RootTicket {
    generation: u64,
    query: RootQuery,
}

impl RootTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn request(&self) -> SubgraphRequest {
        SubgraphRequest {
            center_id: self.query.center_id.clone(),
            depth: self.query.depth,
            limit: self.query.node_limit,
            relation_filter: self.query.relation_filter.clone(),
            entity_filter: self.query.entity_filter.clone(),
        }
    }
}

/// An expansion in flight, tagged with the generation current at issue.
#[derive(Debug, Clone)]
pub struct ExpandTicket {
    generation: u64,
    node_id: NodeId,
    depth: u8,
    limit: usize,
}

impl ExpandTicket {
    #[must_use]
    pub fn request(&self) -> NeighborRequest {
        NeighborRequest {
            node_id: self.node_id.clone(),
            depth: self.depth,
            limit: self.limit,
        }
    }
}

/// Outcome of applying a response to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response was current and was merged; the delta lists only the
    /// elements it newly introduced.
    Applied(MergeDelta),
    /// The response was issued under an older generation and was discarded
    /// without touching the session.
    Superseded,
}

impl ApplyOutcome {
    /// The delta for an applied response, or an empty delta for a
    /// superseded one.
    #[must_use]
    pub fn into_delta(self) -> MergeDelta {
        match self {
            ApplyOutcome::Applied(delta) => delta,
            ApplyOutcome::Superseded => MergeDelta::default(),
        }
    }
}

/// Owns the session and is the only writer to it.
pub struct SubgraphAssembler {
    session: GraphSession,
    backend: Arc<dyn GraphBackend>,
    config: ExploreConfig,
}

impl SubgraphAssembler {
    #[must_use]
    pub fn new(backend: Arc<dyn GraphBackend>, config: ExploreConfig) -> Self {
        let placeholder = RootQuery::new("", config.default_depth, config.default_root_limit);
        Self {
            session: GraphSession::new(placeholder),
            backend,
            config,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GraphSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// True once a root fetch has populated the session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.session.query().center_id.is_empty()
    }

    /// Stamps a new root query, superseding every request still in flight.
    /// Depth and limit are clamped into their legal ranges.
    pub fn begin_root(&mut self, mut query: RootQuery) -> RootTicket {
        query.depth = clamp_depth(query.depth);
        query.node_limit = clamp_root_limit(query.node_limit);
        RootTicket {
            generation: self.session.next_generation(),
            query,
        }
    }

    /// Installs a root response, replacing the whole session, unless a
    /// newer root query has superseded the ticket.
    pub fn apply_root(
        &mut self,
        ticket: RootTicket,
        payload: GraphPayload,
    ) -> ApplyOutcome {
        if ticket.generation != self.session.generation() {
            tracing::debug!(
                stale = ticket.generation,
                current = self.session.generation(),
                "discarding superseded root response"
            );
            return ApplyOutcome::Superseded;
        }
        let delta = self
            .session
            .replace(ticket.query, payload.nodes, payload.edges);
        ApplyOutcome::Applied(delta)
    }

    /// Stamps an expansion under the current generation. Expansions never
    /// bump the generation; only a root replace invalidates them.
    pub fn begin_expand(&mut self, node_id: impl Into<NodeId>, depth: u8, limit: usize) -> ExpandTicket {
        ExpandTicket {
            generation: self.session.generation(),
            node_id: node_id.into(),
            depth,
            limit,
        }
    }

    /// Merges an expansion response into the session and records the node
    /// in the expansion ledger, unless a root replace superseded it.
    pub fn apply_expand(
        &mut self,
        ticket: ExpandTicket,
        payload: GraphPayload,
    ) -> ApplyOutcome {
        if ticket.generation != self.session.generation() {
            tracing::debug!(
                stale = ticket.generation,
                current = self.session.generation(),
                node = %ticket.node_id,
                "discarding superseded expansion response"
            );
            return ApplyOutcome::Superseded;
        }
        let delta = self.session.merge_batch(payload.nodes, payload.edges);
        self.session
            .ledger_mut()
            .mark(ticket.node_id, delta.clone());
        ApplyOutcome::Applied(delta)
    }

    /// Issues a root fetch and installs the result, fully replacing the
    /// session. On failure the session contents are left untouched, so the
    /// caller can keep showing the previous view.
    ///
    /// # Errors
    ///
    /// Returns `ExploreError::Fetch` when the backend fails.
    pub async fn fetch_subgraph(&mut self, query: RootQuery) -> Result<MergeDelta> {
        let ticket = self.begin_root(query);
        let payload = self.backend.subgraph(&ticket.request()).await?;
        Ok(self.apply_root(ticket, payload).into_delta())
    }

    /// Issues a one-hop neighbor fetch for `node_id` and merges the result
    /// into the session. Elements already present are skipped; the returned
    /// delta lists only what was newly introduced. Calling this twice for
    /// the same node is idempotent with respect to already-known elements.
    ///
    /// # Errors
    ///
    /// Returns `ExploreError::Fetch` when the backend fails; the session is
    /// left unchanged in that case.
    pub async fn expand_node(&mut self, node_id: &str) -> Result<MergeDelta> {
        let ticket = self.begin_expand(node_id, 1, self.config.expand_limit);
        let payload = self.backend.neighbors(&ticket.request()).await?;
        Ok(self.apply_expand(ticket, payload).into_delta())
    }

    /// Collapses a node by re-issuing the stored root query. The replace on
    /// success clears the whole ledger, discarding the elements introduced
    /// by every expansion, not only the collapsed one; the ledger's
    /// provenance map exists so a per-node reversal can replace this
    /// wholesale refetch. On failure the session, the ledger entry
    /// included, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ExploreError::Fetch` when the refetch fails.
    pub async fn collapse_node(&mut self, node_id: &str) -> Result<MergeDelta> {
        tracing::debug!(node = %node_id, "collapsing via root refetch");
        let query = self.session.query().clone();
        self.fetch_subgraph(query).await
    }

    /// Clears the session entirely and invalidates every request still in
    /// flight.
    pub fn reset(&mut self) {
        self.session.clear();
        self.session.next_generation();
    }

    /// Gate for click-driven expansion: a node qualifies only if it is in
    /// the session, has not been expanded yet, and the root query's depth
    /// ceiling leaves room for another hop.
    #[must_use]
    pub fn should_auto_expand(&self, node_id: &str) -> bool {
        self.session.node(node_id).is_some()
            && !self.session.ledger().is_expanded(node_id)
            && self.session.query().depth < self.config.depth_ceiling
    }
}
