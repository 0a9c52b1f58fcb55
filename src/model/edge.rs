// src/model/edge.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::kind::RelationKind;
use super::value::PropertyValue;
use super::{EdgeId, NodeId};

/// A directed relation between two nodes. Identity is by `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    #[serde(rename = "source_id")]
    pub source: NodeId,
    #[serde(rename = "target_id")]
    pub target: NodeId,
    pub kind: RelationKind,
    pub label: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Edge {
    #[must_use]
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        kind: RelationKind,
    ) -> Self {
        let kind_label = kind.label().to_string();
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
            label: kind_label,
            properties: HashMap::new(),
        }
    }

    /// True if this edge joins `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Given one endpoint, returns the other, if this edge touches it.
    #[must_use]
    pub fn other_endpoint(&self, id: &str) -> Option<&NodeId> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
