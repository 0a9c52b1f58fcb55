// src/model/node.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::kind::EntityKind;
use super::value::PropertyValue;
use super::NodeId;

/// A graph node. Identity and equality are by `id` alone; two fetch results
/// carrying the same id describe the same node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
    /// Screen position, once a layout has assigned one. Preserved across
    /// merges so re-expansion does not jitter the layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(f64, f64)>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            properties: HashMap::new(),
            position: None,
        }
    }

    /// Folds a freshly fetched copy of this node into the existing one.
    ///
    /// Properties are replaced wholesale (last write wins, no deep merge).
    /// The existing position survives if set; otherwise the incoming one is
    /// taken.
    pub fn absorb(&mut self, incoming: Node) {
        debug_assert_eq!(self.id, incoming.id);
        self.label = incoming.label;
        self.kind = incoming.kind;
        self.properties = incoming.properties;
        if self.position.is_none() {
            self.position = incoming.position;
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
