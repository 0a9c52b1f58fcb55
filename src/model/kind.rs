// src/model/kind.rs
//! Fixed entity and relation enumerations for the pharmaceutical graph.

use serde::{Deserialize, Serialize};

/// Entity classification for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Drug,
    Target,
    Disease,
    Pathway,
    Mechanism,
    Trial,
}

impl EntityKind {
    /// All kinds in a stable order; the harness cycles through these.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Drug,
        EntityKind::Target,
        EntityKind::Disease,
        EntityKind::Pathway,
        EntityKind::Mechanism,
        EntityKind::Trial,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Drug => "drug",
            EntityKind::Target => "target",
            EntityKind::Disease => "disease",
            EntityKind::Pathway => "pathway",
            EntityKind::Mechanism => "mechanism",
            EntityKind::Trial => "trial",
        }
    }
}

/// Relation classification for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Treats,
    Targets,
    Interacts,
    Participates,
    Indicates,
    AssociatedWith,
}

impl RelationKind {
    pub const ALL: [RelationKind; 6] = [
        RelationKind::Treats,
        RelationKind::Targets,
        RelationKind::Interacts,
        RelationKind::Participates,
        RelationKind::Indicates,
        RelationKind::AssociatedWith,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Treats => "treats",
            RelationKind::Targets => "targets",
            RelationKind::Interacts => "interacts",
            RelationKind::Participates => "participates",
            RelationKind::Indicates => "indicates",
            RelationKind::AssociatedWith => "associated_with",
        }
    }
}
