// src/model/mod.rs
//! Graph element value types: identity, equality, and merge rules.

pub mod edge;
pub mod kind;
pub mod node;
pub mod value;

pub use edge::Edge;
pub use kind::{EntityKind, RelationKind};
pub use node::Node;
pub use value::PropertyValue;

/// Opaque node identifier, unique within a data source.
pub type NodeId = String;
/// Opaque edge identifier; edge and node ids live in disjoint namespaces.
pub type EdgeId = String;
