//! # graphscout
//!
//! Session management for interactive knowledge-graph exploration:
//! incremental subgraph assembly from paginated backend responses,
//! expansion tracking, ranked path queries, and a step-wise traversal
//! animator. Rendering and the concrete HTTP server are external
//! collaborators; see [`render`] and [`backend`] for the seams.

pub mod animator;
pub mod assembler;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod harness;
pub mod memory;
pub mod model;
pub mod paths;
pub mod render;
pub mod session;

pub use animator::{Animator, Highlight, PlaybackState};
pub use assembler::{ApplyOutcome, SubgraphAssembler};
pub use backend::GraphBackend;
pub use config::ExploreConfig;
pub use error::{ExploreError, Result};
pub use memory::MemoryBackend;
pub use model::{Edge, EntityKind, Node, RelationKind};
pub use paths::{PathFinder, PathResult};
pub use session::{GraphSession, MergeDelta, RootQuery};
