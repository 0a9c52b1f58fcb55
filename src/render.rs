// src/render.rs
//! The seam to the rendering engine. Layout and drawing live on the other
//! side; this module only fixes what crosses it: the element lists, the
//! per-element highlight state, and the click events coming back.

use crate::animator::Highlight;
use crate::model::{Edge, EdgeId, Node, NodeId};
use crate::session::GraphSession;

/// Borrowed view of a session handed to the renderer.
#[derive(Debug)]
pub struct GraphView<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
}

impl<'a> GraphView<'a> {
    #[must_use]
    pub fn of(session: &'a GraphSession) -> Self {
        Self {
            nodes: session.nodes().collect(),
            edges: session.edges().collect(),
        }
    }
}

/// Click events the renderer reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    NodeClicked(NodeId),
    EdgeClicked(EdgeId),
}

/// Anything that can draw a graph view with optional highlight state.
pub trait RenderSink {
    fn render(&mut self, view: &GraphView<'_>, highlight: Option<&Highlight>);
}
