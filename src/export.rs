// src/export.rs
//! Pretty-printed JSON snapshots of a session or a path, with the dated
//! filename convention the download UI expects.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::{ExploreError, Result};
use crate::model::{Edge, Node};
use crate::paths::PathResult;
use crate::session::{GraphSession, RootQuery};

#[derive(Debug, Serialize)]
struct SessionSnapshot<'a> {
    query: &'a RootQuery,
    nodes: Vec<&'a Node>,
    edges: Vec<&'a Edge>,
    expanded_node_ids: Vec<&'a String>,
}

/// `subgraph_{center}_{YYYYMMDD}.json`
#[must_use]
pub fn subgraph_filename(center_id: &str) -> String {
    format!("subgraph_{center_id}_{}.json", Utc::now().format("%Y%m%d"))
}

/// `path_{source}_to_{target}.json`
#[must_use]
pub fn path_filename(source: &str, target: &str) -> String {
    format!("path_{source}_to_{target}.json")
}

/// Serializes the session, elements sorted by id for stable output.
///
/// # Errors
///
/// Returns `ExploreError::Serde` if serialization fails.
pub fn session_json(session: &GraphSession) -> Result<String> {
    let mut nodes: Vec<&Node> = session.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    let mut edges: Vec<&Edge> = session.edges().collect();
    edges.sort_by(|a, b| a.id.cmp(&b.id));
    let mut expanded = session.ledger().expanded_ids();
    expanded.sort();

    let snapshot = SessionSnapshot {
        query: session.query(),
        nodes,
        edges,
        expanded_node_ids: expanded,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Serializes a single path result.
///
/// # Errors
///
/// Returns `ExploreError::Serde` if serialization fails.
pub fn path_json(path: &PathResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(path)?)
}

/// Writes the session snapshot into `dir` and returns the full path.
///
/// # Errors
///
/// Returns an error on serialization or I/O failure.
pub fn write_session(session: &GraphSession, dir: &Path) -> Result<PathBuf> {
    let file = dir.join(subgraph_filename(&session.query().center_id));
    fs::write(&file, session_json(session)?)?;
    Ok(file)
}

/// Writes a path snapshot into `dir` and returns the full path.
///
/// # Errors
///
/// Returns an error on serialization or I/O failure, or if the path is
/// empty.
pub fn write_path(path: &PathResult, dir: &Path) -> Result<PathBuf> {
    let (Some(source), Some(target)) = (path.path.first(), path.path.last()) else {
        return Err(ExploreError::Validation(
            "cannot export an empty path".into(),
        ));
    };
    let file = dir.join(path_filename(source, target));
    fs::write(&file, path_json(path)?)?;
    Ok(file)
}
