// src/config.rs
//! Session-level knobs and the clamp ranges for request parameters.
//!
//! Depth and limit bound what the backend returns, not what is drawn; they
//! are clamped here so a bad caller value degrades to the nearest legal one
//! instead of producing a server-side error.

use crate::error::{ExploreError, Result};

/// Inclusive depth range accepted by a root subgraph fetch.
pub const DEPTH_RANGE: (u8, u8) = (1, 5);
/// Inclusive node-limit range accepted by a root subgraph fetch.
pub const ROOT_LIMIT_RANGE: (usize, usize) = (100, 2000);
/// Inclusive range for the number of candidate paths requested.
pub const MAX_PATHS_RANGE: (usize, usize) = (1, 10);
/// Inclusive range for the maximum path length requested.
pub const MAX_LENGTH_RANGE: (usize, usize) = (1, 6);

#[derive(Debug, Clone)]
pub struct ExploreConfig {
    /// Default depth for a root subgraph fetch.
    pub default_depth: u8,
    /// Default node limit for a root subgraph fetch.
    pub default_root_limit: usize,
    /// Node limit for a single-node expansion (one hop).
    pub expand_limit: usize,
    /// Milliseconds between animation steps.
    pub speed_ms: u64,
    /// Depth beyond which a click no longer auto-expands.
    pub depth_ceiling: u8,
}

impl ExploreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_depth: 2,
            default_root_limit: 500,
            expand_limit: 50,
            speed_ms: 800,
            depth_ceiling: DEPTH_RANGE.1,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the animation interval is zero or the depth
    /// ceiling falls outside the legal depth range.
    pub fn validate(&self) -> Result<()> {
        if self.speed_ms == 0 {
            return Err(ExploreError::Config(
                "animation interval must be non-zero".into(),
            ));
        }
        if self.depth_ceiling < DEPTH_RANGE.0 || self.depth_ceiling > DEPTH_RANGE.1 {
            return Err(ExploreError::Config(format!(
                "depth ceiling {} outside [{}, {}]",
                self.depth_ceiling, DEPTH_RANGE.0, DEPTH_RANGE.1
            )));
        }
        Ok(())
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use]
pub fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(DEPTH_RANGE.0, DEPTH_RANGE.1)
}

#[must_use]
pub fn clamp_root_limit(limit: usize) -> usize {
    limit.clamp(ROOT_LIMIT_RANGE.0, ROOT_LIMIT_RANGE.1)
}

#[must_use]
pub fn clamp_max_paths(max_paths: usize) -> usize {
    max_paths.clamp(MAX_PATHS_RANGE.0, MAX_PATHS_RANGE.1)
}

#[must_use]
pub fn clamp_max_length(max_length: usize) -> usize {
    max_length.clamp(MAX_LENGTH_RANGE.0, MAX_LENGTH_RANGE.1)
}
