// src/cli/mod.rs
//! CLI argument definitions and command handlers.

pub mod args;
pub mod bench;
pub mod explore;
pub mod export;

pub use args::{Cli, Commands};
