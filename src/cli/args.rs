// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "graphscout", version, about = "Knowledge-graph exploration sessions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the merge-performance ladder against synthetic graphs
    Bench {
        /// Edges per node in the generated graphs
        #[arg(long, default_value = "2.0")]
        multiplier: f64,
        /// How many times to run the full ladder
        #[arg(long, default_value = "1")]
        rounds: usize,
    },
    /// Scripted exploration against an in-process graph: fetch, expand,
    /// find paths, animate
    Explore {
        /// Number of nodes in the generated demo graph
        #[arg(long, default_value = "300")]
        nodes: usize,
        /// Edges per node in the generated demo graph
        #[arg(long, default_value = "2.0")]
        multiplier: f64,
        /// RNG seed for the demo graph
        #[arg(long, default_value = "7")]
        seed: u64,
        /// Center node for the root fetch
        #[arg(long, default_value = "N0")]
        center: String,
        /// Source node for the path query
        #[arg(long, default_value = "N1")]
        source: String,
        /// Target node for the path query
        #[arg(long, default_value = "N2")]
        target: String,
        /// Milliseconds between animation steps
        #[arg(long, default_value = "100")]
        speed_ms: u64,
        /// Write JSON snapshots of the session and best path here
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,
    },
    /// Write JSON snapshots of a seeded demo session and its best path
    Export {
        /// Number of nodes in the generated demo graph
        #[arg(long, default_value = "300")]
        nodes: usize,
        /// Edges per node in the generated demo graph
        #[arg(long, default_value = "2.0")]
        multiplier: f64,
        /// RNG seed for the demo graph
        #[arg(long, default_value = "7")]
        seed: u64,
        /// Center node for the root fetch
        #[arg(long, default_value = "N0")]
        center: String,
        /// Source node for the path query
        #[arg(long, default_value = "N1")]
        source: String,
        /// Target node for the path query
        #[arg(long, default_value = "N2")]
        target: String,
        /// Directory to write the snapshots into
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}
