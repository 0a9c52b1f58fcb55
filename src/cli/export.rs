// src/cli/export.rs
//! Replays a seeded demo session and writes its JSON snapshots, without
//! the animation pass the explore command runs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::assembler::SubgraphAssembler;
use crate::config::ExploreConfig;
use crate::export;
use crate::harness;
use crate::memory::MemoryBackend;
use crate::paths::PathFinder;
use crate::session::RootQuery;

pub struct ExportOpts {
    pub nodes: usize,
    pub multiplier: f64,
    pub seed: u64,
    pub center: String,
    pub source: String,
    pub target: String,
    pub out_dir: PathBuf,
}

pub async fn run(opts: ExportOpts) -> Result<()> {
    let data = harness::generate_with_seed(opts.nodes, opts.multiplier, opts.seed);
    let backend = Arc::new(MemoryBackend::from_payload(data));
    let config = ExploreConfig::new();
    config.validate()?;

    let mut assembler = SubgraphAssembler::new(backend.clone(), config.clone());
    let query = RootQuery::new(opts.center.clone(), config.default_depth, config.default_root_limit);
    let delta = assembler.fetch_subgraph(query).await?;
    println!(
        "{} fetched subgraph around {}: {} nodes, {} edges",
        "ok".green(),
        opts.center.bold(),
        delta.nodes_added.len(),
        delta.edges_added.len()
    );

    std::fs::create_dir_all(&opts.out_dir)?;
    let session_file = export::write_session(assembler.session(), &opts.out_dir)?;
    println!("{} wrote {}", "ok".green(), session_file.display());

    let finder = PathFinder::new(backend);
    let results = finder.find_paths(&opts.source, &opts.target, 1, 6).await?;
    match results.first() {
        Some(best) => {
            let path_file = export::write_path(best, &opts.out_dir)?;
            println!("{} wrote {}", "ok".green(), path_file.display());
        }
        None => println!(
            "{} no path between {} and {}, path snapshot skipped",
            "--".yellow(),
            opts.source,
            opts.target
        ),
    }

    Ok(())
}
