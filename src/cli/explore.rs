// src/cli/explore.rs
//! Scripted end-to-end exploration against an in-process graph. Walks the
//! whole session lifecycle: root fetch, expansion, path query, animated
//! traversal, optional JSON export.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::animator::{Animator, Highlight, PlaybackState};
use crate::assembler::SubgraphAssembler;
use crate::config::ExploreConfig;
use crate::export;
use crate::harness;
use crate::memory::MemoryBackend;
use crate::paths::PathFinder;
use crate::render::{GraphView, InteractionEvent, RenderSink};
use crate::session::RootQuery;

pub struct ExploreOpts {
    pub nodes: usize,
    pub multiplier: f64,
    pub seed: u64,
    pub center: String,
    pub source: String,
    pub target: String,
    pub speed_ms: u64,
    pub export_dir: Option<PathBuf>,
}

/// Prints per-frame summaries instead of drawing.
struct TerminalSink;

impl RenderSink for TerminalSink {
    fn render(&mut self, view: &GraphView<'_>, highlight: Option<&Highlight>) {
        match highlight {
            Some(h) => println!(
                "  step: {} of {} nodes active, {} of {} edges active",
                h.node_ids.len(),
                view.nodes.len(),
                h.edge_ids.len(),
                view.edges.len()
            ),
            None => println!(
                "  session: {} nodes, {} edges",
                view.nodes.len(),
                view.edges.len()
            ),
        }
    }
}

/// Routes a renderer click event: an unexpanded node expands in place,
/// anything else is only reported.
async fn on_interaction(assembler: &mut SubgraphAssembler, event: InteractionEvent) -> Result<()> {
    match event {
        InteractionEvent::NodeClicked(id) => {
            if assembler.should_auto_expand(&id) {
                let delta = assembler.expand_node(&id).await?;
                println!(
                    "{} expanded {}: +{} nodes, +{} edges",
                    "ok".green(),
                    id.bold(),
                    delta.nodes_added.len(),
                    delta.edges_added.len()
                );
            } else {
                println!("  {id} already expanded or at the depth ceiling");
            }
        }
        InteractionEvent::EdgeClicked(id) => println!("  edge {id} selected"),
    }
    Ok(())
}

pub async fn run(opts: ExploreOpts) -> Result<()> {
    let data = harness::generate_with_seed(opts.nodes, opts.multiplier, opts.seed);
    let backend = Arc::new(MemoryBackend::from_payload(data));
    let config = ExploreConfig::new();
    config.validate()?;

    let mut sink = TerminalSink;
    let mut assembler = SubgraphAssembler::new(backend.clone(), config.clone());

    // Root fetch
    let query = RootQuery::new(opts.center.clone(), config.default_depth, config.default_root_limit);
    let delta = assembler.fetch_subgraph(query).await?;
    println!(
        "{} fetched subgraph around {}: +{} nodes, +{} edges",
        "ok".green(),
        opts.center.bold(),
        delta.nodes_added.len(),
        delta.edges_added.len()
    );
    sink.render(&GraphView::of(assembler.session()), None);

    // Simulate a click on the first neighbor the root fetch brought in
    if let Some(first) = delta.nodes_added.iter().find(|id| *id != &opts.center) {
        let event = InteractionEvent::NodeClicked(first.clone());
        on_interaction(&mut assembler, event).await?;
        sink.render(&GraphView::of(assembler.session()), None);
    }

    // Path query and animation
    let finder = PathFinder::new(backend);
    let results = finder.find_paths(&opts.source, &opts.target, 3, 6).await?;
    if results.is_empty() {
        println!(
            "{} no path between {} and {}",
            "--".yellow(),
            opts.source,
            opts.target
        );
    } else {
        println!(
            "{} {} path(s) found, best has {} hop(s)",
            "ok".green(),
            results.len(),
            results[0].length
        );
        let best = results[0].clone();
        let mut animator = Animator::new(opts.speed_ms);
        animator.load(results);
        animator.drive().await;
        if animator.state() != PlaybackState::Complete {
            bail!("animation ended in {:?}", animator.state());
        }
        if let Some(h) = animator.current_highlight() {
            sink.render(&GraphView::of(assembler.session()), Some(&h));
        }

        if let Some(dir) = &opts.export_dir {
            std::fs::create_dir_all(dir)?;
            let path_file = export::write_path(&best, dir)?;
            println!("{} wrote {}", "ok".green(), path_file.display());
        }
    }

    if let Some(dir) = &opts.export_dir {
        std::fs::create_dir_all(dir)?;
        let session_file = export::write_session(assembler.session(), dir)?;
        println!("{} wrote {}", "ok".green(), session_file.display());
    }

    Ok(())
}
