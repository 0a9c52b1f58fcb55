// src/bin/graphscout.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use graphscout_core::cli::{bench, explore, export, Cli, Commands};

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Bench { multiplier, rounds } => bench::run(multiplier, rounds).await,
        Commands::Explore {
            nodes,
            multiplier,
            seed,
            center,
            source,
            target,
            speed_ms,
            export_dir,
        } => {
            explore::run(explore::ExploreOpts {
                nodes,
                multiplier,
                seed,
                center,
                source,
                target,
                speed_ms,
                export_dir,
            })
            .await
        }
        Commands::Export {
            nodes,
            multiplier,
            seed,
            center,
            source,
            target,
            out_dir,
        } => {
            export::run(export::ExportOpts {
                nodes,
                multiplier,
                seed,
                center,
                source,
                target,
                out_dir,
            })
            .await
        }
    }
}
