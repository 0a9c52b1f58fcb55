// src/cli/bench.rs
//! Runs the merge-performance ladder and prints a graded table.

use anyhow::Result;
use colored::Colorize;

use crate::harness::{BenchmarkLadder, BudgetStatus, TestResult};

pub async fn run(multiplier: f64, rounds: usize) -> Result<()> {
    let mut ladder = BenchmarkLadder::new();

    println!(
        "{:>8} {:>8} {:>12} {:>12}  {}",
        "nodes", "edges", "elapsed", "per node", "status"
    );
    for _ in 0..rounds.max(1) {
        let batch = ladder.run(multiplier).await;
        for result in &batch {
            print_row(result);
        }
    }

    let worst = ladder
        .history()
        .map(|r| r.status)
        .max_by_key(|s| severity(*s));
    if let Some(BudgetStatus::Fail) = worst {
        println!("{}", "merge budget exceeded".red().bold());
    }
    Ok(())
}

fn print_row(result: &TestResult) {
    let status = match result.status {
        BudgetStatus::Pass => "pass".green(),
        BudgetStatus::Warning => "warning".yellow(),
        BudgetStatus::Fail => "fail".red().bold(),
    };
    println!(
        "{:>8} {:>8} {:>10.2}ms {:>10.4}ms  {status}",
        result.nodes, result.edges, result.elapsed_ms, result.per_node_ms
    );
}

fn severity(status: BudgetStatus) -> u8 {
    match status {
        BudgetStatus::Pass => 0,
        BudgetStatus::Warning => 1,
        BudgetStatus::Fail => 2,
    }
}
