// src/harness.rs
//! Synthetic-graph generation and merge timing against a per-element
//! budget. Runs entirely in process; only the session merge path is
//! exercised, never a network fetch.

use std::collections::VecDeque;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::backend::GraphPayload;
use crate::model::{Edge, EntityKind, Node, RelationKind};
use crate::session::{GraphSession, RootQuery};

/// Sizes the benchmark ladder steps through.
pub const LADDER_SIZES: [usize; 5] = [100, 500, 1000, 1500, 2000];
/// How many results the ladder retains for display.
pub const HISTORY_LIMIT: usize = 10;

/// Merge-time budget per node, in milliseconds.
const PASS_BUDGET_MS: f64 = 1.0;
const WARN_BUDGET_MS: f64 = 2.0;

/// Classification of a timed run against the per-node budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Pass,
    Warning,
    Fail,
}

/// One timed merge run.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub nodes: usize,
    pub edges: usize,
    pub elapsed_ms: f64,
    pub per_node_ms: f64,
    pub status: BudgetStatus,
}

/// Generates `node_count` nodes cycling through the entity kinds and
/// `round(node_count * edge_multiplier)` edges with random distinct
/// endpoints (no self-loops). Deterministic for a given seed.
#[must_use]
pub fn generate_with_seed(node_count: usize, edge_multiplier: f64, seed: u64) -> GraphPayload {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes: Vec<Node> = (0..node_count)
        .map(|i| {
            let kind = EntityKind::ALL[i % EntityKind::ALL.len()];
            Node::new(format!("N{i}"), format!("{} {i}", kind.label()), kind)
        })
        .collect();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let edge_count = if node_count < 2 {
        0
    } else {
        (node_count as f64 * edge_multiplier).round() as usize
    };

    let edges: Vec<Edge> = (0..edge_count)
        .map(|i| {
            let source = rng.gen_range(0..node_count);
            let mut target = rng.gen_range(0..node_count - 1);
            if target >= source {
                target += 1;
            }
            let kind = RelationKind::ALL[i % RelationKind::ALL.len()];
            Edge::new(format!("E{i}"), format!("N{source}"), format!("N{target}"), kind)
        })
        .collect();

    GraphPayload { nodes, edges }
}

/// As [`generate_with_seed`], with an arbitrary seed.
#[must_use]
pub fn generate(node_count: usize, edge_multiplier: f64) -> GraphPayload {
    generate_with_seed(node_count, edge_multiplier, rand::thread_rng().gen())
}

/// Times one merge of a generated graph into a fresh session and grades it
/// against the per-node budget.
#[must_use]
pub fn run_test(node_count: usize, edge_multiplier: f64) -> TestResult {
    let data = generate(node_count, edge_multiplier);
    let mut session = GraphSession::new(RootQuery::new("bench", 1, node_count.max(1)));

    let started = Instant::now();
    let delta = session.merge_batch(data.nodes, data.edges);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    #[allow(clippy::cast_precision_loss)]
    let per_node_ms = if delta.nodes_added.is_empty() {
        0.0
    } else {
        elapsed_ms / delta.nodes_added.len() as f64
    };
    let status = if per_node_ms <= PASS_BUDGET_MS {
        BudgetStatus::Pass
    } else if per_node_ms <= WARN_BUDGET_MS {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Fail
    };

    TestResult {
        nodes: delta.nodes_added.len(),
        edges: delta.edges_added.len(),
        elapsed_ms,
        per_node_ms,
        status,
    }
}

/// Runs the fixed size ladder, keeping the most recent results.
#[derive(Debug, Default)]
pub struct BenchmarkLadder {
    history: VecDeque<TestResult>,
}

impl BenchmarkLadder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every rung, yielding to the executor between rungs so a UI
    /// task sharing the runtime stays responsive.
    pub async fn run(&mut self, edge_multiplier: f64) -> Vec<TestResult> {
        let mut batch = Vec::with_capacity(LADDER_SIZES.len());
        for &size in &LADDER_SIZES {
            let result = run_test(size, edge_multiplier);
            self.record(result.clone());
            batch.push(result);
            tokio::task::yield_now().await;
        }
        batch
    }

    fn record(&mut self, result: TestResult) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(result);
    }

    /// The retained results, oldest first.
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = &TestResult> {
        self.history.iter()
    }
}
