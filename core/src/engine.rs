//! The detection engine.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Cycle detector
//!   2. Smurfing detector  (fan-in, fan-out)
//!   3. Shell detector
//!   4. Risk scorer        (after all detectors)
//!
//! RULES:
//!   - The graph is built once per run and frozen before any detector runs.
//!   - Detectors only read the graph and return their own ring lists.
//!   - Ring lists are concatenated in execution order, even when the
//!     detectors run in parallel. The scorer's last-ring-wins `ring_id`
//!     depends on that order.
//!   - Nothing carries over between runs.

use crate::{
    config::DetectionConfig,
    cycle_detector::detect_cycles,
    graph::{Adjacency, TransactionGraph},
    report::{AnalysisResult, AnalysisSummary},
    ring::FraudRing,
    risk_scorer::calculate_scores,
    shell_detector::detect_shells,
    smurfing_detector::detect_smurfing,
    types::Transaction,
};
use std::time::Instant;

/// The fixed set of pattern detectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detector {
    Cycle,
    Smurfing,
    Shell,
}

impl Detector {
    pub const EXECUTION_ORDER: [Detector; 3] = [Detector::Cycle, Detector::Smurfing, Detector::Shell];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cycle    => "cycle",
            Self::Smurfing => "smurfing",
            Self::Shell    => "shell",
        }
    }

    pub fn run(
        &self,
        graph: &TransactionGraph,
        adjacency: &Adjacency,
        config: &DetectionConfig,
    ) -> Vec<FraudRing> {
        match self {
            Self::Cycle    => detect_cycles(graph, adjacency, config),
            Self::Smurfing => detect_smurfing(graph, adjacency, config),
            Self::Shell    => detect_shells(graph, adjacency, config),
        }
    }
}

pub struct FraudEngine {
    config: DetectionConfig,
}

impl FraudEngine {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Build the graph, run every detector, score, and assemble the result.
    /// `processing_time_seconds` covers detection and scoring only.
    pub fn analyze(&self, transactions: &[Transaction]) -> AnalysisResult {
        let graph = TransactionGraph::build(transactions);
        self.analyze_graph(&graph)
    }

    pub fn analyze_graph(&self, graph: &TransactionGraph) -> AnalysisResult {
        let adjacency = graph.adjacency();

        let started = Instant::now();
        let fraud_rings = self.detect_all(graph, &adjacency);
        let suspicious_accounts =
            calculate_scores(graph.accounts(), &fraud_rings, self.config.max_suspicion_score);
        let elapsed = started.elapsed().as_secs_f64();

        let summary = AnalysisSummary {
            total_accounts_analyzed:     graph.account_count(),
            suspicious_accounts_flagged: suspicious_accounts.len(),
            fraud_rings_detected:        fraud_rings.len(),
            processing_time_seconds:     elapsed,
        };

        log::info!(
            "analysis: {} accounts, {} rings, {} flagged in {:.3}s",
            summary.total_accounts_analyzed,
            summary.fraud_rings_detected,
            summary.suspicious_accounts_flagged,
            elapsed
        );

        AnalysisResult {
            suspicious_accounts,
            fraud_rings,
            summary,
        }
    }

    /// All rings, concatenated in `Detector::EXECUTION_ORDER`.
    pub fn detect_all(&self, graph: &TransactionGraph, adjacency: &Adjacency) -> Vec<FraudRing> {
        let per_detector = if self.config.parallel_detectors {
            self.run_parallel(graph, adjacency)
        } else {
            Detector::EXECUTION_ORDER
                .iter()
                .map(|d| d.run(graph, adjacency, &self.config))
                .collect()
        };

        let mut rings = Vec::new();
        for (detector, found) in Detector::EXECUTION_ORDER.iter().zip(per_detector) {
            log::debug!("detector {}: {} rings", detector.name(), found.len());
            rings.extend(found);
        }
        rings
    }

    fn run_parallel(&self, graph: &TransactionGraph, adjacency: &Adjacency) -> Vec<Vec<FraudRing>> {
        let config = &self.config;
        std::thread::scope(|scope| {
            let handles: Vec<_> = Detector::EXECUTION_ORDER
                .into_iter()
                .map(|d| scope.spawn(move || d.run(graph, adjacency, config)))
                .collect();
            // Joined in spawn order, so completion order never leaks out.
            handles
                .into_iter()
                .map(|h| match h.join() {
                    Ok(rings) => rings,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

impl Default for FraudEngine {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Run the engine with default thresholds.
pub fn analyze(transactions: &[Transaction]) -> AnalysisResult {
    FraudEngine::default().analyze(transactions)
}
