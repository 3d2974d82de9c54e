//! Aggregation and dispersion ("smurfing").
//!
//! An account with at least `fan_in_threshold` incoming links heads a
//! fan-in ring; one with at least `fan_out_threshold` outgoing links heads
//! a fan-out ring. Counterparties are listed once per link, so repeat
//! senders appear repeatedly. An account over both thresholds heads two
//! rings; merging them is left to presentation.

use crate::{
    config::DetectionConfig,
    graph::{Adjacency, TransactionGraph},
    ring::{FraudRing, PatternType},
};

pub fn detect_smurfing(
    graph: &TransactionGraph,
    adjacency: &Adjacency,
    config: &DetectionConfig,
) -> Vec<FraudRing> {
    let mut rings = Vec::new();

    let weights = &config.risk_weights;

    for (idx, account) in graph.accounts().iter().enumerate() {
        if account.in_degree >= config.fan_in_threshold {
            let senders = adjacency.predecessors(idx);
            rings.push(hub_ring(graph, idx, senders, PatternType::FanIn, weights.fan_in));
        }
        if account.out_degree >= config.fan_out_threshold {
            let receivers = adjacency.successors(idx);
            rings.push(hub_ring(graph, idx, receivers, PatternType::FanOut, weights.fan_out));
        }
    }

    log::debug!("smurfing detector: {} rings", rings.len());
    rings
}

fn hub_ring(
    graph: &TransactionGraph,
    hub: usize,
    counterparties: &[usize],
    pattern: PatternType,
    risk_score: u32,
) -> FraudRing {
    let hub_id = graph.id(hub);
    let mut members = Vec::with_capacity(counterparties.len() + 1);
    members.push(hub_id.to_string());
    members.extend(counterparties.iter().map(|&c| graph.id(c).to_string()));

    FraudRing {
        ring_id:         format!("{}_{}", pattern.ring_prefix(), hub_id),
        member_accounts: members,
        pattern_type:    pattern,
        risk_score,
    }
}
