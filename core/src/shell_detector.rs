//! Layered shell networks.
//!
//! Shell candidates are accounts with `0 < in + out <= shell_tx_limit`.
//! Candidates are grouped into connected components over links whose both
//! ends are candidates, ignoring direction. A component of two or more
//! accounts is a shell ring; a lone low-volume account is not.
//!
//! A component whose candidate links form exactly one simple cycle, with a
//! member count inside the cycle length range, is the cycle detector's
//! finding, not a layering chain, and is skipped here.

use crate::{
    config::DetectionConfig,
    graph::{Adjacency, TransactionGraph},
    ring::{FraudRing, PatternType},
};

pub fn detect_shells(
    graph: &TransactionGraph,
    adjacency: &Adjacency,
    config: &DetectionConfig,
) -> Vec<FraudRing> {
    let candidate: Vec<bool> = graph
        .accounts()
        .iter()
        .map(|a| {
            let total = a.total_degree();
            total > 0 && total <= config.shell_tx_limit
        })
        .collect();

    let mut visited = vec![false; candidate.len()];
    let mut rings = Vec::new();
    let mut skipped_loops = 0usize;

    for seed in 0..candidate.len() {
        if !candidate[seed] || visited[seed] {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![seed];
        visited[seed] = true;

        while let Some(current) = stack.pop() {
            component.push(current);
            let neighbours = adjacency
                .successors(current)
                .iter()
                .chain(adjacency.predecessors(current));
            for &next in neighbours {
                if candidate[next] && !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        if component.len() < 2 {
            continue;
        }
        if is_closed_loop(&component, &candidate, adjacency, config) {
            skipped_loops += 1;
            continue;
        }

        let members: Vec<String> = component.iter().map(|&idx| graph.id(idx).to_string()).collect();
        rings.push(FraudRing {
            ring_id:         format!("{}_{}", PatternType::Shell.ring_prefix(), members[0]),
            member_accounts: members,
            pattern_type:    PatternType::Shell,
            risk_score:      config.risk_weights.shell,
        });
    }

    log::debug!(
        "shell detector: {} rings, {} closed loops left to cycle detection",
        rings.len(),
        skipped_loops
    );
    rings
}

/// True when the component is a single simple cycle the cycle detector
/// reports: every member has exactly one distinct candidate successor and
/// one distinct candidate predecessor. Parallel links count once.
fn is_closed_loop(
    component: &[usize],
    candidate: &[bool],
    adjacency: &Adjacency,
    config: &DetectionConfig,
) -> bool {
    if component.len() < config.min_cycle_len || component.len() > config.max_cycle_len {
        return false;
    }
    component.iter().all(|&idx| {
        distinct_candidates(adjacency.successors(idx), candidate) == 1
            && distinct_candidates(adjacency.predecessors(idx), candidate) == 1
    })
}

fn distinct_candidates(neighbours: &[usize], candidate: &[bool]) -> usize {
    let mut found: Vec<usize> = neighbours.iter().copied().filter(|&n| candidate[n]).collect();
    found.sort_unstable();
    found.dedup();
    found.len()
}
