//! Circular fund routing.
//!
//! Enumerates simple directed cycles whose member count lies in
//! `[min_cycle_len, max_cycle_len]`. Every account with both incoming and
//! outgoing links seeds a backtracking DFS. The length cap bounds the work
//! on dense graphs; longer cycles are not reported.
//!
//! The same cycle is reached once per member (and once per parallel link),
//! so each hit is keyed by its sorted member set and only the first is kept.

use crate::{
    config::DetectionConfig,
    graph::{Adjacency, TransactionGraph},
    ring::{FraudRing, PatternType},
    types::AccountId,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Search state for one `detect_cycles` call. Nothing survives the call.
struct CycleSearch<'a> {
    graph:     &'a TransactionGraph,
    adjacency: &'a Adjacency,
    min_len:   usize,
    max_len:   usize,
    risk:      u32,
    path:      Vec<usize>,
    visited:   Vec<bool>,
    seen:      HashSet<Vec<AccountId>>,
    rings:     Vec<FraudRing>,
}

impl<'a> CycleSearch<'a> {
    fn extend(&mut self, current: usize, start: usize) {
        let adjacency = self.adjacency;
        for &next in adjacency.successors(current) {
            if next == start {
                if self.path.len() >= self.min_len {
                    self.record();
                }
            } else if !self.visited[next] && self.path.len() < self.max_len {
                self.visited[next] = true;
                self.path.push(next);
                self.extend(next, start);
                self.path.pop();
                self.visited[next] = false;
            }
        }
    }

    fn record(&mut self) {
        let members: Vec<AccountId> = self
            .path
            .iter()
            .map(|&idx| self.graph.id(idx).to_string())
            .collect();

        let mut key = members.clone();
        key.sort();
        if self.seen.contains(&key) {
            return;
        }

        self.rings.push(FraudRing {
            ring_id:         cycle_ring_id(&key),
            member_accounts: members,
            pattern_type:    PatternType::Cycle,
            risk_score:      self.risk,
        });
        self.seen.insert(key);
    }
}

/// Content-derived id: the same member set always yields the same id,
/// whichever member the cycle was discovered from.
fn cycle_ring_id(sorted_members: &[AccountId]) -> String {
    let canonical = sorted_members.join("\u{1f}");
    let digest = Uuid::new_v5(&Uuid::NAMESPACE_OID, canonical.as_bytes())
        .simple()
        .to_string()
        .to_uppercase();
    format!("{}_{}", PatternType::Cycle.ring_prefix(), &digest[..8])
}

pub fn detect_cycles(
    graph: &TransactionGraph,
    adjacency: &Adjacency,
    config: &DetectionConfig,
) -> Vec<FraudRing> {
    let mut search = CycleSearch {
        graph,
        adjacency,
        min_len: config.min_cycle_len,
        max_len: config.max_cycle_len,
        risk:    config.risk_weights.cycle,
        path:    Vec::with_capacity(config.max_cycle_len),
        visited: vec![false; graph.account_count()],
        seen:    HashSet::new(),
        rings:   Vec::new(),
    };

    for (idx, account) in graph.accounts().iter().enumerate() {
        if account.in_degree == 0 || account.out_degree == 0 {
            continue;
        }
        search.visited[idx] = true;
        search.path.push(idx);
        search.extend(idx, idx);
        search.path.pop();
        search.visited[idx] = false;
    }

    log::debug!("cycle detector: {} rings", search.rings.len());
    search.rings
}
