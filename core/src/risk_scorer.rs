//! Ring membership → per-account suspicion score.
//!
//! RULES:
//!   - Rings are applied in the order given (cycle, smurfing, shell).
//!   - Each membership adds the ring's risk, capped at `max_score`.
//!   - An account's `ring_id` is the last ring applied to it.
//!   - Accounts never seen in a ring are not reported.
//!   - Output is sorted by score, descending; ties keep account order.

use crate::{
    graph::Account,
    ring::{FraudRing, PatternType},
    types::AccountId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousAccount {
    pub account_id:        AccountId,
    pub suspicion_score:   u32,
    /// Distinct tags in first-seen order.
    pub detected_patterns: Vec<PatternType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_id:           Option<String>,
}

#[derive(Debug, Default)]
struct Tally<'r> {
    score:    u32,
    patterns: Vec<PatternType>,
    ring_id:  Option<&'r str>,
}

pub fn calculate_scores(
    accounts: &[Account],
    rings: &[FraudRing],
    max_score: u32,
) -> Vec<SuspiciousAccount> {
    let position: HashMap<&str, usize> = accounts
        .iter()
        .enumerate()
        .map(|(idx, a)| (a.id.as_str(), idx))
        .collect();
    let mut tallies: Vec<Tally<'_>> = accounts.iter().map(|_| Tally::default()).collect();

    for ring in rings {
        for member in &ring.member_accounts {
            let Some(&idx) = position.get(member.as_str()) else {
                log::warn!("scorer: ring {} names unknown account {member}", ring.ring_id);
                continue;
            };
            let tally = &mut tallies[idx];
            tally.score = tally.score.saturating_add(ring.risk_score).min(max_score);
            if !tally.patterns.contains(&ring.pattern_type) {
                tally.patterns.push(ring.pattern_type);
            }
            tally.ring_id = Some(ring.ring_id.as_str());
        }
    }

    let mut flagged: Vec<SuspiciousAccount> = accounts
        .iter()
        .zip(tallies)
        .filter(|(_, t)| t.score > 0)
        .map(|(account, t)| SuspiciousAccount {
            account_id:        account.id.clone(),
            suspicion_score:   t.score,
            detected_patterns: t.patterns,
            ring_id:           t.ring_id.map(str::to_string),
        })
        .collect();

    // Vec::sort_by is stable.
    flagged.sort_by(|a, b| b.suspicion_score.cmp(&a.suspicion_score));
    flagged
}
