//! Seeded synthetic transaction sets with planted fraud patterns.
//!
//! Background transfers flow between `ACC_*` accounts. Each planted pattern
//! gets its own account namespace, so the planted structure is exactly what
//! the detectors should report:
//!   - `CYC{n}_{k}`      one simple cycle of 3..=5 accounts
//!   - `FANIN{n}_HUB`    receives once from each of 10..=15 `FANIN{n}_S{k}`
//!   - `FANOUT{n}_HUB`   sends once to each of 10..=15 `FANOUT{n}_R{k}`
//!   - `SHELL{n}_{k}`    a directed chain of 3..=5 pass-through accounts
//!
//! Same seed and config → identical transaction list.

use crate::{
    rng::{Stream, StreamRng},
    types::{AccountId, Transaction},
};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// 2024-01-01T00:00:00Z
const BASE_EPOCH_SECS: i64 = 1_704_067_200;
const SECS_BETWEEN_TRANSFERS: i64 = 97;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub background_accounts:     usize,
    pub background_transactions: usize,
    pub cycles:                  usize,
    pub fan_in_hubs:             usize,
    pub fan_out_hubs:            usize,
    pub shell_chains:            usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            background_accounts:     200,
            background_transactions: 400,
            cycles:                  3,
            fan_in_hubs:             2,
            fan_out_hubs:            2,
            shell_chains:            2,
        }
    }
}

/// Ground truth for what was planted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantedPatterns {
    pub cycles:       Vec<Vec<AccountId>>,
    pub fan_in_hubs:  Vec<AccountId>,
    pub fan_out_hubs: Vec<AccountId>,
    pub shell_chains: Vec<Vec<AccountId>>,
}

#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub seed:         u64,
    pub transactions: Vec<Transaction>,
    pub planted:      PlantedPatterns,
}

struct Transfer {
    from:   AccountId,
    to:     AccountId,
    amount: f64,
}

pub fn generate(seed: u64, config: &SyntheticConfig) -> SyntheticDataset {
    let mut transfers = Vec::new();
    let mut planted = PlantedPatterns::default();

    let mut rng = StreamRng::new(seed, Stream::Background);
    if config.background_accounts >= 2 {
        for _ in 0..config.background_transactions {
            let from = rng.below(config.background_accounts);
            let mut to = rng.below(config.background_accounts - 1);
            if to >= from {
                to += 1;
            }
            transfers.push(Transfer {
                from:   format!("ACC_{from:05}"),
                to:     format!("ACC_{to:05}"),
                amount: rng.amount(20.0, 1.6),
            });
        }
    }

    let mut rng = StreamRng::new(seed, Stream::Cycle);
    for n in 0..config.cycles {
        let len = rng.between(3, 5);
        let members: Vec<AccountId> = (0..len).map(|k| format!("CYC{n}_{k}")).collect();
        let amount = rng.amount(5_000.0, 3.0);
        for k in 0..len {
            transfers.push(Transfer {
                from:   members[k].clone(),
                to:     members[(k + 1) % len].clone(),
                // Each hop skims a little.
                amount: (amount * (1.0 - 0.02 * k as f64) * 100.0).round() / 100.0,
            });
        }
        planted.cycles.push(members);
    }

    let mut rng = StreamRng::new(seed, Stream::FanIn);
    for n in 0..config.fan_in_hubs {
        let hub = format!("FANIN{n}_HUB");
        for k in 0..rng.between(10, 15) {
            transfers.push(Transfer {
                from:   format!("FANIN{n}_S{k}"),
                to:     hub.clone(),
                amount: rng.amount(800.0, 4.0),
            });
        }
        planted.fan_in_hubs.push(hub);
    }

    let mut rng = StreamRng::new(seed, Stream::FanOut);
    for n in 0..config.fan_out_hubs {
        let hub = format!("FANOUT{n}_HUB");
        for k in 0..rng.between(10, 15) {
            transfers.push(Transfer {
                from:   hub.clone(),
                to:     format!("FANOUT{n}_R{k}"),
                amount: rng.amount(800.0, 4.0),
            });
        }
        planted.fan_out_hubs.push(hub);
    }

    let mut rng = StreamRng::new(seed, Stream::Shell);
    for n in 0..config.shell_chains {
        let len = rng.between(3, 5);
        let members: Vec<AccountId> = (0..len).map(|k| format!("SHELL{n}_{k}")).collect();
        let amount = rng.amount(9_000.0, 5.0);
        for pair in members.windows(2) {
            transfers.push(Transfer {
                from:   pair[0].clone(),
                to:     pair[1].clone(),
                amount,
            });
        }
        planted.shell_chains.push(members);
    }

    // Fisher–Yates, so planted links are not contiguous in the input.
    let mut rng = StreamRng::new(seed, Stream::Shuffle);
    for i in (1..transfers.len()).rev() {
        let j = rng.below(i + 1);
        transfers.swap(i, j);
    }

    let transactions = transfers
        .into_iter()
        .enumerate()
        .map(|(i, t)| Transaction {
            transaction_id: format!("SYN-{seed}-{i:06}"),
            sender_id:      t.from,
            receiver_id:    t.to,
            amount:         t.amount,
            timestamp:      timestamp_for(i),
        })
        .collect();

    SyntheticDataset { seed, transactions, planted }
}

fn timestamp_for(i: usize) -> String {
    Utc.timestamp_opt(BASE_EPOCH_SECS + i as i64 * SECS_BETWEEN_TRANSFERS, 0)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}
