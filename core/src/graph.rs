//! Transaction graph construction.
//!
//! RULE: the graph is mutated only inside `TransactionGraph::build`.
//! Detectors and the scorer receive `&TransactionGraph` / `&Adjacency`
//! and never write back.
//!
//! Accounts live in an arena (`Vec<Account>`) in order of first
//! appearance. Everything downstream addresses accounts by arena index;
//! identifiers are resolved once through `index`.

use crate::types::{AccountId, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id:             AccountId,
    pub in_degree:      usize,
    pub out_degree:     usize,
    pub total_incoming: f64,
    pub total_outgoing: f64,
}

impl Account {
    fn new(id: AccountId) -> Self {
        Self {
            id,
            in_degree: 0,
            out_degree: 0,
            total_incoming: 0.0,
            total_outgoing: 0.0,
        }
    }

    pub fn total_degree(&self) -> usize {
        self.in_degree + self.out_degree
    }
}

/// One directed edge per transaction. Parallel links are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source:    AccountId,
    pub target:    AccountId,
    pub amount:    f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    accounts: Vec<Account>,
    index:    HashMap<AccountId, usize>,
    links:    Vec<Link>,
    /// (source, target) arena indices, parallel to `links`.
    endpoints: Vec<(usize, usize)>,
}

impl TransactionGraph {
    /// Single pass over the transactions in input order.
    pub fn build(transactions: &[Transaction]) -> Self {
        let mut graph = Self {
            accounts:  Vec::new(),
            index:     HashMap::new(),
            links:     Vec::with_capacity(transactions.len()),
            endpoints: Vec::with_capacity(transactions.len()),
        };

        for tx in transactions {
            let sender = graph.intern(&tx.sender_id);
            let receiver = graph.intern(&tx.receiver_id);

            let s = &mut graph.accounts[sender];
            s.out_degree += 1;
            s.total_outgoing += tx.amount;

            let r = &mut graph.accounts[receiver];
            r.in_degree += 1;
            r.total_incoming += tx.amount;

            graph.links.push(Link {
                source:    tx.sender_id.clone(),
                target:    tx.receiver_id.clone(),
                amount:    tx.amount,
                timestamp: tx.timestamp.clone(),
            });
            graph.endpoints.push((sender, receiver));
        }

        log::debug!(
            "graph: {} accounts, {} links",
            graph.accounts.len(),
            graph.links.len()
        );
        graph
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.accounts.len();
        self.accounts.push(Account::new(id.to_string()));
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Accounts in order of first appearance.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.index.get(id).map(|&idx| &self.accounts[idx])
    }

    /// Identifier of the account at arena index `idx`.
    pub fn id(&self, idx: usize) -> &str {
        &self.accounts[idx].id
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Build the forward and reverse adjacency index from the link set.
    pub fn adjacency(&self) -> Adjacency {
        let mut successors = vec![Vec::new(); self.accounts.len()];
        let mut predecessors = vec![Vec::new(); self.accounts.len()];
        for &(source, target) in &self.endpoints {
            successors[source].push(target);
            predecessors[target].push(source);
        }
        Adjacency { successors, predecessors }
    }
}

/// Read-only traversal index over arena indices.
///
/// `successors[a]` holds one entry per outgoing link of `a`, in link order;
/// `predecessors[a]` one entry per incoming link. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct Adjacency {
    successors:   Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
}

impl Adjacency {
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.predecessors[idx]
    }

    /// The id-keyed view: account id → targets, one entry per outgoing link.
    pub fn to_id_map(&self, graph: &TransactionGraph) -> HashMap<AccountId, Vec<AccountId>> {
        graph
            .accounts()
            .iter()
            .enumerate()
            .map(|(idx, account)| {
                let targets = self.successors[idx]
                    .iter()
                    .map(|&t| graph.id(t).to_string())
                    .collect();
                (account.id.clone(), targets)
            })
            .collect()
    }
}
