//! Shared primitive types used across the engine and its collaborators.

use serde::{Deserialize, Serialize};

/// Opaque, case-sensitive account identifier.
pub type AccountId = String;

/// A single money transfer as handed to the engine.
///
/// Immutable once ingested. The engine only interprets the two account
/// identifiers and the amount; `transaction_id` and `timestamp` are carried
/// through to links untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub sender_id:      AccountId,
    pub receiver_id:    AccountId,
    pub amount:         f64,
    pub timestamp:      String,
}

impl Transaction {
    pub fn new(
        transaction_id: impl Into<String>,
        sender_id: impl Into<AccountId>,
        receiver_id: impl Into<AccountId>,
        amount: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            sender_id:      sender_id.into(),
            receiver_id:    receiver_id.into(),
            amount,
            timestamp:      timestamp.into(),
        }
    }
}
