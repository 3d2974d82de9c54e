//! Fraud ring values emitted by the detectors.

use crate::types::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern label carried by a ring and collected as a tag on each member.
/// Variants are appended only; the serialized names are part of the
/// export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Cycle,
    FanIn,
    FanOut,
    Shell,
    /// Presentation-only label for an account flagged by several patterns.
    /// No detector produces it.
    Mixed,
}

impl PatternType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cycle  => "cycle",
            Self::FanIn  => "fan_in",
            Self::FanOut => "fan_out",
            Self::Shell  => "shell",
            Self::Mixed  => "mixed",
        }
    }

    /// Ring id prefix. Cycle ids are suffixed with a content hash, the
    /// others with an account id.
    pub fn ring_prefix(&self) -> &'static str {
        match self {
            Self::Cycle  => "CYC",
            Self::FanIn  => "FANIN",
            Self::FanOut => "FANOUT",
            Self::Shell  => "SHELL",
            Self::Mixed  => "MIXED",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named group of accounts jointly exhibiting one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudRing {
    pub ring_id:         String,
    pub member_accounts: Vec<AccountId>,
    pub pattern_type:    PatternType,
    pub risk_score:      u32,
}

impl FraudRing {
    pub fn len(&self) -> usize {
        self.member_accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_accounts.is_empty()
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.member_accounts.iter().any(|m| m == account_id)
    }
}
