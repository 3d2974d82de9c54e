//! Analysis output and its export formats.
//!
//! Export never feeds back into detection: every function here is a pure
//! view of an `AnalysisResult`.

use crate::{
    error::TraceResult,
    ring::{FraudRing, PatternType},
    risk_scorer::SuspiciousAccount,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_accounts_analyzed:     usize,
    pub suspicious_accounts_flagged: usize,
    pub fraud_rings_detected:        usize,
    pub processing_time_seconds:     f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sorted by suspicion score, descending.
    pub suspicious_accounts: Vec<SuspiciousAccount>,
    /// Detection order: cycle, smurfing, shell.
    pub fraud_rings:         Vec<FraudRing>,
    pub summary:             AnalysisSummary,
}

impl AnalysisResult {
    pub fn to_json_pretty(&self) -> TraceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &str) -> TraceResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn from_json(content: &str) -> TraceResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn rings_of(&self, pattern: PatternType) -> impl Iterator<Item = &FraudRing> {
        self.fraud_rings.iter().filter(move |r| r.pattern_type == pattern)
    }

    pub fn account(&self, account_id: &str) -> Option<&SuspiciousAccount> {
        self.suspicious_accounts.iter().find(|a| a.account_id == account_id)
    }

    /// Ring counts keyed by pattern name.
    pub fn ring_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for ring in &self.fraud_rings {
            *counts.entry(ring.pattern_type.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Plain-text summary with the `top` highest-scoring accounts.
    pub fn render_text(&self, top: usize) -> String {
        let s = &self.summary;
        let mut out = String::new();
        let _ = writeln!(out, "=== ANALYSIS SUMMARY ===");
        let _ = writeln!(out, "  accounts analyzed:  {}", s.total_accounts_analyzed);
        let _ = writeln!(out, "  accounts flagged:   {}", s.suspicious_accounts_flagged);
        let _ = writeln!(out, "  rings detected:     {}", s.fraud_rings_detected);
        for (pattern, count) in self.ring_counts() {
            let _ = writeln!(out, "    {pattern:<8} {count}");
        }
        let _ = writeln!(out, "  processing time:    {:.3}s", s.processing_time_seconds);

        let _ = writeln!(out);
        let _ = writeln!(out, "=== TOP SUSPICIOUS ACCOUNTS ===");
        if self.suspicious_accounts.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for account in self.suspicious_accounts.iter().take(top) {
            let patterns: Vec<&str> = account.detected_patterns.iter().map(|p| p.name()).collect();
            let _ = writeln!(
                out,
                "  {:<20} score {:>3} | {} | ring {}",
                account.account_id,
                account.suspicion_score,
                patterns.join(","),
                account.ring_id.as_deref().unwrap_or("-")
            );
        }
        out
    }
}
