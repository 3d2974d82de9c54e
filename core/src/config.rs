//! Detection thresholds and ring risk weights.
//!
//! Defaults reproduce the fixed rule set. A JSON file may override any
//! subset of keys; absent keys keep their default.

use serde::{Deserialize, Serialize};

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const MIN_CYCLE_LEN: usize = 3;
pub const MAX_CYCLE_LEN: usize = 5;
pub const FAN_THRESHOLD_IN: usize = 10;
pub const FAN_THRESHOLD_OUT: usize = 10;
pub const SHELL_TX_LIMIT: usize = 5;
pub const MAX_SUSPICION_SCORE: u32 = 100;

pub const CYCLE_RISK: u32 = 90;
pub const FAN_IN_RISK: u32 = 80;
pub const FAN_OUT_RISK: u32 = 80;
pub const SHELL_RISK: u32 = 85;

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub cycle:   u32,
    pub fan_in:  u32,
    pub fan_out: u32,
    pub shell:   u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            cycle:   CYCLE_RISK,
            fan_in:  FAN_IN_RISK,
            fan_out: FAN_OUT_RISK,
            shell:   SHELL_RISK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Fewest distinct accounts in a reported cycle.
    pub min_cycle_len: usize,
    /// Most distinct accounts in a reported cycle. Also the DFS depth cap.
    pub max_cycle_len: usize,
    pub fan_in_threshold: usize,
    pub fan_out_threshold: usize,
    /// Inclusive upper bound on in+out degree for a shell candidate.
    pub shell_tx_limit: usize,
    pub max_suspicion_score: u32,
    pub risk_weights: RiskWeights,
    /// Run the three detectors on scoped threads. Output order is unchanged.
    pub parallel_detectors: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_cycle_len:       MIN_CYCLE_LEN,
            max_cycle_len:       MAX_CYCLE_LEN,
            fan_in_threshold:    FAN_THRESHOLD_IN,
            fan_out_threshold:   FAN_THRESHOLD_OUT,
            shell_tx_limit:      SHELL_TX_LIMIT,
            max_suspicion_score: MAX_SUSPICION_SCORE,
            risk_weights:        RiskWeights::default(),
            parallel_detectors:  false,
        }
    }
}

impl DetectionConfig {
    /// Load overrides from a JSON file.
    /// In tests, use DetectionConfig::default().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: DetectionConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.min_cycle_len < 2 {
            anyhow::bail!("min_cycle_len must be at least 2, got {}", self.min_cycle_len);
        }
        if self.max_cycle_len < self.min_cycle_len {
            anyhow::bail!(
                "max_cycle_len ({}) is below min_cycle_len ({})",
                self.max_cycle_len,
                self.min_cycle_len
            );
        }
        if self.fan_in_threshold == 0 || self.fan_out_threshold == 0 {
            anyhow::bail!("fan thresholds must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DetectionConfig::from_json(r#"{ "fan_in_threshold": 4 }"#).unwrap();
        assert_eq!(config.fan_in_threshold, 4);
        assert_eq!(config.fan_out_threshold, FAN_THRESHOLD_OUT);
        assert_eq!(config.risk_weights, RiskWeights::default());
    }

    #[test]
    fn nested_weights_override() {
        let config =
            DetectionConfig::from_json(r#"{ "risk_weights": { "shell": 60 } }"#).unwrap();
        assert_eq!(config.risk_weights.shell, 60);
        assert_eq!(config.risk_weights.cycle, CYCLE_RISK);
    }

    #[test]
    fn inverted_cycle_bounds_rejected() {
        let err = DetectionConfig::from_json(r#"{ "min_cycle_len": 6, "max_cycle_len": 4 }"#);
        assert!(err.is_err(), "max below min must be rejected");
    }
}
