//! ringtrace-core: transaction-graph fraud ring detection.
//!
//! Pipeline: transactions → `graph` → detectors (`cycle_detector`,
//! `smurfing_detector`, `shell_detector`) → `risk_scorer` → `report`.
//! `engine` wires the pipeline in its fixed order. `ingest` and
//! `synthetic` produce engine input; neither influences detection.

pub mod config;
pub mod cycle_detector;
pub mod engine;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod report;
pub mod ring;
pub mod risk_scorer;
pub mod rng;
pub mod shell_detector;
pub mod smurfing_detector;
pub mod synthetic;
pub mod types;

pub use config::DetectionConfig;
pub use engine::{analyze, FraudEngine};
pub use error::{TraceError, TraceResult};
pub use report::{AnalysisResult, AnalysisSummary};
pub use ring::{FraudRing, PatternType};
pub use risk_scorer::SuspiciousAccount;
pub use types::{AccountId, Transaction};
