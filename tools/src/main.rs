//! ringtrace: run fraud ring detection over a transaction file.
//!
//! Usage:
//!   ringtrace --input transactions.csv --output result.json
//!   ringtrace --synthetic 42 --export-csv synthetic.csv --top 20
//!   ringtrace --input transactions.csv --config thresholds.json

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use ringtrace_core::{
    config::DetectionConfig,
    engine::FraudEngine,
    ingest,
    report::AnalysisResult,
    synthetic::{self, SyntheticConfig},
    types::Transaction,
};
use std::env;

/// Written by `--output`: the analysis plus when it was produced.
#[derive(serde::Serialize)]
struct ReportEnvelope<'a> {
    generated_at: DateTime<Utc>,
    source: String,
    transactions: usize,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = string_arg(&args, "--input");
    let synthetic_seed = string_arg(&args, "--synthetic")
        .map(|s| s.parse::<u64>().with_context(|| format!("--synthetic expects a seed, got '{s}'")))
        .transpose()?;
    let config_path = string_arg(&args, "--config");
    let output = string_arg(&args, "--output");
    let export_csv = string_arg(&args, "--export-csv");
    let top = parse_arg(&args, "--top", 10usize);

    let config = match config_path {
        Some(path) => DetectionConfig::load(path)?,
        None => DetectionConfig::default(),
    };

    let (source, transactions) = load_transactions(input, synthetic_seed)?;

    println!("ringtrace");
    println!("  source:        {source}");
    println!("  transactions:  {}", transactions.len());
    println!("  config:        {}", config_path.unwrap_or("(defaults)"));
    println!();

    if let Some(path) = export_csv {
        ingest::write_transactions_to_path(path, &transactions)
            .with_context(|| format!("Cannot write {path}"))?;
        log::info!("Transactions exported to {path}");
    }

    let engine = FraudEngine::new(config);
    let result = engine.analyze(&transactions);

    print!("{}", result.render_text(top));

    if let Some(path) = output {
        let envelope = ReportEnvelope {
            generated_at: Utc::now(),
            source,
            transactions: transactions.len(),
            result: &result,
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        std::fs::write(path, json).with_context(|| format!("Cannot write {path}"))?;
        println!();
        println!("Report written to {path}");
    }

    Ok(())
}

fn load_transactions(input: Option<&str>, seed: Option<u64>) -> Result<(String, Vec<Transaction>)> {
    match (input, seed) {
        (Some(_), Some(_)) => bail!("--input and --synthetic are mutually exclusive"),
        (None, None) => bail!("one of --input <csv> or --synthetic <seed> is required"),
        (Some(path), None) => {
            let transactions = ingest::read_transactions_from_path(path)
                .with_context(|| format!("Cannot ingest {path}"))?;
            Ok((path.to_string(), transactions))
        }
        (None, Some(seed)) => {
            let data = synthetic::generate(seed, &SyntheticConfig::default());
            log::info!(
                "Synthetic dataset: {} cycles, {} fan-in, {} fan-out, {} shell chains planted",
                data.planted.cycles.len(),
                data.planted.fan_in_hubs.len(),
                data.planted.fan_out_hubs.len(),
                data.planted.shell_chains.len()
            );
            Ok((format!("synthetic:{seed}"), data.transactions))
        }
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
