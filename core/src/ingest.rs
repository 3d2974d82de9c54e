//! CSV ingestion.
//!
//! RULE: the engine assumes well-formed input. Everything that can be wrong
//! with a record is caught here, before a graph is built, and reported with
//! its line number.
//!
//! Accepted header names:
//!   sender    — `sender_id` or `from_account`
//!   receiver  — `receiver_id` or `to_account`
//!   amount    — `amount`
//!   optional  — `transaction_id`, `timestamp`

use crate::{
    error::{TraceError, TraceResult},
    types::Transaction,
};
use serde::Deserialize;
use std::io::{Read, Write};

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default, alias = "from_account")]
    sender_id: Option<String>,
    #[serde(default, alias = "to_account")]
    receiver_id: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

const REQUIRED_COLUMNS: [(&str, &[&str]); 3] = [
    ("sender_id", &["sender_id", "from_account"]),
    ("receiver_id", &["receiver_id", "to_account"]),
    ("amount", &["amount"]),
];

pub fn read_transactions_from_path(path: &str) -> TraceResult<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    read_transactions(file)
}

pub fn read_transactions<R: Read>(reader: R) -> TraceResult<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for (column, names) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| names.contains(&h)) {
            return Err(TraceError::MissingColumn { column });
        }
    }

    let mut transactions = Vec::new();
    for (row, record) in rdr.deserialize::<RawRecord>().enumerate() {
        // Header is line 1.
        let line = row as u64 + 2;
        let raw = record?;
        transactions.push(validate(raw, line)?);
    }

    log::info!("ingest: {} transactions read", transactions.len());
    Ok(transactions)
}

fn validate(raw: RawRecord, line: u64) -> TraceResult<Transaction> {
    let sender_id = non_empty(raw.sender_id)
        .ok_or(TraceError::MissingField { line, field: "sender_id" })?;
    let receiver_id = non_empty(raw.receiver_id)
        .ok_or(TraceError::MissingField { line, field: "receiver_id" })?;
    let amount_text = non_empty(raw.amount)
        .ok_or(TraceError::MissingField { line, field: "amount" })?;

    let amount = match amount_text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => return Err(TraceError::InvalidAmount { line, value: amount_text }),
    };

    Ok(Transaction {
        transaction_id: non_empty(raw.transaction_id).unwrap_or_else(|| format!("TX-{line}")),
        sender_id,
        receiver_id,
        amount,
        timestamp: raw.timestamp.unwrap_or_default(),
    })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Write transactions with the canonical header. The output reads back
/// through `read_transactions` unchanged.
pub fn write_transactions<W: Write>(writer: W, transactions: &[Transaction]) -> TraceResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for tx in transactions {
        wtr.serialize(tx)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_transactions_to_path(path: &str, transactions: &[Transaction]) -> TraceResult<()> {
    let file = std::fs::File::create(path)?;
    write_transactions(file, transactions)
}
