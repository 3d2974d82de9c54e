//! CSV ingestion: accepted layouts and the errors raised for bad records.

use ringtrace_core::{
    analyze,
    ingest::{read_transactions, write_transactions},
    synthetic::{generate, SyntheticConfig},
    TraceError,
};

#[test]
fn reads_canonical_columns() {
    let csv = "\
transaction_id,sender_id,receiver_id,amount,timestamp
T1,A,B,100.50,2024-01-01 10:00:00
T2,B,C,99.00,2024-01-01 11:00:00
";
    let txns = read_transactions(csv.as_bytes()).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].transaction_id, "T1");
    assert_eq!(txns[0].sender_id, "A");
    assert_eq!(txns[0].amount, 100.50);
    assert_eq!(txns[1].timestamp, "2024-01-01 11:00:00");
}

#[test]
fn accepts_account_column_aliases() {
    let csv = "from_account,to_account,amount\nA,B,5\nB,A,5\n";
    let txns = read_transactions(csv.as_bytes()).unwrap();
    assert_eq!(txns[1].sender_id, "B");
    assert_eq!(txns[1].receiver_id, "A");
}

#[test]
fn trims_whitespace() {
    let csv = "sender_id, receiver_id, amount\n  A , B ,  7 \n";
    let txns = read_transactions(csv.as_bytes()).unwrap();
    assert_eq!(txns[0].sender_id, "A");
    assert_eq!(txns[0].receiver_id, "B");
    assert_eq!(txns[0].amount, 7.0);
}

#[test]
fn missing_column_is_named() {
    let csv = "sender_id,amount\nA,5\n";
    match read_transactions(csv.as_bytes()) {
        Err(TraceError::MissingColumn { column }) => assert_eq!(column, "receiver_id"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn empty_sender_reports_line() {
    let csv = "sender_id,receiver_id,amount\nA,B,1\n,C,2\n";
    match read_transactions(csv.as_bytes()) {
        Err(TraceError::MissingField { line, field }) => {
            assert_eq!(line, 3);
            assert_eq!(field, "sender_id");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn non_numeric_amount_rejected() {
    let csv = "sender_id,receiver_id,amount\nA,B,lots\n";
    let err = read_transactions(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("invalid amount 'lots'"), "{err}");
}

#[test]
fn written_csv_reads_back() {
    let data = generate(11, &SyntheticConfig::default());
    let mut buf = Vec::new();
    write_transactions(&mut buf, &data.transactions).unwrap();
    let back = read_transactions(buf.as_slice()).unwrap();
    assert_eq!(back, data.transactions);

    // Same input, same analysis.
    let a = analyze(&data.transactions);
    let b = analyze(&back);
    assert_eq!(a.fraud_rings, b.fraud_rings);
}
