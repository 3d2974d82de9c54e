//! End-to-end scenarios: small hand-built transaction sets with a known
//! expected analysis.

use ringtrace_core::{analyze, PatternType, Transaction};

fn transfers(edges: &[(&str, &str)]) -> Vec<Transaction> {
    edges
        .iter()
        .enumerate()
        .map(|(i, (from, to))| Transaction::new(format!("T{i}"), *from, *to, 100.0, "2024-01-01T00:00:00Z"))
        .collect()
}

fn sorted(members: &[String]) -> Vec<String> {
    let mut m = members.to_vec();
    m.sort();
    m
}

#[test]
fn empty_input_yields_empty_result() {
    let result = analyze(&[]);
    assert_eq!(result.summary.total_accounts_analyzed, 0);
    assert_eq!(result.summary.fraud_rings_detected, 0);
    assert_eq!(result.summary.suspicious_accounts_flagged, 0);
    assert!(result.fraud_rings.is_empty());
    assert!(result.suspicious_accounts.is_empty());
}

#[test]
fn simple_three_cycle() {
    let result = analyze(&transfers(&[("A", "B"), ("B", "C"), ("C", "A")]));

    assert_eq!(result.fraud_rings.len(), 1, "rings: {:?}", result.fraud_rings);
    let ring = &result.fraud_rings[0];
    assert_eq!(ring.pattern_type, PatternType::Cycle);
    assert_eq!(ring.risk_score, 90);
    assert_eq!(sorted(&ring.member_accounts), vec!["A", "B", "C"]);

    assert_eq!(result.suspicious_accounts.len(), 3);
    for account in &result.suspicious_accounts {
        assert_eq!(account.suspicion_score, 90, "{}", account.account_id);
        assert_eq!(account.detected_patterns, vec![PatternType::Cycle]);
        assert_eq!(account.ring_id.as_deref(), Some(ring.ring_id.as_str()));
    }
}

#[test]
fn fan_in_from_ten_senders() {
    let edges: Vec<(String, String)> = (0..10).map(|i| (format!("S{i}"), "H".to_string())).collect();
    let edge_refs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let result = analyze(&transfers(&edge_refs));

    let fan_in: Vec<_> = result.rings_of(PatternType::FanIn).collect();
    assert_eq!(fan_in.len(), 1);
    assert_eq!(fan_in[0].member_accounts.len(), 11);
    assert_eq!(fan_in[0].member_accounts[0], "H");
    assert_eq!(fan_in[0].ring_id, "FANIN_H");

    let hub = result.account("H").expect("hub flagged");
    assert!(hub.suspicion_score >= 80);
    assert!(hub.detected_patterns.contains(&PatternType::FanIn));

    // Senders only touch the hub, so no shell ring links them.
    assert_eq!(result.rings_of(PatternType::Shell).count(), 0);
}

#[test]
fn fan_out_to_ten_receivers() {
    let edges: Vec<(String, String)> = (0..12).map(|i| ("D".to_string(), format!("R{i}"))).collect();
    let edge_refs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let result = analyze(&transfers(&edge_refs));

    let fan_out: Vec<_> = result.rings_of(PatternType::FanOut).collect();
    assert_eq!(fan_out.len(), 1);
    assert_eq!(fan_out[0].member_accounts.len(), 13);
    assert_eq!(result.account("D").map(|a| a.suspicion_score), Some(80));
}

#[test]
fn shell_chain() {
    let result = analyze(&transfers(&[("S1", "S2"), ("S2", "S3")]));

    assert_eq!(result.fraud_rings.len(), 1);
    let ring = &result.fraud_rings[0];
    assert_eq!(ring.pattern_type, PatternType::Shell);
    assert_eq!(ring.risk_score, 85);
    assert_eq!(sorted(&ring.member_accounts), vec!["S1", "S2", "S3"]);

    for id in ["S1", "S2", "S3"] {
        let account = result.account(id).expect("shell member flagged");
        assert_eq!(account.suspicion_score, 85);
        assert_eq!(account.detected_patterns, vec![PatternType::Shell]);
    }
}

#[test]
fn isolated_low_degree_account_not_flagged() {
    // X has degree 1 and its only neighbour H is busy (degree 11).
    let mut edges: Vec<(String, String)> = (0..10).map(|i| ("H".to_string(), format!("R{i}"))).collect();
    edges.push(("X".to_string(), "H".to_string()));
    let edge_refs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let result = analyze(&transfers(&edge_refs));

    assert!(
        result.fraud_rings.iter().all(|r| !r.contains("X")),
        "X must not be in any ring: {:?}",
        result.fraud_rings
    );
    assert!(result.account("X").is_none());
}

#[test]
fn cycle_member_with_fan_out_caps_at_100() {
    // A sits on a 3-cycle and also pays out to ten receivers.
    let mut edges: Vec<(String, String)> = vec![
        ("A".into(), "B".into()),
        ("B".into(), "C".into()),
        ("C".into(), "A".into()),
    ];
    edges.extend((0..10).map(|i| ("A".to_string(), format!("R{i}"))));
    let edge_refs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let result = analyze(&transfers(&edge_refs));

    let a = result.account("A").expect("A flagged");
    assert_eq!(a.suspicion_score, 100);
    assert_eq!(a.detected_patterns, vec![PatternType::Cycle, PatternType::FanOut]);
    // Smurfing rings come after cycle rings, so the fan-out ring id is kept.
    assert_eq!(a.ring_id.as_deref(), Some("FANOUT_A"));
    assert_eq!(result.suspicious_accounts[0].account_id, "A");
}

#[test]
fn ring_order_is_cycle_then_smurfing_then_shell() {
    let mut edges: Vec<(String, String)> = vec![
        ("S1".into(), "S2".into()),
        ("S2".into(), "S3".into()),
        ("A".into(), "B".into()),
        ("B".into(), "C".into()),
        ("C".into(), "A".into()),
    ];
    edges.extend((0..10).map(|i| (format!("P{i}"), "H".to_string())));
    let edge_refs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let result = analyze(&transfers(&edge_refs));

    let kinds: Vec<PatternType> = result.fraud_rings.iter().map(|r| r.pattern_type).collect();
    assert_eq!(kinds, vec![PatternType::Cycle, PatternType::FanIn, PatternType::Shell]);
}

#[test]
fn two_way_tail_on_low_volume_triangle_is_flagged() {
    // D only trades back and forth with C, so it sits on no cycle.
    let result = analyze(&transfers(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "C")]));

    let kinds: Vec<PatternType> = result.fraud_rings.iter().map(|r| r.pattern_type).collect();
    assert_eq!(kinds, vec![PatternType::Cycle, PatternType::Shell]);

    let d = result.account("D").expect("D flagged");
    assert_eq!(d.suspicion_score, 85);
    assert_eq!(d.detected_patterns, vec![PatternType::Shell]);
    assert_eq!(result.account("A").map(|a| a.suspicion_score), Some(100));
}

#[test]
fn two_way_chain_is_a_shell_ring() {
    let result = analyze(&transfers(&[("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")]));

    assert_eq!(result.fraud_rings.len(), 1, "rings: {:?}", result.fraud_rings);
    assert_eq!(result.fraud_rings[0].pattern_type, PatternType::Shell);
    assert_eq!(result.suspicious_accounts.len(), 3);
}
