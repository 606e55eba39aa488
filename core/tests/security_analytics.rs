use banco_core::{security_analytics, security_analytics::SecuritySummary, table::Table};
use serde_json::json;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn table(name: &str, value: serde_json::Value) -> Table {
    Table::from_records(name, serde_json::from_value(value).unwrap())
}

fn alert(id: u64, kind: &str, risk: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "alert_type": kind,
        "risk_level": risk,
        "status": status,
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Alerts are counted by type, risk level, and resolution status.
#[test]
fn counts_by_type_risk_and_status() {
    let alerts = table(
        "security_alerts",
        json!([
            alert(1, "unusual_amount", "high", "open"),
            alert(2, "unusual_amount", "low", "open"),
            alert(3, "foreign_login", "high", "confirmed_resolved"),
        ]),
    );

    let summary = SecuritySummary::compute(&alerts).unwrap();

    assert_eq!(summary.by_type[0].value, "unusual_amount");
    assert_eq!(summary.by_type[0].count, 2);
    assert_eq!(summary.by_type[1].value, "foreign_login");
    assert_eq!(summary.by_type[1].count, 1);

    assert_eq!(summary.by_risk_level[0].value, "high");
    assert_eq!(summary.by_risk_level[0].count, 2);

    assert_eq!(summary.by_status[0].value, "open");
    assert_eq!(summary.by_status[0].count, 2);
}

/// 1 confirmed of 3 resolved alerts is a 33.3% fraud rate; open alerts do
/// not count as resolved.
#[test]
fn fraud_rate_over_resolved_alerts() {
    let alerts = table(
        "security_alerts",
        json!([
            alert(1, "unusual_amount", "high", "confirmed_resolved"),
            alert(2, "unusual_amount", "low", "false_positive_resolved"),
            alert(3, "foreign_login", "medium", "false_positive_resolved"),
            alert(4, "foreign_login", "high", "open"),
        ]),
    );

    let summary = SecuritySummary::compute(&alerts).unwrap();
    let rate = summary.fraud_rate.unwrap();

    assert_eq!(rate.confirmed, 1);
    assert_eq!(rate.resolved, 3);
    assert!((rate.pct - 33.3).abs() < 0.05);
}

/// With zero resolved alerts there is no rate at all, not a zero rate.
#[test]
fn no_rate_without_resolved_alerts() {
    let alerts = table(
        "security_alerts",
        json!([
            alert(1, "unusual_amount", "high", "open"),
            alert(2, "foreign_login", "low", "open"),
        ]),
    );

    let summary = SecuritySummary::compute(&alerts).unwrap();
    assert!(summary.fraud_rate.is_none());
}

/// The rendered section must not contain a fraud-rate line when nothing
/// is resolved.
#[test]
fn rate_line_absent_from_report_without_resolved() {
    let alerts = table(
        "security_alerts",
        json!([alert(1, "unusual_amount", "high", "open")]),
    );

    let summary = SecuritySummary::compute(&alerts).unwrap();
    let mut rendered = Vec::new();
    security_analytics::write_section(&summary, &mut rendered).unwrap();
    let rendered = String::from_utf8(rendered).unwrap();

    assert!(rendered.contains("SECURITY ANALYSIS"));
    assert!(!rendered.contains("Confirmed fraud rate"));
}

/// The rate line renders with one decimal and the resolved counts.
#[test]
fn rate_line_rendered_when_resolved() {
    let alerts = table(
        "security_alerts",
        json!([
            alert(1, "unusual_amount", "high", "confirmed_resolved"),
            alert(2, "foreign_login", "low", "false_positive_resolved"),
        ]),
    );

    let summary = SecuritySummary::compute(&alerts).unwrap();
    let mut rendered = Vec::new();
    security_analytics::write_section(&summary, &mut rendered).unwrap();
    let rendered = String::from_utf8(rendered).unwrap();

    assert!(rendered.contains("Confirmed fraud rate: 50.0% (1 of 2 resolved alerts)"));
}
