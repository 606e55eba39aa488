use banco_core::{customer_analytics::CustomerSummary, error::AnalyticsError, table::Table};
use serde_json::json;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn table(name: &str, value: serde_json::Value) -> Table {
    Table::from_records(name, serde_json::from_value(value).unwrap())
}

fn customers() -> Table {
    table(
        "customers",
        json!([
            {"id": 1, "name": "Ana",    "customer_type": "individual", "segment": "retail",  "department": "Guatemala"},
            {"id": 2, "name": "Benito", "customer_type": "individual", "segment": "retail",  "department": "Quetzaltenango"},
            {"id": 3, "name": "Copa SA","customer_type": "business",   "segment": "premium", "department": "Guatemala"},
        ]),
    )
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// 2 retail + 1 premium customers must report retail 2 (66.7%) before
/// premium 1 (33.3%).
#[test]
fn segment_distribution_counts_and_shares() {
    let summary = CustomerSummary::compute(&customers()).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.segments.len(), 2);

    assert_eq!(summary.segments[0].segment, "retail");
    assert_eq!(summary.segments[0].count, 2);
    assert!((summary.segments[0].pct - 66.7).abs() < 0.05);

    assert_eq!(summary.segments[1].segment, "premium");
    assert_eq!(summary.segments[1].count, 1);
    assert!((summary.segments[1].pct - 33.3).abs() < 0.05);
}

/// Segment shares over all observed categories must add up to 100%.
#[test]
fn segment_shares_sum_to_one_hundred() {
    let summary = CustomerSummary::compute(&customers()).unwrap();
    let total_pct: f64 = summary.segments.iter().map(|s| s.pct).sum();
    assert!(
        (total_pct - 100.0).abs() < 0.1,
        "segment shares sum to {total_pct}, expected ~100"
    );
}

/// The customer-type distribution carries counts only.
#[test]
fn customer_type_distribution() {
    let summary = CustomerSummary::compute(&customers()).unwrap();

    assert_eq!(summary.customer_types.len(), 2);
    assert_eq!(summary.customer_types[0].value, "individual");
    assert_eq!(summary.customer_types[0].count, 2);
    assert_eq!(summary.customer_types[1].value, "business");
    assert_eq!(summary.customer_types[1].count, 1);
}

/// With six departments present, only the five most frequent are reported.
#[test]
fn top_departments_capped_at_five() {
    let mut rows = Vec::new();
    // "Alta" dominates with 3 customers, then 5 single-customer departments.
    for (i, dept) in ["Alta", "Alta", "Alta", "B", "C", "D", "E", "F"]
        .iter()
        .enumerate()
    {
        rows.push(json!({
            "id": i + 1,
            "name": format!("c{}", i + 1),
            "customer_type": "individual",
            "segment": "retail",
            "department": dept,
        }));
    }
    let customers = table("customers", serde_json::Value::Array(rows));

    let summary = CustomerSummary::compute(&customers).unwrap();
    assert_eq!(summary.top_departments.len(), 5);
    assert_eq!(summary.top_departments[0].value, "Alta");
    assert_eq!(summary.top_departments[0].count, 3);
}

/// Equal counts must order by category name ascending, independent of the
/// order records arrived in.
#[test]
fn equal_counts_order_by_name() {
    let customers = table(
        "customers",
        json!([
            {"id": 1, "name": "a", "customer_type": "individual", "segment": "retail", "department": "Zacapa"},
            {"id": 2, "name": "b", "customer_type": "individual", "segment": "retail", "department": "Izabal"},
            {"id": 3, "name": "c", "customer_type": "individual", "segment": "retail", "department": "Peten"},
        ]),
    );

    let summary = CustomerSummary::compute(&customers).unwrap();
    let order: Vec<&str> = summary
        .top_departments
        .iter()
        .map(|c| c.value.as_str())
        .collect();
    assert_eq!(order, ["Izabal", "Peten", "Zacapa"]);
}

/// A non-empty customer table without the segment column is a data-shape
/// error, surfaced at first aggregate access.
#[test]
fn missing_column_is_fatal() {
    let customers = table("customers", json!([{"id": 1, "name": "Ana"}]));

    let err = CustomerSummary::compute(&customers).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::MissingColumn { ref table, ref column }
            if table == "customers" && column == "segment"),
        "unexpected error: {err}"
    );
}
