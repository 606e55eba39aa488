//! Dataset exports for the visualization layer.
//!
//! Three derived views, each written as CSV with a header row:
//!   1. transactions_full.csv: transactions joined to accounts and customers
//!   2. security_alerts.csv:   the alert table verbatim
//!   3. customers_summary.csv: customers with balance totals and account counts
//!
//! Joins are left-outer: a transaction whose account (or customer) does not
//! exist keeps its row, with empty cells in every joined column.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::{
    error::AnalyticsResult,
    report,
    table::{BankTables, Table},
    types::{f64_value, value_key, Record},
};

pub const TRANSACTIONS_FULL_CSV: &str = "transactions_full.csv";
pub const SECURITY_ALERTS_CSV: &str = "security_alerts.csv";
pub const CUSTOMERS_SUMMARY_CSV: &str = "customers_summary.csv";

/// Account columns carried into the transaction detail view.
const ACCOUNT_JOIN_COLUMNS: [&str; 3] = ["customer_id", "account_type", "currency"];
/// Customer columns carried into the transaction detail view.
const CUSTOMER_JOIN_COLUMNS: [&str; 4] = ["name", "customer_type", "segment", "department"];

/// Index a table by one of its columns. Rows with a null key stay out of
/// the index and are unreachable through the join.
fn index_by<'a>(table: &'a Table, key: &str) -> AnalyticsResult<HashMap<String, &'a Record>> {
    table.require_column(key)?;
    let mut index = HashMap::with_capacity(table.len());
    for row in table.rows() {
        if let Some(k) = row.get(key).and_then(value_key) {
            index.insert(k, row);
        }
    }
    Ok(index)
}

/// The transaction detail view: every transaction row, with account and
/// customer attributes joined on.
pub fn transaction_detail(
    transactions: &Table,
    accounts: &Table,
    customers: &Table,
) -> AnalyticsResult<Table> {
    transactions.require_column("account_id")?;
    for column in ACCOUNT_JOIN_COLUMNS {
        accounts.require_column(column)?;
    }
    for column in CUSTOMER_JOIN_COLUMNS {
        customers.require_column(column)?;
    }

    let accounts_by_id = index_by(accounts, "id")?;
    let customers_by_id = index_by(customers, "id")?;

    let mut rows = Vec::with_capacity(transactions.len());
    for tx in transactions.rows() {
        let mut row = tx.clone();

        let account = tx
            .get("account_id")
            .and_then(value_key)
            .and_then(|k| accounts_by_id.get(&k).copied());
        for column in ACCOUNT_JOIN_COLUMNS {
            let value = account
                .and_then(|a| a.get(column))
                .cloned()
                .unwrap_or(Value::Null);
            row.insert(column.to_string(), value);
        }

        let customer = account
            .and_then(|a| a.get("customer_id"))
            .and_then(value_key)
            .and_then(|k| customers_by_id.get(&k).copied());
        for column in CUSTOMER_JOIN_COLUMNS {
            let value = customer
                .and_then(|c| c.get(column))
                .cloned()
                .unwrap_or(Value::Null);
            row.insert(column.to_string(), value);
        }

        rows.push(row);
    }

    let mut columns: Vec<String> = transactions.columns().to_vec();
    for column in ACCOUNT_JOIN_COLUMNS.iter().chain(CUSTOMER_JOIN_COLUMNS.iter()) {
        if !columns.iter().any(|c| c == column) {
            columns.push((*column).to_string());
        }
    }
    Ok(Table::with_columns("transactions_full", columns, rows))
}

/// Per-customer balance totals and account counts, left-joined onto the
/// customer table. A customer without accounts stays, with zeroed aggregates.
pub fn customer_summary(customers: &Table, accounts: &Table) -> AnalyticsResult<Table> {
    customers.require_column("id")?;
    accounts.require_column("customer_id")?;
    accounts.require_column("current_balance")?;

    let mut totals: HashMap<String, (f64, u64)> = HashMap::new();
    for account in accounts.rows() {
        let Some(key) = account.get("customer_id").and_then(value_key) else {
            continue;
        };
        let entry = totals.entry(key).or_insert((0.0, 0));
        entry.0 += f64_value(account, "current_balance").unwrap_or(0.0);
        entry.1 += 1;
    }

    let mut rows = Vec::with_capacity(customers.len());
    for customer in customers.rows() {
        let mut row = customer.clone();
        let (total_balance, account_count) = customer
            .get("id")
            .and_then(value_key)
            .and_then(|k| totals.get(&k).copied())
            .unwrap_or((0.0, 0));
        row.insert("total_balance".to_string(), Value::from(total_balance));
        row.insert("account_count".to_string(), Value::from(account_count));
        rows.push(row);
    }

    let mut columns = customers.columns().to_vec();
    for column in ["total_balance", "account_count"] {
        if !columns.iter().any(|c| c == column) {
            columns.push(column.to_string());
        }
    }
    Ok(Table::with_columns("customers_summary", columns, rows))
}

/// Render one cell for CSV output. Null becomes an empty field.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Write one table to `path` as CSV with a header row.
fn write_csv(table: &Table, path: &Path) -> AnalyticsResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        let record: Vec<String> = table.columns().iter().map(|c| cell(row.get(c))).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Produce the three export files under `out_dir`, creating it if absent.
pub fn export_all<W: Write>(
    tables: &BankTables,
    out_dir: &Path,
    out: &mut W,
) -> AnalyticsResult<()> {
    std::fs::create_dir_all(out_dir)?;

    report::banner(out, "EXPORTING DATASETS")?;

    let detail = transaction_detail(&tables.transactions, &tables.accounts, &tables.customers)?;
    let path = out_dir.join(TRANSACTIONS_FULL_CSV);
    write_csv(&detail, &path)?;
    writeln!(out, "Wrote {}", path.display())?;

    let path = out_dir.join(SECURITY_ALERTS_CSV);
    write_csv(&tables.alerts, &path)?;
    writeln!(out, "Wrote {}", path.display())?;

    let summary = customer_summary(&tables.customers, &tables.accounts)?;
    let path = out_dir.join(CUSTOMERS_SUMMARY_CSV);
    write_csv(&summary, &path)?;
    writeln!(out, "Wrote {}", path.display())?;

    log::info!("Exported 3 datasets to {}", out_dir.display());
    Ok(())
}
