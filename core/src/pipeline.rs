//! Run orchestration.
//!
//! RULE: One run is strictly sequential: load, then the customer,
//! transaction, and security report sections, then export. The first error
//! aborts the run; there are no retries and no partial results.

use std::io::Write;
use std::path::Path;

use crate::{
    customer_analytics::{self, CustomerSummary},
    error::AnalyticsResult,
    export, report,
    security_analytics::{self, SecuritySummary},
    store::{self, RecordStore},
    table::{BankTables, Table},
    transaction_analytics::{self, TransactionSummary},
};

/// Fetch all four tables and report their row counts.
pub fn load_tables<S: RecordStore, W: Write>(
    store: &S,
    out: &mut W,
) -> AnalyticsResult<BankTables> {
    writeln!(out, "Loading data from the record store...")?;

    let customers = load_one(store, store::CUSTOMERS, "Customers", out)?;
    let accounts = load_one(store, store::ACCOUNTS, "Accounts", out)?;
    let transactions = load_one(store, store::TRANSACTIONS, "Transactions", out)?;
    let alerts = load_one(store, store::SECURITY_ALERTS, "Security alerts", out)?;

    Ok(BankTables {
        customers,
        accounts,
        transactions,
        alerts,
    })
}

fn load_one<S: RecordStore, W: Write>(
    store: &S,
    name: &str,
    label: &str,
    out: &mut W,
) -> AnalyticsResult<Table> {
    let rows = store.fetch(name)?;
    let table = Table::from_records(name, rows);
    writeln!(out, "{label}: {} records", table.len())?;
    Ok(table)
}

/// Execute one full analytics run against `store`, writing the report to
/// `out` and the export files under `out_dir`.
pub fn run<S: RecordStore, W: Write>(
    store: &S,
    out_dir: &Path,
    out: &mut W,
) -> AnalyticsResult<()> {
    report::banner(out, "BANK ANALYTICS REPORT")?;
    let tables = load_tables(store, out)?;

    let customers = CustomerSummary::compute(&tables.customers)?;
    customer_analytics::write_section(&customers, out)?;

    let transactions = TransactionSummary::compute(&tables.transactions)?;
    transaction_analytics::write_section(&transactions, out)?;

    let security = SecuritySummary::compute(&tables.alerts)?;
    security_analytics::write_section(&security, out)?;

    export::export_all(&tables, out_dir, out)?;
    writeln!(out, "\nExport complete.")?;

    Ok(())
}
