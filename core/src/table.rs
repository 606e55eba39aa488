//! In-memory tables.
//!
//! Records stay untyped (column name -> JSON value) so every source column
//! survives through to the exports. Nothing is validated at load time; a
//! missing column surfaces at first aggregate access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    types::{str_value, Record},
};

/// One category value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// A read-only snapshot of one backend table.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Record>,
}

/// The four snapshots one run operates on.
#[derive(Debug, Clone)]
pub struct BankTables {
    pub customers: Table,
    pub accounts: Table,
    pub transactions: Table,
    pub alerts: Table,
}

impl Table {
    /// Build a table from raw records, preserving every column that occurs
    /// in any row.
    pub fn from_records(name: &str, rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    /// Build a table with an explicit column order. Used for derived views
    /// where joined columns are appended after the source columns.
    pub fn with_columns(name: &str, columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Fail with a data-shape error unless `column` exists in this table.
    /// An empty table passes: it has no shape to contradict.
    pub fn require_column(&self, column: &str) -> AnalyticsResult<()> {
        if self.rows.is_empty() || self.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(AnalyticsError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
        }
    }

    /// Frequency of each non-null value of `column`, most frequent first.
    /// Equal counts order by value ascending, so the result does not depend
    /// on fetch order.
    pub fn value_counts(&self, column: &str) -> AnalyticsResult<Vec<CategoryCount>> {
        self.require_column(column)?;
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in &self.rows {
            if let Some(value) = str_value(row, column) {
                *counts.entry(value.to_string()).or_insert(0) += 1;
            }
        }
        let mut out: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount { value, count })
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(out)
    }
}
