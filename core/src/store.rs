//! Record store access.
//!
//! RULE: Only store.rs talks to the backend.
//! Aggregators and the exporter consume in-memory tables; they never fetch.

use std::collections::HashMap;

use crate::{
    config::StoreConfig,
    error::{AnalyticsError, AnalyticsResult},
    types::Record,
};

/// Logical table names served by the row store.
pub const CUSTOMERS: &str = "customers";
pub const ACCOUNTS: &str = "accounts";
pub const TRANSACTIONS: &str = "transactions";
pub const SECURITY_ALERTS: &str = "security_alerts";

/// The one capability the pipeline needs from the backend.
pub trait RecordStore {
    /// Fetch every record of the named table as an unordered sequence.
    fn fetch(&self, table: &str) -> AnalyticsResult<Vec<Record>>;
}

/// HTTP client for the hosted row store.
///
/// Fetches `GET {base_url}/{table}` with bearer auth and expects a JSON
/// array of flat objects. Blocking on purpose: one run is a strictly
/// sequential batch.
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> AnalyticsResult<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            base_url: config.base_url,
            api_key: config.api_key,
            client,
        })
    }
}

impl RecordStore for RestStore {
    fn fetch(&self, table: &str) -> AnalyticsResult<Vec<Record>> {
        let url = format!("{}/{}", self.base_url, table);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::StoreStatus {
                table: table.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let rows: Vec<Record> =
            serde_json::from_str(&body).map_err(|source| AnalyticsError::Decode {
                table: table.to_string(),
                source,
            })?;
        log::debug!("Fetched {} rows from '{table}'", rows.len());
        Ok(rows)
    }
}

/// In-memory store used in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: &str, rows: Vec<Record>) {
        self.tables.insert(table.to_string(), rows);
    }
}

impl RecordStore for MemoryStore {
    fn fetch(&self, table: &str) -> AnalyticsResult<Vec<Record>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| AnalyticsError::UnknownTable(table.to_string()))
    }
}
