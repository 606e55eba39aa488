//! Banco Analytics core.
//!
//! Fetches the bank's four record sets (customers, accounts, transactions,
//! security alerts) from the hosted row store, computes descriptive
//! aggregates, renders the console report, and exports joined datasets as
//! CSV for the visualization layer.

pub mod config;
pub mod customer_analytics;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod security_analytics;
pub mod store;
pub mod table;
pub mod transaction_analytics;
pub mod types;
