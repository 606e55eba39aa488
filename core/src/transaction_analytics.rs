//! Transaction volume analysis.
//!
//! Volume, channel, and amount statistics are computed over completed
//! transactions only. The rejected count is the one figure taken from the
//! unfiltered table.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::AnalyticsResult,
    report,
    table::Table,
    types::{f64_value, str_value, Record},
};

const STATUS_COMPLETED: &str = "completed";
const STATUS_REJECTED: &str = "rejected";

/// Count and monetary volume for one transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeVolume {
    pub transaction_type: String,
    pub count: usize,
    pub total_amount: f64,
}

/// Share of completed volume initiated through one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: String,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub completed: usize,
    /// Largest monetary volume first; ties order by type ascending.
    pub by_type: Vec<TypeVolume>,
    pub by_channel: Vec<ChannelShare>,
    /// None when nothing completed; the statistics block is omitted.
    pub amounts: Option<AmountStats>,
    pub rejected: usize,
}

impl TransactionSummary {
    pub fn compute(transactions: &Table) -> AnalyticsResult<Self> {
        transactions.require_column("status")?;
        transactions.require_column("transaction_type")?;
        transactions.require_column("channel")?;
        transactions.require_column("amount")?;

        let completed_rows: Vec<&Record> = transactions
            .rows()
            .iter()
            .filter(|row| str_value(row, "status") == Some(STATUS_COMPLETED))
            .collect();
        let completed = completed_rows.len();

        // Volume per type. BTreeMap first so equal sums stay in type order.
        let mut volumes: BTreeMap<String, TypeVolume> = BTreeMap::new();
        for row in &completed_rows {
            let Some(kind) = str_value(row, "transaction_type") else {
                continue;
            };
            let entry = volumes
                .entry(kind.to_string())
                .or_insert_with(|| TypeVolume {
                    transaction_type: kind.to_string(),
                    count: 0,
                    total_amount: 0.0,
                });
            entry.count += 1;
            entry.total_amount += f64_value(row, "amount").unwrap_or(0.0);
        }
        let mut by_type: Vec<TypeVolume> = volumes.into_values().collect();
        by_type.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount));

        // Channel mix over completed volume.
        let mut channels: BTreeMap<String, usize> = BTreeMap::new();
        for row in &completed_rows {
            if let Some(channel) = str_value(row, "channel") {
                *channels.entry(channel.to_string()).or_insert(0) += 1;
            }
        }
        let mut by_channel: Vec<ChannelShare> = channels
            .into_iter()
            .map(|(channel, count)| ChannelShare {
                channel,
                count,
                pct: count as f64 / completed as f64 * 100.0,
            })
            .collect();
        by_channel.sort_by(|a, b| b.count.cmp(&a.count));

        let amount_values: Vec<f64> = completed_rows
            .iter()
            .filter_map(|row| f64_value(row, "amount"))
            .collect();
        let amounts = if amount_values.is_empty() {
            None
        } else {
            let sum: f64 = amount_values.iter().sum();
            Some(AmountStats {
                mean: sum / amount_values.len() as f64,
                max: amount_values.iter().copied().fold(f64::MIN, f64::max),
                min: amount_values.iter().copied().fold(f64::MAX, f64::min),
            })
        };

        let rejected = transactions
            .rows()
            .iter()
            .filter(|row| str_value(row, "status") == Some(STATUS_REJECTED))
            .count();

        Ok(Self {
            completed,
            by_type,
            by_channel,
            amounts,
            rejected,
        })
    }
}

/// Render the transaction section of the report.
pub fn write_section<W: Write>(summary: &TransactionSummary, out: &mut W) -> AnalyticsResult<()> {
    report::banner(out, "TRANSACTION ANALYSIS")?;

    writeln!(out, "\nVolume by transaction type:")?;
    for v in &summary.by_type {
        writeln!(
            out,
            "   {}: {} transactions, Q{}",
            v.transaction_type,
            v.count,
            report::format_amount(v.total_amount)
        )?;
    }

    writeln!(out, "\nTransactions by channel:")?;
    for c in &summary.by_channel {
        writeln!(out, "   {}: {} ({:.1}%)", c.channel, c.count, c.pct)?;
    }

    if let Some(stats) = &summary.amounts {
        writeln!(out, "\nAmount statistics:")?;
        writeln!(out, "   Average amount: Q{}", report::format_amount(stats.mean))?;
        writeln!(out, "   Maximum amount: Q{}", report::format_amount(stats.max))?;
        writeln!(out, "   Minimum amount: Q{}", report::format_amount(stats.min))?;
    }

    writeln!(out, "\nRejected transactions: {}", summary.rejected)?;

    Ok(())
}
