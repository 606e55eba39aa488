//! Security alert analysis.
//!
//! Counts alerts by type, risk level, and resolution status. An alert is
//! resolved once investigation confirmed fraud or ruled it a false positive;
//! the fraud rate is the confirmed share of resolved alerts.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::AnalyticsResult,
    report,
    table::{CategoryCount, Table},
    types::str_value,
};

const STATUS_CONFIRMED: &str = "confirmed_resolved";
const STATUS_FALSE_POSITIVE: &str = "false_positive_resolved";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudRate {
    pub confirmed: usize,
    pub resolved: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySummary {
    pub by_type: Vec<CategoryCount>,
    pub by_risk_level: Vec<CategoryCount>,
    pub by_status: Vec<CategoryCount>,
    /// None while no alert has been resolved; no rate line is emitted.
    pub fraud_rate: Option<FraudRate>,
}

impl SecuritySummary {
    pub fn compute(alerts: &Table) -> AnalyticsResult<Self> {
        let by_type = alerts.value_counts("alert_type")?;
        let by_risk_level = alerts.value_counts("risk_level")?;
        let by_status = alerts.value_counts("status")?;

        let mut confirmed = 0usize;
        let mut resolved = 0usize;
        for row in alerts.rows() {
            match str_value(row, "status") {
                Some(STATUS_CONFIRMED) => {
                    confirmed += 1;
                    resolved += 1;
                }
                Some(STATUS_FALSE_POSITIVE) => resolved += 1,
                _ => {}
            }
        }
        let fraud_rate = (resolved > 0).then(|| FraudRate {
            confirmed,
            resolved,
            pct: confirmed as f64 / resolved as f64 * 100.0,
        });

        Ok(Self {
            by_type,
            by_risk_level,
            by_status,
            fraud_rate,
        })
    }
}

/// Render the security section of the report.
pub fn write_section<W: Write>(summary: &SecuritySummary, out: &mut W) -> AnalyticsResult<()> {
    report::banner(out, "SECURITY ANALYSIS")?;

    writeln!(out, "\nAlerts by type:")?;
    for c in &summary.by_type {
        writeln!(out, "   {}: {}", c.value, c.count)?;
    }

    writeln!(out, "\nAlerts by risk level:")?;
    for c in &summary.by_risk_level {
        writeln!(out, "   {}: {}", c.value, c.count)?;
    }

    writeln!(out, "\nAlert status:")?;
    for c in &summary.by_status {
        writeln!(out, "   {}: {}", c.value, c.count)?;
    }

    if let Some(rate) = &summary.fraud_rate {
        writeln!(
            out,
            "\nConfirmed fraud rate: {:.1}% ({} of {} resolved alerts)",
            rate.pct, rate.confirmed, rate.resolved
        )?;
    }

    Ok(())
}
