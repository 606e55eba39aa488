//! Customer base analysis.
//!
//! Computes, over the customers table:
//!   1. Segment distribution (count and share of the customer base)
//!   2. Customer-type distribution (count only)
//!   3. Top 5 departments by customer count

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::AnalyticsResult,
    report,
    table::{CategoryCount, Table},
};

const TOP_DEPARTMENTS: usize = 5;

/// Share of the customer base held by one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub segment: String,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub total: usize,
    pub segments: Vec<SegmentShare>,
    pub customer_types: Vec<CategoryCount>,
    pub top_departments: Vec<CategoryCount>,
}

impl CustomerSummary {
    pub fn compute(customers: &Table) -> AnalyticsResult<Self> {
        let total = customers.len();

        let segments = customers
            .value_counts("segment")?
            .into_iter()
            .map(|c| SegmentShare {
                pct: c.count as f64 / total as f64 * 100.0,
                segment: c.value,
                count: c.count,
            })
            .collect();

        let customer_types = customers.value_counts("customer_type")?;

        let mut top_departments = customers.value_counts("department")?;
        top_departments.truncate(TOP_DEPARTMENTS);

        Ok(Self {
            total,
            segments,
            customer_types,
            top_departments,
        })
    }
}

/// Render the customer section of the report.
pub fn write_section<W: Write>(summary: &CustomerSummary, out: &mut W) -> AnalyticsResult<()> {
    report::banner(out, "CUSTOMER ANALYSIS")?;

    writeln!(out, "\nDistribution by segment:")?;
    for s in &summary.segments {
        writeln!(out, "   {}: {} ({:.1}%)", s.segment, s.count, s.pct)?;
    }

    writeln!(out, "\nDistribution by customer type:")?;
    for c in &summary.customer_types {
        writeln!(out, "   {}: {}", c.value, c.count)?;
    }

    writeln!(out, "\nTop {TOP_DEPARTMENTS} departments:")?;
    for c in &summary.top_departments {
        writeln!(out, "   {}: {}", c.value, c.count)?;
    }

    Ok(())
}
