//! Report formatting helpers shared by the section writers.

use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Write a section banner: a rule, the title, a rule.
pub fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

/// Format a monetary amount with thousands separators and two decimals,
/// e.g. `1234567.891` -> `"1,234,567.89"`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}
