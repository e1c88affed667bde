//! Formatting utilities for terminal output.
//!
//! Formatting lives in one place so the ingest/form/model code stays clean
//! and display changes are localized.

use crate::io::ingest::IngestedData;

/// Format a price as currency: `$` prefix, thousands separators, exactly two
/// decimal digits. `1234567.8` renders as `$1,234,567.80`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        // The model rejects non-finite predictions before display; this is
        // a last-resort rendering for diagnostics.
        return format!("${value:.2}");
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// One-line ingest summary for the TUI header.
pub fn format_ingest_summary(ingest: &IngestedData) -> String {
    if ingest.row_errors.is_empty() {
        format!("rows: {} used / {} read", ingest.rows_used, ingest.rows_read)
    } else {
        format!(
            "rows: {} used / {} read ({} skipped)",
            ingest.rows_used,
            ingest.rows_read,
            ingest.row_errors.len()
        )
    }
}
