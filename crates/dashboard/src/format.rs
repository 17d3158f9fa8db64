//! Formatting helpers for the summary display.
//!
//! Everything upstream works in fractions; this is the only place they become percentages.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Format a fraction as a percentage string, e.g. `0.085` → `"8.50%"`.
pub fn format_pct(fraction: f64) -> String {
    match to_percent(fraction) {
        Some(pct) => format!("{:.2}%", pct),
        None => format!("{}%", fraction * 100.0),
    }
}

/// Convert a fraction to a percentage rounded to two decimal places.
///
/// Returns `None` for non-finite input.
pub fn to_percent(fraction: f64) -> Option<Decimal> {
    Decimal::from_f64(fraction * 100.0).map(|pct| pct.round_dp(2))
}

/// Format a price with a dollar sign and two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a dimensionless ratio such as Sharpe.
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}", value)
}
