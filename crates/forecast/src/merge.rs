use std::cmp::Ordering;

use core_types::validate::ensure_strictly_ordered;
use core_types::{ChartPoint, PricePoint};

use crate::error::ForecastError;

/// Merges actual closes and predicted prices into one chart series ordered by timestamp.
///
/// Points only in `history` carry `actual`, points only in `predicted` carry
/// `predicted`, and a timestamp present in both yields a single point with
/// both fields. Nothing is interpolated and gaps are left as they are.
pub fn merge_with_history(
    history: &[PricePoint],
    predicted: &[PricePoint],
) -> Result<Vec<ChartPoint>, ForecastError> {
    ensure_strictly_ordered("history", history.iter().map(|p| p.timestamp))?;
    ensure_strictly_ordered("predicted", predicted.iter().map(|p| p.timestamp))?;

    let mut merged = Vec::with_capacity(history.len() + predicted.len());
    let mut actuals = history.iter().peekable();
    let mut forecasts = predicted.iter().peekable();

    loop {
        let next = match (actuals.peek(), forecasts.peek()) {
            (Some(a), Some(f)) => match a.timestamp.cmp(&f.timestamp) {
                Ordering::Less => ChartPoint::actual(a.timestamp, a.price),
                Ordering::Greater => ChartPoint::predicted(f.timestamp, f.price),
                Ordering::Equal => ChartPoint {
                    timestamp: a.timestamp,
                    actual: Some(a.price),
                    predicted: Some(f.price),
                },
            },
            (Some(a), None) => ChartPoint::actual(a.timestamp, a.price),
            (None, Some(f)) => ChartPoint::predicted(f.timestamp, f.price),
            (None, None) => break,
        };

        if next.actual.is_some() {
            actuals.next();
        }
        if next.predicted.is_some() {
            forecasts.next();
        }
        merged.push(next);
    }

    tracing::debug!(
        history = history.len(),
        predicted = predicted.len(),
        merged = merged.len(),
        "merged chart series"
    );
    Ok(merged)
}
