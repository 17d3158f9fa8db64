use core_types::validate::{ensure_finite, ensure_strictly_ordered};
use core_types::{PricePoint, ReturnPoint};

use crate::error::ForecastError;

/// Compounds per-period returns onto a starting price.
///
/// The price at index `i` is `start_price * Π(1 + r[0..=i])`, multiplied
/// strictly left to right. An empty `returns` slice yields an empty path.
pub fn build_path(
    start_price: f64,
    returns: &[ReturnPoint],
) -> Result<Vec<PricePoint>, ForecastError> {
    if !(start_price.is_finite() && start_price > 0.0) {
        tracing::warn!(start_price, "rejected non-positive start price");
        return Err(ForecastError::InvalidStartPrice(start_price));
    }
    validate_returns(returns)?;

    let mut multiplier = 1.0_f64;
    let path: Vec<PricePoint> = returns
        .iter()
        .map(|point| {
            multiplier *= 1.0 + point.predicted_return;
            PricePoint {
                timestamp: point.timestamp,
                price: start_price * multiplier,
            }
        })
        .collect();

    tracing::debug!(
        start_price,
        periods = path.len(),
        final_price = path.last().map(|p| p.price),
        "compounded forecast path"
    );
    Ok(path)
}

/// The compounded return over all periods, as a fraction.
pub fn cumulative_return(returns: &[ReturnPoint]) -> Result<f64, ForecastError> {
    validate_returns(returns)?;
    let growth = returns
        .iter()
        .fold(1.0_f64, |acc, point| acc * (1.0 + point.predicted_return));
    Ok(growth - 1.0)
}

/// The additive sum of the per-period returns, as a fraction.
///
/// This is the headline "expected return" the prediction service reports;
/// it ignores compounding and differs from [`cumulative_return`] for any
/// forecast longer than one period.
pub fn simple_return_sum(returns: &[ReturnPoint]) -> Result<f64, ForecastError> {
    validate_returns(returns)?;
    Ok(returns.iter().map(|point| point.predicted_return).sum())
}

fn validate_returns(returns: &[ReturnPoint]) -> Result<(), ForecastError> {
    for (index, point) in returns.iter().enumerate() {
        ensure_finite("predicted_return", point.predicted_return)?;
        if point.predicted_return <= -1.0 {
            return Err(ForecastError::ReturnBelowTotalLoss {
                index,
                value: point.predicted_return,
            });
        }
    }
    ensure_strictly_ordered("returns", returns.iter().map(|point| point.timestamp))?;
    Ok(())
}
