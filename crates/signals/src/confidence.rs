//! Confidence heuristics used by the prediction service.
//!
//! Both scores shrink as forecasts become more extreme or more erratic, and
//! both are bounded to `[0.5, 0.9]`.

use core_types::ReturnPoint;

use crate::error::SignalError;

pub const CONFIDENCE_FLOOR: f64 = 0.5;
pub const CONFIDENCE_CEILING: f64 = 0.9;

/// Confidence assigned to a single forecasted return: `0.75 - |r| * 50`.
pub fn point_confidence(predicted_return: f64) -> Result<f64, SignalError> {
    if !predicted_return.is_finite() {
        return Err(SignalError::NonFiniteReturn(predicted_return));
    }
    Ok((0.75 - predicted_return.abs() * 50.0).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING))
}

/// Confidence in a whole forecast: `0.8 - σ * 10`, where σ is the population
/// standard deviation of the forecasted returns. An empty forecast scores `0.8`.
pub fn forecast_confidence(points: &[ReturnPoint]) -> Result<f64, SignalError> {
    if let Some(bad) = points.iter().find(|p| !p.predicted_return.is_finite()) {
        return Err(SignalError::NonFiniteReturn(bad.predicted_return));
    }

    let sigma = population_std_dev(points.iter().map(|p| p.predicted_return));
    Ok((0.8 - sigma * 10.0).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING))
}

fn population_std_dev<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let n = values.clone().count();
    if n == 0 {
        return 0.0;
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    let variance = values.map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn points(values: &[f64]) -> Vec<ReturnPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, r)| ReturnPoint {
                timestamp: start + Days::new(i as u64),
                predicted_return: *r,
                confidence: 0.8,
            })
            .collect()
    }

    #[test]
    fn test_point_confidence_bounds() {
        assert!((point_confidence(0.0).unwrap() - 0.75).abs() < 1e-12);
        assert!((point_confidence(-0.002).unwrap() - 0.65).abs() < 1e-12);
        assert_eq!(point_confidence(0.05).unwrap(), CONFIDENCE_FLOOR);
        assert!(point_confidence(f64::NAN).is_err());
    }

    #[test]
    fn test_forecast_confidence() {
        assert!((forecast_confidence(&[]).unwrap() - 0.8).abs() < 1e-12);
        assert!((forecast_confidence(&points(&[0.01, 0.01, 0.01])).unwrap() - 0.8).abs() < 1e-12);

        // σ of [0.01, -0.01] is 0.01 → 0.8 - 0.1
        let spread = forecast_confidence(&points(&[0.01, -0.01])).unwrap();
        assert!((spread - 0.7).abs() < 1e-12);

        let wild = forecast_confidence(&points(&[0.2, -0.2])).unwrap();
        assert_eq!(wild, CONFIDENCE_FLOOR);
    }
}
