use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validate::{ensure_confidence, ensure_finite, ensure_positive_price};

/// One forecasted period as produced by the prediction service.
///
/// `predicted_return` is a fraction (`0.01` is +1%), `confidence` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub timestamp: NaiveDate,
    pub predicted_return: f64,
    pub confidence: f64,
}

impl ReturnPoint {
    /// Builds a point, rejecting non-finite returns and confidences outside `[0, 1]`.
    pub fn new(
        timestamp: NaiveDate,
        predicted_return: f64,
        confidence: f64,
    ) -> Result<Self, CoreError> {
        ensure_finite("predicted_return", predicted_return)?;
        ensure_confidence(confidence)?;
        Ok(Self {
            timestamp,
            predicted_return,
            confidence,
        })
    }
}

/// An absolute price at a point in time, either an actual close or a derived prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: NaiveDate, price: f64) -> Result<Self, CoreError> {
        ensure_positive_price(price)?;
        Ok(Self { timestamp, price })
    }
}

/// The realized or simulated fractional return of a single trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub return_pct: f64,
}

impl TradeOutcome {
    pub fn new(return_pct: f64) -> Self {
        Self { return_pct }
    }

    pub fn is_winner(&self) -> bool {
        self.return_pct > 0.0
    }
}

/// A single point of a chart series combining actual and predicted prices.
///
/// A missing side is `None` and is left out of the serialized form, so an
/// absent value is never confused with a price of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
}

impl ChartPoint {
    pub fn actual(timestamp: NaiveDate, price: f64) -> Self {
        Self {
            timestamp,
            actual: Some(price),
            predicted: None,
        }
    }

    pub fn predicted(timestamp: NaiveDate, price: f64) -> Self {
        Self {
            timestamp,
            actual: None,
            predicted: Some(price),
        }
    }
}
