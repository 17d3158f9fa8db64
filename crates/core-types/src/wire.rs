//! Records exchanged with the prediction and persistence services.
//!
//! Field names follow the JSON the prediction service emits. Conversion into
//! the domain types validates every value and rejects rather than repairs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, Signal, StrategyId};
use crate::error::CoreError;
use crate::structs::{PricePoint, ReturnPoint, TradeOutcome};
use crate::validate::ensure_positive_price;

pub const MAX_TICKER_LEN: usize = 10;
pub const MIN_FORECAST_DAYS: u32 = 1;
pub const MAX_FORECAST_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub date: NaiveDate,
    pub predicted_return: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TryFrom<&PredictionRecord> for ReturnPoint {
    type Error = CoreError;

    fn try_from(record: &PredictionRecord) -> Result<Self, Self::Error> {
        let confidence = record.confidence.ok_or_else(|| {
            CoreError::invalid("confidence", format!("missing for forecast dated {}", record.date))
        })?;
        ReturnPoint::new(record.date, record.predicted_return, confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    pub date: NaiveDate,
    pub close: f64,
}

impl TryFrom<&HistoricalPrice> for PricePoint {
    type Error = CoreError;

    fn try_from(record: &HistoricalPrice) -> Result<Self, Self::Error> {
        PricePoint::new(record.date, record.close)
    }
}

/// The body of a prediction response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub ticker: String,
    pub current_price: f64,
    #[serde(default)]
    pub predictions: Vec<PredictionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<Signal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_return: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub history: Vec<HistoricalPrice>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl PredictionResponse {
    /// Validated forecast points, in the order received.
    pub fn return_points(&self) -> Result<Vec<ReturnPoint>, CoreError> {
        self.predictions.iter().map(ReturnPoint::try_from).collect()
    }

    /// Validated historical closes, in the order received.
    pub fn history_points(&self) -> Result<Vec<PricePoint>, CoreError> {
        self.history.iter().map(PricePoint::try_from).collect()
    }
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(alias = "returnPct")]
    pub return_pct: f64,
}

impl TryFrom<&TradeRecord> for TradeOutcome {
    type Error = CoreError;

    fn try_from(record: &TradeRecord) -> Result<Self, Self::Error> {
        crate::validate::ensure_finite("return_pct", record.return_pct)?;
        Ok(TradeOutcome::new(record.return_pct))
    }
}

/// One bar of a backtest input: an actual close and, optionally, the signal
/// that was in force at that close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestBar {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub ticker: String,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

impl PredictionRequest {
    pub fn new(ticker: impl Into<String>, forecast_days: u32, difficulty: Difficulty) -> Self {
        Self {
            ticker: ticker.into(),
            period: default_period(),
            forecast_days,
            difficulty,
        }
    }

    /// Validates the request and normalizes the ticker to upper case.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.ticker = validate_ticker(&self.ticker)?;
        if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            return Err(CoreError::invalid(
                "forecast_days",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_FORECAST_DAYS, MAX_FORECAST_DAYS, self.forecast_days
                ),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub ticker: String,
    #[serde(default)]
    pub strategy: StrategyId,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

impl BacktestRequest {
    pub fn new(
        ticker: impl Into<String>,
        strategy: StrategyId,
        initial_capital: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            strategy,
            period: default_period(),
            initial_capital,
            difficulty,
        }
    }

    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.ticker = validate_ticker(&self.ticker)?;
        ensure_positive_price(self.initial_capital).map_err(|_| {
            CoreError::invalid(
                "initial_capital",
                format!("must be positive, got {}", self.initial_capital),
            )
        })?;
        Ok(self)
    }
}

fn validate_ticker(ticker: &str) -> Result<String, CoreError> {
    let ticker = ticker.trim();
    if ticker.is_empty() || ticker.len() > MAX_TICKER_LEN {
        return Err(CoreError::invalid(
            "ticker",
            format!("must be 1 to {} characters, got '{}'", MAX_TICKER_LEN, ticker),
        ));
    }
    Ok(ticker.to_ascii_uppercase())
}

fn default_period() -> String {
    "1y".to_string()
}

fn default_forecast_days() -> u32 {
    5
}

fn default_initial_capital() -> f64 {
    10_000.0
}

/// Requests that name no difficulty get the simplest model.
fn default_difficulty() -> Difficulty {
    Difficulty::Basic
}
