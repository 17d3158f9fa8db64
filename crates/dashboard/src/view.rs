use analytics::{AnalyticsEngine, PerformanceSummary};
use chrono::NaiveDate;
use core_types::{ChartPoint, PredictionResponse, PricePoint, ReturnPoint, Signal};
use serde::{Deserialize, Serialize};

use crate::badge::{SignalBadge, badge_for};
use crate::error::DashboardError;

/// One forecasted period as shown in the predictions table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub timestamp: NaiveDate,
    pub predicted_return: f64,
    pub predicted_price: f64,
    pub confidence: f64,
    pub signal: Signal,
    pub badge: SignalBadge,
}

/// Everything the predictions view renders for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastView {
    pub ticker: String,
    pub current_price: f64,
    pub rows: Vec<ForecastRow>,
    /// Actual history followed by the predicted path.
    pub chart: Vec<ChartPoint>,
    /// Statistics of the predicted path, measured from the current price.
    pub summary: PerformanceSummary,
    /// Compounded return over the whole forecast.
    pub compounded_return: f64,
    /// Additive sum of forecast returns, as the prediction service reports it.
    pub simple_return: f64,
    pub forecast_confidence: f64,
}

impl ForecastView {
    /// Runs the full pipeline over one prediction response:
    /// compound → classify → merge with history → summarize.
    pub fn assemble(
        response: &PredictionResponse,
        periods_per_year: u32,
    ) -> Result<Self, DashboardError> {
        let points = response.return_points()?;
        let history = response.history_points()?;

        let path = forecast::build_path(response.current_price, &points)?;
        let signals = signals::classify_series(&points)?;
        let chart = forecast::merge_with_history(&history, &path)?;

        let summary = match baseline_date(&history, &points) {
            Some(date) => {
                let mut series = Vec::with_capacity(path.len() + 1);
                series.push(PricePoint {
                    timestamp: date,
                    price: response.current_price,
                });
                series.extend_from_slice(&path);
                AnalyticsEngine::new().summarize(&series, periods_per_year)?
            }
            None => PerformanceSummary::default(),
        };

        let rows = points
            .iter()
            .zip(&path)
            .zip(&signals)
            .map(|((point, price), signal)| ForecastRow {
                timestamp: point.timestamp,
                predicted_return: point.predicted_return,
                predicted_price: price.price,
                confidence: point.confidence,
                signal: *signal,
                badge: badge_for(*signal),
            })
            .collect();

        let view = Self {
            ticker: response.ticker.to_ascii_uppercase(),
            current_price: response.current_price,
            rows,
            chart,
            summary,
            compounded_return: forecast::cumulative_return(&points)?,
            simple_return: forecast::simple_return_sum(&points)?,
            forecast_confidence: signals::forecast_confidence(&points)?,
        };

        tracing::info!(
            ticker = %view.ticker,
            periods = view.rows.len(),
            expected_return = view.summary.total_return,
            "assembled forecast view"
        );
        Ok(view)
    }

    /// The last predicted price, or the current price when nothing was forecast.
    pub fn target_price(&self) -> f64 {
        self.rows
            .last()
            .map_or(self.current_price, |row| row.predicted_price)
    }

    pub fn signal_counts(&self) -> (usize, usize, usize) {
        self.rows.iter().fold((0, 0, 0), |(buy, sell, hold), row| match row.signal {
            Signal::Buy => (buy + 1, sell, hold),
            Signal::Sell => (buy, sell + 1, hold),
            Signal::Hold => (buy, sell, hold + 1),
        })
    }
}

/// The date the current price is pinned to when measuring the forecast.
///
/// The last actual close when it precedes the first forecast, otherwise the
/// day before the first forecast. `None` when nothing was forecast.
fn baseline_date(history: &[PricePoint], points: &[ReturnPoint]) -> Option<NaiveDate> {
    let first = points.first()?.timestamp;
    match history.last() {
        Some(last) if last.timestamp < first => Some(last.timestamp),
        _ => first.pred_opt(),
    }
}
