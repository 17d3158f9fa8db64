use crate::error::AnalyticsError;
use crate::math::{mean, period_returns, sample_std_dev};
use crate::report::{PerformanceSummary, TradeSummary};
use core_types::validate::{ensure_finite, ensure_positive_price, ensure_strictly_ordered};
use core_types::{PricePoint, TradeOutcome};

/// A stateless calculator for deriving performance metrics from value series and trades.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates performance metrics for a continuous value series.
    ///
    /// # Arguments
    ///
    /// * `path` - A non-empty, strictly time-ordered series of positive values.
    ///   The first point is the baseline for total return and drawdown.
    /// * `periods_per_year` - The annualization base, e.g. 252 for daily bars.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PerformanceSummary` or an `AnalyticsError`.
    /// A single-point series is valid and reports zero for every metric.
    pub fn summarize(
        &self,
        path: &[PricePoint],
        periods_per_year: u32,
    ) -> Result<PerformanceSummary, AnalyticsError> {
        self.validate_path(path, periods_per_year)?;

        let prices: Vec<f64> = path.iter().map(|p| p.price).collect();
        let mut summary = PerformanceSummary::default();

        self.calculate_growth(&prices, periods_per_year, &mut summary);
        self.calculate_drawdown(&prices, &mut summary);
        self.calculate_ratios(&prices, periods_per_year, &mut summary);

        tracing::debug!(
            points = path.len(),
            periods_per_year,
            total_return = summary.total_return,
            cagr = summary.cagr,
            max_drawdown = summary.max_drawdown,
            "summarized value series"
        );
        Ok(summary)
    }

    /// Calculates win rate and per-trade statistics for a list of trades.
    ///
    /// An empty list is not an error: it returns the all-zero summary.
    pub fn summarize_trades(&self, trades: &[TradeOutcome]) -> Result<TradeSummary, AnalyticsError> {
        for trade in trades {
            ensure_finite("return_pct", trade.return_pct)?;
        }

        let mut report = TradeSummary::default();
        if trades.is_empty() {
            // No activity: every statistic stays at zero.
            return Ok(report);
        }

        let mut gross_profit = 0.0;
        let mut gross_loss = 0.0;
        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;

        for trade in trades {
            let r = trade.return_pct;
            if trade.is_winner() {
                gross_profit += r;
                report.winning_trades += 1;
            } else if r < 0.0 {
                gross_loss += r.abs();
                report.losing_trades += 1;
            }
            best = best.max(r);
            worst = worst.min(r);
        }

        let returns: Vec<f64> = trades.iter().map(|t| t.return_pct).collect();
        report.total_trades = trades.len();
        report.win_rate = report.winning_trades as f64 / report.total_trades as f64;
        report.average_trade = mean(&returns).unwrap_or(0.0);
        report.best_trade = best;
        report.worst_trade = worst;

        if gross_loss > 0.0 {
            report.profit_factor = Some(gross_profit / gross_loss);
        }

        tracing::debug!(
            trades = report.total_trades,
            win_rate = report.win_rate,
            average_trade = report.average_trade,
            "summarized trades"
        );
        Ok(report)
    }

    fn validate_path(&self, path: &[PricePoint], periods_per_year: u32) -> Result<(), AnalyticsError> {
        if periods_per_year == 0 {
            return Err(AnalyticsError::ZeroPeriodsPerYear);
        }
        if path.is_empty() {
            return Err(AnalyticsError::NotEnoughData(
                "a value series needs at least one point".to_string(),
            ));
        }
        for point in path {
            ensure_positive_price(point.price)?;
        }
        ensure_strictly_ordered("path", path.iter().map(|p| p.timestamp))?;
        Ok(())
    }

    /// Total return and CAGR, both measured from the first point.
    ///
    /// CAGR is computed in log space. Growth too steep to represent saturates
    /// at `f64::MAX` instead of overflowing to infinity.
    fn calculate_growth(&self, prices: &[f64], periods_per_year: u32, summary: &mut PerformanceSummary) {
        let (Some(first), Some(last)) = (prices.first(), prices.last()) else {
            return;
        };
        let growth = last / first;
        summary.total_return = growth - 1.0;

        // With one point no time has elapsed, so CAGR is defined as zero.
        let elapsed = prices.len() - 1;
        if elapsed > 0 {
            let exponent = f64::from(periods_per_year) / elapsed as f64;
            let annual_growth = (exponent * growth.ln()).exp();
            summary.cagr = if annual_growth.is_finite() {
                annual_growth - 1.0
            } else {
                tracing::warn!(growth, elapsed, periods_per_year, "CAGR saturated");
                f64::MAX
            };
        }
    }

    /// Maximum drawdown from the running peak, as a non-positive fraction.
    fn calculate_drawdown(&self, prices: &[f64], summary: &mut PerformanceSummary) {
        let mut peak = f64::NEG_INFINITY;
        let mut max_drawdown = 0.0_f64;

        for &price in prices {
            if price > peak {
                peak = price;
            }
            let drawdown = price / peak - 1.0;
            if drawdown < max_drawdown {
                max_drawdown = drawdown;
            }
        }

        summary.max_drawdown = max_drawdown;
    }

    /// Annualized volatility and Sharpe ratio from per-period simple returns.
    ///
    /// Uses the sample standard deviation. Fewer than two returns, or a
    /// constant return series, leave both at zero. No risk-free offset is applied.
    fn calculate_ratios(&self, prices: &[f64], periods_per_year: u32, summary: &mut PerformanceSummary) {
        let returns = period_returns(prices);
        let (Some(avg), Some(std_dev)) = (mean(&returns), sample_std_dev(&returns)) else {
            return;
        };

        let periods = f64::from(periods_per_year);
        let volatility = std_dev * periods.sqrt();
        summary.volatility = volatility;

        if volatility > 0.0 {
            summary.sharpe_ratio = avg * periods / volatility;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn path(prices: &[f64]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| PricePoint {
                timestamp: start + Days::new(i as u64),
                price: *price,
            })
            .collect()
    }

    fn trades(returns: &[f64]) -> Vec<TradeOutcome> {
        returns.iter().copied().map(TradeOutcome::new).collect()
    }

    #[test]
    fn test_compounded_forecast_scenario() {
        let engine = AnalyticsEngine::new();
        let summary = engine
            .summarize(&path(&[100.0, 101.0, 98.98, 101.9494]), 252)
            .unwrap();

        assert!((summary.total_return - 0.019494).abs() < 1e-9);
        assert!((summary.max_drawdown - (98.98 / 101.0 - 1.0)).abs() < 1e-12);
        assert!((summary.max_drawdown + 0.02).abs() < 1e-9);
        assert_eq!(summary.win_rate, 0.0);

        let expected_cagr = 1.019494_f64.powf(252.0 / 3.0) - 1.0;
        assert!((summary.cagr - expected_cagr).abs() < 1e-6 * expected_cagr.abs());

        // Returns are [0.01, -0.02, 0.03]: mean 0.00666.., sample std 0.025166..
        let std = (((0.01f64 - 0.02 / 3.0).powi(2)
            + (-0.02f64 - 0.02 / 3.0).powi(2)
            + (0.03f64 - 0.02 / 3.0).powi(2))
            / 2.0)
            .sqrt();
        assert!((summary.volatility - std * 252f64.sqrt()).abs() < 1e-9);
        assert!((summary.sharpe_ratio - (0.02 / 3.0) / std * 252f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_single_point_series_is_degenerate_not_an_error() {
        let summary = AnalyticsEngine::new().summarize(&path(&[250.0]), 252).unwrap();
        assert_eq!(summary, PerformanceSummary::default());
    }

    #[test]
    fn test_two_point_series_has_no_volatility() {
        let summary = AnalyticsEngine::new().summarize(&path(&[100.0, 110.0]), 12).unwrap();
        assert!((summary.total_return - 0.1).abs() < 1e-12);
        assert!((summary.cagr - (1.1f64.powf(12.0) - 1.0)).abs() < 1e-12);
        assert_eq!(summary.volatility, 0.0);
        assert_eq!(summary.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_flat_series_has_no_growth_or_risk() {
        let summary = AnalyticsEngine::new()
            .summarize(&path(&[100.0, 100.0, 100.0, 100.0]), 252)
            .unwrap();
        assert_eq!(summary.volatility, 0.0);
        assert_eq!(summary.sharpe_ratio, 0.0);
        assert_eq!(summary.max_drawdown, 0.0);
        assert_eq!(summary.cagr, 0.0);
    }

    #[test]
    fn test_constant_growth_has_zero_volatility_and_sharpe() {
        // 25% every period, exact in binary floating point.
        let summary = AnalyticsEngine::new()
            .summarize(&path(&[64.0, 80.0, 100.0, 125.0]), 252)
            .unwrap();
        assert!((summary.total_return - (125.0 / 64.0 - 1.0)).abs() < 1e-12);
        assert_eq!(summary.volatility, 0.0);
        assert_eq!(summary.sharpe_ratio, 0.0);
        assert_eq!(summary.max_drawdown, 0.0);
        assert!(summary.cagr > 0.0);
    }

    #[test]
    fn test_drawdown_measures_from_running_peak() {
        let summary = AnalyticsEngine::new()
            .summarize(&path(&[100.0, 110.0, 105.0, 108.0, 95.0, 100.0]), 252)
            .unwrap();
        assert!((summary.max_drawdown - (95.0 / 110.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_paths_are_rejected() {
        let engine = AnalyticsEngine::new();
        assert!(matches!(
            engine.summarize(&[], 252),
            Err(AnalyticsError::NotEnoughData(_))
        ));
        assert_eq!(
            engine.summarize(&path(&[100.0]), 0),
            Err(AnalyticsError::ZeroPeriodsPerYear)
        );
        assert!(matches!(
            engine.summarize(&path(&[100.0, -1.0]), 252),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(engine.summarize(&path(&[100.0, f64::NAN]), 252).is_err());

        let mut unordered = path(&[100.0, 101.0]);
        unordered.swap(0, 1);
        assert!(matches!(
            engine.summarize(&unordered, 252),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_steep_daily_growth_saturates_cagr() {
        let engine = AnalyticsEngine::new();

        let summary = engine.summarize(&path(&[1.0, 20.0]), 252).unwrap();
        assert!((summary.total_return - 19.0).abs() < 1e-12);
        assert_eq!(summary.cagr, f64::MAX);

        let summary = engine.summarize(&path(&[1.0, 1e6]), 10_000).unwrap();
        assert_eq!(summary.cagr, f64::MAX);
    }

    #[test]
    fn test_steep_daily_loss_bottoms_out_at_total_loss() {
        let summary = AnalyticsEngine::new()
            .summarize(&path(&[20.0, 1.0]), 252)
            .unwrap();
        assert!((summary.total_return + 0.95).abs() < 1e-12);
        assert!(summary.cagr >= -1.0 && summary.cagr < -0.999);
    }

    #[test]
    fn test_trade_summary_scenario() {
        let summary = AnalyticsEngine::new()
            .summarize_trades(&trades(&[0.05, -0.02, 0.03]))
            .unwrap();

        assert_eq!(summary.total_trades, 3);
        assert_eq!(summary.winning_trades, 2);
        assert_eq!(summary.losing_trades, 1);
        assert!((summary.win_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((summary.win_rate - 0.667).abs() < 1e-3);
        assert_eq!(summary.best_trade, 0.05);
        assert_eq!(summary.worst_trade, -0.02);
        assert!((summary.average_trade - 0.02).abs() < 1e-12);
        assert!((summary.profit_factor.unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_trades_yield_zero_summary() {
        let summary = AnalyticsEngine::new().summarize_trades(&[]).unwrap();
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.total_trades, 0);
        assert_eq!(summary.average_trade, 0.0);
        assert_eq!(summary.best_trade, 0.0);
        assert_eq!(summary.worst_trade, 0.0);
        assert_eq!(summary.profit_factor, None);
    }

    #[test]
    fn test_breakeven_trades_are_neither_wins_nor_losses() {
        let summary = AnalyticsEngine::new()
            .summarize_trades(&trades(&[0.0, 0.01]))
            .unwrap();
        assert_eq!(summary.winning_trades, 1);
        assert_eq!(summary.losing_trades, 0);
        assert_eq!(summary.win_rate, 0.5);
        assert_eq!(summary.profit_factor, None);
    }

    #[test]
    fn test_nan_trade_is_rejected() {
        assert!(matches!(
            AnalyticsEngine::new().summarize_trades(&trades(&[0.01, f64::NAN])),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_summary_serializes_as_fractions() {
        let summary = AnalyticsEngine::new().summarize(&path(&[100.0, 108.5]), 1).unwrap();
        let json = serde_json::to_value(summary).unwrap();
        assert!((json["total_return"].as_f64().unwrap() - 0.085).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_non_decreasing_path_has_no_drawdown(
            start in 1.0f64..1_000.0,
            steps in proptest::collection::vec(0.0f64..0.05, 0..50),
        ) {
            let mut prices = vec![start];
            for step in steps {
                let last = *prices.last().unwrap();
                prices.push(last * (1.0 + step));
            }
            let summary = AnalyticsEngine::new().summarize(&path(&prices), 252).unwrap();
            prop_assert_eq!(summary.max_drawdown, 0.0);
        }

        #[test]
        fn prop_metrics_are_always_finite(
            prices in proptest::collection::vec(1.0f64..200.0, 1..60),
        ) {
            let summary = AnalyticsEngine::new().summarize(&path(&prices), 252);
            if let Ok(summary) = summary {
                prop_assert!(summary.volatility.is_finite() && summary.volatility >= 0.0);
                prop_assert!(summary.sharpe_ratio.is_finite());
                prop_assert!(summary.max_drawdown <= 0.0 && summary.max_drawdown > -1.0);
                prop_assert!(summary.total_return.is_finite());
            }
        }

        #[test]
        fn prop_win_rate_is_a_fraction(
            returns in proptest::collection::vec(-0.5f64..0.5, 0..40),
        ) {
            let summary = AnalyticsEngine::new().summarize_trades(&trades(&returns)).unwrap();
            prop_assert!((0.0..=1.0).contains(&summary.win_rate));
            prop_assert!(summary.worst_trade <= summary.best_trade);
        }
    }
}
