use crate::error::BacktestError;
use analytics::{AnalyticsEngine, PerformanceSummary, TradeSummary};
use core_types::validate::{ensure_positive_price, ensure_strictly_ordered};
use core_types::{BacktestBar, PricePoint, StrategyId};
use serde::{Deserialize, Serialize};

pub mod buy_and_hold;
pub mod error;
pub mod signal_following;
pub mod strategy;

pub use buy_and_hold::BuyAndHold;
pub use signal_following::SignalFollowing;
pub use strategy::{Strategy, StrategyRun, create_strategy};

/// The outcome of one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub strategy: StrategyId,
    pub initial_capital: f64,
    pub final_portfolio_value: f64,
    pub trades_count: usize,
    /// Statistics of the equity curve.
    pub performance: PerformanceSummary,
    /// Statistics of the completed trades; its win rate is the authoritative one.
    pub trades: TradeSummary,
    /// Portfolio value at every bar, starting with the initial capital at the first bar.
    pub equity_curve: Vec<PricePoint>,
}

/// Replays a strategy over historical bars and scores the result.
///
/// The equity curve is compounded from the strategy's period returns with the
/// forecast path compounder, then summarized like any other value series.
#[derive(Debug, Clone, Copy)]
pub struct Backtester {
    analytics_engine: AnalyticsEngine,
    periods_per_year: u32,
}

impl Backtester {
    pub fn new(analytics_engine: AnalyticsEngine, periods_per_year: u32) -> Self {
        Self {
            analytics_engine,
            periods_per_year,
        }
    }

    pub fn run(
        &self,
        strategy: &dyn Strategy,
        bars: &[BacktestBar],
        initial_capital: f64,
    ) -> Result<BacktestReport, BacktestError> {
        if !(initial_capital.is_finite() && initial_capital > 0.0) {
            return Err(BacktestError::InvalidCapital(initial_capital));
        }
        let Some(first_bar) = bars.first() else {
            return Err(BacktestError::DataUnavailable);
        };
        for bar in bars {
            ensure_positive_price(bar.close)?;
        }
        ensure_strictly_ordered("bars", bars.iter().map(|bar| bar.date))?;

        tracing::info!(strategy = %strategy.id(), bars = bars.len(), initial_capital, "running backtest");

        let run = strategy.run(bars);

        let mut equity_curve = Vec::with_capacity(bars.len());
        equity_curve.push(PricePoint {
            timestamp: first_bar.date,
            price: initial_capital,
        });
        equity_curve.extend(forecast::build_path(initial_capital, &run.period_returns)?);

        let performance = self
            .analytics_engine
            .summarize(&equity_curve, self.periods_per_year)?;
        let trades = self.analytics_engine.summarize_trades(&run.trades)?;
        let final_portfolio_value = equity_curve
            .last()
            .map_or(initial_capital, |point| point.price);

        tracing::info!(
            strategy = %strategy.id(),
            final_portfolio_value,
            total_return = performance.total_return,
            trades = trades.total_trades,
            "backtest complete"
        );

        Ok(BacktestReport {
            strategy: strategy.id(),
            initial_capital,
            final_portfolio_value,
            trades_count: trades.total_trades,
            performance,
            trades,
            equity_curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use core_types::Signal;

    fn bars(rows: &[(f64, Option<Signal>)]) -> Vec<BacktestBar> {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        rows.iter()
            .enumerate()
            .map(|(i, (close, signal))| BacktestBar {
                date: start + Days::new(i as u64),
                close: *close,
                signal: *signal,
            })
            .collect()
    }

    fn backtester() -> Backtester {
        Backtester::new(AnalyticsEngine::new(), 252)
    }

    #[test]
    fn test_buy_and_hold_tracks_the_market() {
        let input = bars(&[(50.0, None), (55.0, None), (45.0, None), (60.0, None)]);
        let report = backtester()
            .run(create_strategy(StrategyId::BuyAndHold).as_ref(), &input, 10_000.0)
            .unwrap();

        assert_eq!(report.strategy, StrategyId::BuyAndHold);
        assert_eq!(report.equity_curve.len(), 4);
        assert!((report.final_portfolio_value - 12_000.0).abs() < 1e-6);
        assert!((report.performance.total_return - 0.2).abs() < 1e-12);
        assert!((report.performance.max_drawdown - (45.0 / 55.0 - 1.0)).abs() < 1e-12);
        assert_eq!(report.trades_count, 1);
        assert_eq!(report.trades.win_rate, 1.0);
    }

    #[test]
    fn test_signal_following_win_rate_comes_from_trades() {
        let input = bars(&[
            (100.0, Some(Signal::Buy)),
            (110.0, Some(Signal::Hold)),
            (100.0, Some(Signal::Buy)),
            (95.0, None),
        ]);
        let report = backtester()
            .run(&SignalFollowing, &input, 1_000.0)
            .unwrap();

        assert_eq!(report.strategy, StrategyId::LstmSignals);
        assert_eq!(report.trades_count, 2);
        assert_eq!(report.trades.win_rate, 0.5);
        // +10%, flat, -5%
        assert!((report.final_portfolio_value - 1_000.0 * 1.1 * 0.95).abs() < 1e-9);
        assert_eq!(report.equity_curve[0].price, 1_000.0);
    }

    #[test]
    fn test_single_bar_is_degenerate() {
        let report = backtester()
            .run(&BuyAndHold, &bars(&[(42.0, None)]), 500.0)
            .unwrap();
        assert_eq!(report.final_portfolio_value, 500.0);
        assert_eq!(report.performance, PerformanceSummary::default());
        assert_eq!(report.trades, TradeSummary::default());
    }

    #[test]
    fn test_invalid_inputs() {
        let bt = backtester();
        assert_eq!(bt.run(&BuyAndHold, &[], 100.0), Err(BacktestError::DataUnavailable));
        assert_eq!(
            bt.run(&BuyAndHold, &bars(&[(1.0, None)]), 0.0),
            Err(BacktestError::InvalidCapital(0.0))
        );
        assert!(matches!(
            bt.run(&BuyAndHold, &bars(&[(1.0, None), (-1.0, None)]), 100.0),
            Err(BacktestError::InvalidInput(_))
        ));

        let mut reversed = bars(&[(1.0, None), (2.0, None)]);
        reversed.reverse();
        assert!(matches!(
            bt.run(&BuyAndHold, &reversed, 100.0),
            Err(BacktestError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_short_wipeout_is_reported() {
        let input = bars(&[(10.0, Some(Signal::Sell)), (25.0, None)]);
        assert!(matches!(
            backtester().run(&SignalFollowing, &input, 100.0),
            Err(BacktestError::Forecast(_))
        ));
    }
}
