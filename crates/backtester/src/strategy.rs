use core_types::{BacktestBar, ReturnPoint, StrategyId, TradeOutcome};

use crate::buy_and_hold::BuyAndHold;
use crate::signal_following::SignalFollowing;

/// What a strategy did over a run of bars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyRun {
    /// The strategy's own return for every period after the first bar,
    /// stamped with the bar that closes the period.
    pub period_returns: Vec<ReturnPoint>,
    /// Completed trades in the order they were closed.
    pub trades: Vec<TradeOutcome>,
}

/// The core trait that all backtest strategies implement.
///
/// Implementations receive bars that are already validated: non-empty,
/// positive closes, strictly increasing dates.
pub trait Strategy: Send + Sync {
    fn id(&self) -> StrategyId;

    fn run(&self, bars: &[BacktestBar]) -> StrategyRun;
}

/// Creates a new strategy instance based on the provided ID.
pub fn create_strategy(id: StrategyId) -> Box<dyn Strategy> {
    match id {
        StrategyId::BuyAndHold => Box::new(BuyAndHold),
        StrategyId::LstmSignals => Box::new(SignalFollowing),
    }
}

/// The simple return from one close to the next, stamped with the later bar.
///
/// Realized returns carry full confidence.
pub(crate) fn realized(bar: &BacktestBar, return_pct: f64) -> ReturnPoint {
    ReturnPoint {
        timestamp: bar.date,
        predicted_return: return_pct,
        confidence: 1.0,
    }
}
