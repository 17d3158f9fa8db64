use core_types::{BacktestBar, StrategyId, TradeOutcome};

use crate::strategy::{Strategy, StrategyRun, realized};

/// Buys at the first close and holds to the last: one trade spanning the whole run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuyAndHold;

impl Strategy for BuyAndHold {
    fn id(&self) -> StrategyId {
        StrategyId::BuyAndHold
    }

    fn run(&self, bars: &[BacktestBar]) -> StrategyRun {
        let (first, last) = match bars {
            [first, .., last] => (first, last),
            _ => return StrategyRun::default(),
        };

        let period_returns = bars
            .windows(2)
            .map(|w| realized(&w[1], w[1].close / w[0].close - 1.0))
            .collect();

        StrategyRun {
            period_returns,
            trades: vec![TradeOutcome::new(last.close / first.close - 1.0)],
        }
    }
}
