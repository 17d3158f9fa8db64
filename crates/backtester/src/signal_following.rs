use core_types::{BacktestBar, Signal, StrategyId, TradeOutcome};

use crate::strategy::{Strategy, StrategyRun, realized};

/// Trades the signal attached to each bar over the following period.
///
/// `Buy` is long, `Sell` is short and `Hold` (or no signal) is flat. A run of
/// consecutive periods under the same non-`Hold` signal is one trade, whose
/// return is the compounded directional return over the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalFollowing;

impl Strategy for SignalFollowing {
    fn id(&self) -> StrategyId {
        StrategyId::LstmSignals
    }

    fn run(&self, bars: &[BacktestBar]) -> StrategyRun {
        let mut run = StrategyRun::default();
        let mut open: Option<(Signal, f64)> = None;

        for window in bars.windows(2) {
            let (entry, exit) = (&window[0], &window[1]);
            let signal = entry.signal.unwrap_or(Signal::Hold);
            let market_return = exit.close / entry.close - 1.0;
            let strategy_return = signal.direction() * market_return;
            run.period_returns.push(realized(exit, strategy_return));

            open = match (open, signal) {
                (Some((held, growth)), current) if held == current => {
                    Some((held, growth * (1.0 + strategy_return)))
                }
                (previous, current) => {
                    if let Some((held, growth)) = previous {
                        tracing::trace!(%held, return_pct = growth - 1.0, "closed trade");
                        run.trades.push(TradeOutcome::new(growth - 1.0));
                    }
                    match current {
                        Signal::Hold => None,
                        _ => Some((current, 1.0 + strategy_return)),
                    }
                }
            };
        }

        if let Some((_, growth)) = open {
            run.trades.push(TradeOutcome::new(growth - 1.0));
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn bars(rows: &[(f64, Option<Signal>)]) -> Vec<BacktestBar> {
        let start = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap();
        rows.iter()
            .enumerate()
            .map(|(i, (close, signal))| BacktestBar {
                date: start + Days::new(i as u64),
                close: *close,
                signal: *signal,
            })
            .collect()
    }

    #[test]
    fn test_consecutive_buys_form_one_trade() {
        let run = SignalFollowing.run(&bars(&[
            (100.0, Some(Signal::Buy)),
            (110.0, Some(Signal::Buy)),
            (121.0, Some(Signal::Hold)),
            (100.0, None),
        ]));

        assert_eq!(run.period_returns.len(), 3);
        assert_eq!(run.period_returns[2].predicted_return, 0.0);
        assert_eq!(run.trades.len(), 1);
        assert!((run.trades[0].return_pct - 0.21).abs() < 1e-12);
    }

    #[test]
    fn test_short_profits_from_decline() {
        let run = SignalFollowing.run(&bars(&[(100.0, Some(Signal::Sell)), (90.0, None)]));
        assert!((run.period_returns[0].predicted_return - 0.1).abs() < 1e-12);
        assert_eq!(run.trades.len(), 1);
        assert!((run.trades[0].return_pct - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_flip_from_long_to_short_closes_trade() {
        let run = SignalFollowing.run(&bars(&[
            (100.0, Some(Signal::Buy)),
            (105.0, Some(Signal::Sell)),
            (100.0, Some(Signal::Sell)),
        ]));

        // Long 100 → 105, then short 105 → 100 still open at the end.
        assert_eq!(run.trades.len(), 2);
        assert!((run.trades[0].return_pct - 0.05).abs() < 1e-12);
        assert!((run.trades[1].return_pct - (1.0 - 100.0 / 105.0)).abs() < 1e-12);
    }

    #[test]
    fn test_all_hold_has_no_trades() {
        let run = SignalFollowing.run(&bars(&[(100.0, None), (120.0, Some(Signal::Hold)), (80.0, None)]));
        assert!(run.trades.is_empty());
        assert!(run.period_returns.iter().all(|p| p.predicted_return == 0.0));
    }
}
