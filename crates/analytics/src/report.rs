use serde::{Deserialize, Serialize};

/// Performance statistics of a continuous value series.
///
/// Every field is a fraction (`0.085` is 8.5%), never a percentage.
/// `win_rate` is always `0.0` here: a value series has no discrete trades,
/// so the authoritative win rate lives in [`TradeSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub cagr: f64,
    pub sharpe_ratio: f64,
    /// Largest peak-to-trough decline, as a non-positive fraction.
    pub max_drawdown: f64,
    pub total_return: f64,
    /// Annualized sample standard deviation of per-period returns.
    pub volatility: f64,
    pub win_rate: f64,
}

/// Statistics over a list of discrete trades.
///
/// An empty trade list is a valid "no activity" result and yields the
/// all-zero default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeSummary {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub average_trade: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    /// Gross gains over gross losses. `None` when no trade lost money.
    pub profit_factor: Option<f64>,
}
