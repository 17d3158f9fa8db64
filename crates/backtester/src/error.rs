use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BacktestError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] core_types::CoreError),

    #[error("Invalid input: initial capital must be positive, got {0}")]
    InvalidCapital(f64),

    #[error("Equity path error during backtest: {0}")]
    Forecast(#[from] forecast::ForecastError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Historical data for the backtest is missing.")]
    DataUnavailable,
}
