use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Invalid prediction response: {0}")]
    InvalidInput(#[from] core_types::CoreError),

    #[error("Forecast path error: {0}")]
    Forecast(#[from] forecast::ForecastError),

    #[error("Signal classification error: {0}")]
    Signal(#[from] signals::SignalError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}
