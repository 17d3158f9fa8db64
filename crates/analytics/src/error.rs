use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] core_types::CoreError),

    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Invalid input: periods per year must be greater than zero")]
    ZeroPeriodsPerYear,
}
