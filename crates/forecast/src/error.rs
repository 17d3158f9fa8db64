use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Invalid input: start price must be positive and finite, got {0}")]
    InvalidStartPrice(f64),

    #[error("Invalid input: predicted return {value} at index {index} would make the price non-positive")]
    ReturnBelowTotalLoss { index: usize, value: f64 },

    #[error(transparent)]
    InvalidInput(#[from] core_types::CoreError),
}
