use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid input: confidence must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),

    #[error("Invalid input: predicted return must be finite, got {0}")]
    NonFiniteReturn(f64),
}
