pub mod enums;
pub mod error;
pub mod structs;
pub mod validate;
pub mod wire;

// Re-export the core types to provide a clean public API.
pub use enums::{Difficulty, Signal, StrategyId};
pub use error::CoreError;
pub use structs::{ChartPoint, PricePoint, ReturnPoint, TradeOutcome};
pub use wire::{
    BacktestBar, BacktestRequest, HistoricalPrice, PredictionRecord, PredictionRequest,
    PredictionResponse, TradeRecord,
};
