//! # Performance Metrics Engine
//!
//! This crate turns value series and trade lists into the performance
//! statistics a user actually reads: CAGR, volatility, Sharpe ratio, maximum
//! drawdown, total return and win rate.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no knowledge of where the numbers come from.
//!   It depends only on `core-types`.
//! - **Stateless Calculation:** `AnalyticsEngine` holds no state. Each call
//!   validates its input and computes a fresh summary, so concurrent callers
//!   need no coordination.
//! - **No NaN Escapes:** degenerate inputs (one point, no trades, zero
//!   volatility) have documented zero results; malformed inputs are errors.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: `summarize` for value series, `summarize_trades` for trade lists.
//! - `PerformanceSummary`, `TradeSummary`: the result structs.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod math;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{PerformanceSummary, TradeSummary};
