//! # Forecast Path Compounder
//!
//! Turns a sequence of per-period predicted returns into an absolute price
//! path, and lines that path up against actual history for charting.
//!
//! Every function here is pure: validated input in, freshly allocated output
//! out. Nothing is cached between calls.

pub mod compounder;
pub mod error;
pub mod merge;

pub use compounder::{build_path, cumulative_return, simple_return_sum};
pub use error::ForecastError;
pub use merge::merge_with_history;
