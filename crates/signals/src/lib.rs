//! # Signal Classifier
//!
//! Maps forecasts to discrete `Buy` / `Sell` / `Hold` signals.
//!
//! - [`classify`] is the fixed confidence-gated policy every view uses.
//! - [`classify_by_threshold`] is the magnitude-only labelling the prediction
//!   service applies to its own forecasts.
//! - [`confidence`] holds the heuristics that produce forecast confidences.
//!
//! Display concerns (badge colours, icons) do not live here.

pub mod classifier;
pub mod confidence;
pub mod error;

pub use classifier::{MIN_CONFIDENCE, classify, classify_by_threshold, classify_series};
pub use confidence::{forecast_confidence, point_confidence};
pub use error::SignalError;
