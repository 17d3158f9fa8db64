use core_types::{Difficulty, ReturnPoint, Signal};

use crate::error::SignalError;

/// Forecasts below this confidence are always `Hold`.
pub const MIN_CONFIDENCE: f64 = 0.70;

/// Maps a predicted return and its confidence to a trading signal.
///
/// - `confidence < 0.70` → `Hold`, whatever the return.
/// - otherwise a positive return is `Buy`, a negative one `Sell`, and exactly zero `Hold`.
///
/// Confidence outside `[0, 1]` and non-finite returns are rejected rather than clamped.
pub fn classify(predicted_return: f64, confidence: f64) -> Result<Signal, SignalError> {
    if !(0.0..=1.0).contains(&confidence) {
        tracing::warn!(confidence, "confidence outside [0, 1]");
        return Err(SignalError::ConfidenceOutOfRange(confidence));
    }
    if !predicted_return.is_finite() {
        return Err(SignalError::NonFiniteReturn(predicted_return));
    }

    let signal = if confidence < MIN_CONFIDENCE {
        Signal::Hold
    } else if predicted_return > 0.0 {
        Signal::Buy
    } else if predicted_return < 0.0 {
        Signal::Sell
    } else {
        Signal::Hold
    };

    tracing::trace!(predicted_return, confidence, %signal, "classified forecast");
    Ok(signal)
}

/// Classifies every point of a forecast, in order.
pub fn classify_series(points: &[ReturnPoint]) -> Result<Vec<Signal>, SignalError> {
    points
        .iter()
        .map(|point| classify(point.predicted_return, point.confidence))
        .collect()
}

/// Labels a forecast by magnitude alone, the way the prediction service tags
/// its own output: a move beyond the difficulty's threshold in either
/// direction is `Buy` or `Sell`, anything inside the band is `Hold`.
pub fn classify_by_threshold(
    predicted_return: f64,
    difficulty: Difficulty,
) -> Result<Signal, SignalError> {
    if !predicted_return.is_finite() {
        return Err(SignalError::NonFiniteReturn(predicted_return));
    }
    let threshold = difficulty.return_threshold();
    Ok(if predicted_return > threshold {
        Signal::Buy
    } else if predicted_return < -threshold {
        Signal::Sell
    } else {
        Signal::Hold
    })
}
