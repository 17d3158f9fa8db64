//! Boundary checks shared by every crate that accepts numeric series.

use chrono::NaiveDate;

use crate::error::CoreError;

pub fn ensure_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid(field, format!("expected a finite number, got {}", value)))
    }
}

pub fn ensure_positive_price(price: f64) -> Result<(), CoreError> {
    ensure_finite("price", price)?;
    if price > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid("price", format!("must be positive, got {}", price)))
    }
}

/// Confidence must lie in `[0, 1]`. Out-of-range values are rejected, never clamped.
pub fn ensure_confidence(confidence: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(CoreError::invalid(
            "confidence",
            format!("must be within [0, 1], got {}", confidence),
        ))
    }
}

/// Checks that timestamps are strictly increasing.
pub fn ensure_strictly_ordered<I>(field: &str, timestamps: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut previous: Option<NaiveDate> = None;
    for (index, timestamp) in timestamps.into_iter().enumerate() {
        if let Some(prev) = previous {
            if timestamp <= prev {
                return Err(CoreError::invalid(
                    field,
                    format!(
                        "timestamps must be strictly increasing, but {} at index {} follows {}",
                        timestamp, index, prev
                    ),
                ));
            }
        }
        previous = Some(timestamp);
    }
    Ok(())
}
