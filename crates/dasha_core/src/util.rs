//! Shared numeric helpers.

use crate::error::DashaError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Reject NaN and infinities produced during period arithmetic.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, DashaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DashaError::ArithmeticAnomaly(what))
    }
}
